use crate::constants::env_vars;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_DIR_NAME: &str = "cutlass";
pub const CONFIG_FILE_NAME: &str = "cutlass.toml";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/cutlass on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR_NAME);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR_NAME);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard application config file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Get the durable settings file path
pub fn get_settings_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(SETTINGS_FILE_NAME))
}

/// Get the user color scheme directory
pub fn get_schemes_dir() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join("themes"))
}

/// Create the config directory and the color scheme directory
pub fn initialize_config_dir() -> Result<PathBuf, SetupError> {
    let config_dir = get_config_dir()?;
    create_dir_if_not_exists(&config_dir)?;
    create_dir_if_not_exists(&get_schemes_dir()?)?;

    log::info!("Config directory initialized: {}", config_dir.display());
    Ok(config_dir)
}

fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // Priority order:
    // 1. $CUTLASS_CONFIG
    // 2. ./cutlass.toml
    // 3. Standard OS config directory

    if let Ok(path) = std::env::var(env_vars::CUTLASS_CONFIG) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        log::warn!(
            "{} points at missing file {}",
            env_vars::CUTLASS_CONFIG,
            path.display()
        );
    }

    let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}

/// Locate the bundled resources directory
pub fn find_resources_dir() -> PathBuf {
    let mut candidates = vec![PathBuf::from("resources"), PathBuf::from("ui/resources")];
    if let Ok(config_dir) = get_config_dir() {
        candidates.push(config_dir.join("resources"));
    }

    for path in candidates {
        if path.is_dir() {
            log::info!("Found resources directory at: {}", path.display());
            return path;
        }
    }

    log::warn!("Could not find resources directory, stylesheets will be missing");
    PathBuf::from("resources")
}
