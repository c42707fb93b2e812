use crate::constants::env_vars;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Load the application config.
///
/// Sources, lowest priority first: `explicit` (or the discovered
/// `cutlass.toml`, which may be absent), then `CUTLASS_*` environment
/// variables. A `.env` file in the working directory is loaded first.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match explicit {
        Some(path) => File::from(path).required(true),
        None => match setup::find_config_file() {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                File::from(path).required(false)
            }
            None => File::with_name(setup::CONFIG_FILE_NAME).required(false),
        },
    };
    let env_source = Environment::with_prefix(env_vars::ENV_PREFIX)
        .prefix_separator(env_vars::ENV_PREFIX_SEPARATOR)
        .separator(env_vars::ENV_SEPARATOR);

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your cutlass.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cutlass.toml");
        std::fs::write(
            &path,
            "resources_dir = \"/opt/cutlass\"\n\n[logging]\nlevel = \"debug\"\nfile = \"x.log\"\n",
        )
        .unwrap();

        let config = assert_ok!(load_config(Some(&path)).into_result());
        assert_eq!(config.logging().level(), "debug");
        assert_some_eq!(config.logging().file(), "x.log");
        assert_eq!(config.resources_dir(), Path::new("/opt/cutlass"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, ConfigLoadResult::LoadError(_)));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cutlass.toml");
        std::fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

        let err = assert_err!(load_config(Some(&path)).into_result());
        assert!(err.to_string().contains("Unknown log level"));
    }
}
