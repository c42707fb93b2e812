use super::{LoggingConfig, setup, validation::ConfigValidationError, validation::LOG_LEVELS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
///
/// Every entry is optional; unset paths resolve to the platform defaults in
/// [`setup`].
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    settings_file: Option<PathBuf>,
    resources_dir: Option<PathBuf>,
    translations_dir: Option<PathBuf>,
    schemes_dir: Option<PathBuf>,

    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        for (field, path) in [
            ("settings_file", &self.settings_file),
            ("resources_dir", &self.resources_dir),
            ("translations_dir", &self.translations_dir),
            ("schemes_dir", &self.schemes_dir),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                errors.push(ConfigValidationError::EmptyPath { field });
            }
        }

        if let Some(path) = &self.settings_file {
            if path.is_dir() {
                errors.push(ConfigValidationError::SettingsFileIsDirectory {
                    path: path.display().to_string(),
                });
            }
        }

        for (field, dir) in [
            ("resources_dir", &self.resources_dir),
            ("schemes_dir", &self.schemes_dir),
        ] {
            if let Some(dir) = dir.as_deref().filter(|d| d.exists() && !d.is_dir()) {
                errors.push(ConfigValidationError::NotADirectory {
                    field,
                    path: dir.display().to_string(),
                });
            }
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Durable settings file, `~/.config/cutlass/settings.toml` by default.
    pub fn settings_file(&self) -> Option<PathBuf> {
        self.settings_file
            .clone()
            .or_else(|| setup::get_settings_file_path().ok())
    }

    /// Directory holding stylesheets and images.
    pub fn resources_dir(&self) -> PathBuf {
        self.resources_dir
            .clone()
            .unwrap_or_else(setup::find_resources_dir)
    }

    /// Extra translation directory searched after the bundled one.
    pub fn translations_dir(&self) -> Option<&Path> {
        self.translations_dir.as_deref()
    }

    /// User-defined color schemes, `~/.config/cutlass/themes` by default.
    pub fn schemes_dir(&self) -> Option<PathBuf> {
        self.schemes_dir
            .clone()
            .or_else(|| setup::get_schemes_dir().ok())
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    fn parse(toml: &str) -> AppConfig {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = AppConfig::default();
        assert_ok!(config.validate());
        assert_eq!(config.logging().level(), "info");
        assert_none!(config.translations_dir());
    }

    #[test]
    fn test_explicit_paths_win() {
        let config = parse(
            r#"
            settings_file = "/tmp/cutlass/settings.toml"
            resources_dir = "/opt/cutlass/resources"
            "#,
        );
        assert_some_eq!(
            config.settings_file(),
            PathBuf::from("/tmp/cutlass/settings.toml")
        );
        assert_eq!(config.resources_dir(), PathBuf::from("/opt/cutlass/resources"));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let config = parse(&format!(
            r#"
            settings_file = "{}"
            schemes_dir = "{}"
            translations_dir = ""

            [logging]
            level = "loud"
            "#,
            dir.path().display(),
            file.display()
        ));

        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::LogLevel { configured } if configured == "loud"
        )));
        assert!(errors[0].user_message().contains("translations_dir"));
    }
}
