use super::app::AppConfig;
use crate::error::AppError;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid {field}: path is empty")]
    EmptyPath { field: &'static str },
    #[error("Invalid settings_file: {path} is a directory")]
    SettingsFileIsDirectory { path: String },
    #[error("Invalid {field}: {path} is not a directory")]
    NotADirectory { field: &'static str, path: String },
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::EmptyPath { field } => {
                format!(
                    "Empty path configured!\n\n\
                    Please set {field} in cutlass.toml to a path or remove the entry."
                )
            }
            ConfigValidationError::SettingsFileIsDirectory { path } => {
                format!(
                    "Settings file points at a directory!\n\n\
                    Your configured value: {path}\n\n\
                    Please update settings_file in cutlass.toml to a file path."
                )
            }
            ConfigValidationError::NotADirectory { field, path } => {
                format!(
                    "Expected a directory!\n\n\
                    Your configured value: {path}\n\n\
                    Please update {field} in cutlass.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Valid levels: {}\n\n\
                    Please update logging.level in cutlass.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    pub fn into_result(self) -> Result<AppConfig, AppError> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(AppError::Config(msg))
            }
        }
    }
}
