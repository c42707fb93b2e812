use crate::error::AppError;
use crate::validation::Validator;

/// Validation errors for names typed in by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    InvalidSchemeName { name: String, reason: String },
    InvalidConfigKey { key: String, reason: String },
}

impl NameValidationError {
    pub fn user_message(&self) -> String {
        match self {
            NameValidationError::InvalidSchemeName { name, reason } => {
                format!(
                    "Invalid color theme name: '{}'\n\n\
                    Reason: {}\n\n\
                    Color theme names are alphanumeric with '-', '_' or '.'.",
                    name, reason
                )
            }
            NameValidationError::InvalidConfigKey { key, reason } => {
                format!(
                    "Invalid configuration key: '{}'\n\n\
                    Reason: {}\n\n\
                    Keys look like 'asm.bytes' or 'gui.background'.",
                    key, reason
                )
            }
        }
    }
}

impl From<NameValidationError> for AppError {
    fn from(error: NameValidationError) -> Self {
        AppError::Config(error.user_message())
    }
}

/// Validator for color scheme names passed to the engine
pub struct SchemeNameValidator;

impl Validator<str> for SchemeNameValidator {
    type Error = NameValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| NameValidationError::InvalidSchemeName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.len() > 64 {
            return Err(invalid("Name too long (max 64 characters)"));
        }

        // The name ends up in a single-line engine command
        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(invalid(
                "Name contains invalid characters (only alphanumeric, '-', '_' and '.' allowed)",
            ));
        }

        Ok(())
    }
}

/// Validator for dotted configuration keys
pub struct ConfigKeyValidator;

impl Validator<str> for ConfigKeyValidator {
    type Error = NameValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| NameValidationError::InvalidConfigKey {
            key: input.to_string(),
            reason: reason.to_string(),
        };

        if input.trim().is_empty() {
            return Err(invalid("Key cannot be empty"));
        }

        if input.chars().any(|c| c.is_whitespace() || c == '=') {
            return Err(invalid("Key cannot contain whitespace or '='"));
        }

        if input.starts_with('.') || input.ends_with('.') || input.contains("..") {
            return Err(invalid("Key segments cannot be empty"));
        }

        Ok(())
    }
}
