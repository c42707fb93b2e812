use crate::value::ConfigValue;
use std::fmt;

/// Commands issued to the option engine.
///
/// Every side effect the preferences layer has on the engine goes through one
/// of these. [`Display`](fmt::Display) renders the engine's command-line
/// spelling, which is what gets logged.
///
/// # Examples
///
/// ```no_run
/// use engine::{ConfigValue, Directive};
///
/// let directive = Directive::SetOption {
///     key: "asm.bytes".to_string(),
///     value: ConfigValue::Bool(true),
/// };
/// assert_eq!(directive.to_string(), "e asm.bytes=true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Drop every option back to the engine's built-in default.
    ClearSettings,

    /// Reset the color scheme to the engine's native one.
    ResetColorScheme,

    /// Load a named color scheme (bundled or custom).
    LoadColorScheme(String),

    /// Set a single option.
    SetOption {
        /// Dotted option key, e.g. `asm.cmt.col`
        key: String,
        value: ConfigValue,
    },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::ClearSettings => write!(f, "e-"),
            Directive::ResetColorScheme => write!(f, "ecd"),
            Directive::LoadColorScheme(name) => write!(f, "eco {name}"),
            Directive::SetOption { key, value } => write!(f, "e {key}={value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spelling() {
        assert_eq!(Directive::ClearSettings.to_string(), "e-");
        assert_eq!(Directive::ResetColorScheme.to_string(), "ecd");
        assert_eq!(
            Directive::LoadColorScheme("ayu".to_string()).to_string(),
            "eco ayu"
        );
        assert_eq!(
            Directive::SetOption {
                key: "asm.cmt.col".to_string(),
                value: ConfigValue::Int(35),
            }
            .to_string(),
            "e asm.cmt.col=35"
        );
    }
}
