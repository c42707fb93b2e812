use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed engine option value.
///
/// The engine stores every option with one of three types. Reads through a
/// different type coerce the stored value: strings `"true"`/`"1"` read as
/// `true`, numeric strings read as integers, everything that does not parse
/// reads as the neutral value (`false`, `0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// Which variant a [`ConfigValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Str,
}

impl ConfigValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Int(_) => ValueKind::Int,
            ConfigValue::Str(_) => ValueKind::Str,
        }
    }

    pub fn to_bool(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Int(i) => *i != 0,
            ConfigValue::Str(s) => {
                let s = s.trim();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
        }
    }

    pub fn to_int(&self) -> i64 {
        match self {
            ConfigValue::Bool(b) => i64::from(*b),
            ConfigValue::Int(i) => *i,
            ConfigValue::Str(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Convert this value into the given kind using the coercion rules above.
    pub fn coerce(&self, kind: ValueKind) -> ConfigValue {
        match kind {
            ValueKind::Bool => ConfigValue::Bool(self.to_bool()),
            ValueKind::Int => ConfigValue::Int(self.to_int()),
            ValueKind::Str => ConfigValue::Str(self.to_string()),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_coercion() {
        assert!(ConfigValue::from("true").to_bool());
        assert!(ConfigValue::from("1").to_bool());
        assert!(!ConfigValue::from("FALSE").to_bool());
        assert!(!ConfigValue::from("").to_bool());
        assert!(ConfigValue::Int(7).to_bool());
        assert!(!ConfigValue::Int(0).to_bool());
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(ConfigValue::from(" 42 ").to_int(), 42);
        assert_eq!(ConfigValue::from("intel").to_int(), 0);
        assert_eq!(ConfigValue::Bool(true).to_int(), 1);
    }

    #[test]
    fn test_coerce_to_kind() {
        assert_eq!(
            ConfigValue::from("35").coerce(ValueKind::Int),
            ConfigValue::Int(35)
        );
        assert_eq!(
            ConfigValue::Bool(false).coerce(ValueKind::Str),
            ConfigValue::from("false")
        );
        assert_eq!(
            ConfigValue::Int(2).coerce(ValueKind::Bool),
            ConfigValue::Bool(true)
        );
    }

    #[test]
    fn test_untagged_serde() {
        let values: Vec<ConfigValue> = serde_json::from_str(r#"[true, 10, "att"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ConfigValue::Bool(true),
                ConfigValue::Int(10),
                ConfigValue::from("att")
            ]
        );
    }
}
