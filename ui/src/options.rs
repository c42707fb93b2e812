//! Persisted engine options and their defaults.
//!
//! Every entry is saved in the settings store under its own key and pushed
//! into the engine at startup. The declared type of an entry is the type of
//! its default.

use engine::{ConfigValue, ValueKind};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    pub key: &'static str,
    pub default: ConfigValue,
}

impl OptionEntry {
    fn new(key: &'static str, default: impl Into<ConfigValue>) -> Self {
        Self {
            key,
            default: default.into(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.default.kind()
    }
}

pub static OPTION_CATALOG: Lazy<Vec<OptionEntry>> = Lazy::new(|| {
    vec![
        OptionEntry::new("asm.esil", false),
        OptionEntry::new("asm.pseudo", false),
        OptionEntry::new("asm.offset", true),
        OptionEntry::new("asm.xrefs", false),
        OptionEntry::new("asm.indent", false),
        OptionEntry::new("asm.describe", false),
        OptionEntry::new("asm.slow", true),
        OptionEntry::new("asm.lines", true),
        OptionEntry::new("asm.lines.fcn", true),
        OptionEntry::new("asm.flags.offset", false),
        OptionEntry::new("asm.emu", false),
        OptionEntry::new("asm.cmt.right", true),
        OptionEntry::new("asm.cmt.col", 35_i64),
        OptionEntry::new("asm.var.summary", false),
        OptionEntry::new("asm.bytes", false),
        OptionEntry::new("asm.size", false),
        OptionEntry::new("asm.bytespace", false),
        OptionEntry::new("asm.lbytes", true),
        OptionEntry::new("asm.nbytes", 10_i64),
        OptionEntry::new("asm.syntax", "intel"),
        OptionEntry::new("asm.ucase", false),
        OptionEntry::new("asm.bb.line", false),
        OptionEntry::new("asm.capitalize", false),
        OptionEntry::new("asm.var.sub", true),
        OptionEntry::new("asm.var.subonly", true),
        OptionEntry::new("asm.tabs", 5_i64),
        OptionEntry::new("asm.tabs.off", 5_i64),
        OptionEntry::new("asm.marks", false),
        OptionEntry::new("esil.breakoninvalid", true),
        OptionEntry::new("graph.offset", false),
    ]
});

pub fn find_option(key: &str) -> Option<&'static OptionEntry> {
    OPTION_CATALOG.iter().find(|entry| entry.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<_> = OPTION_CATALOG.iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), OPTION_CATALOG.len());
        assert_eq!(OPTION_CATALOG.len(), 30);
    }

    #[test]
    fn test_find_option_reports_declared_kind() {
        let entry = assert_some!(find_option("asm.syntax"));
        assert_eq!(entry.kind(), ValueKind::Str);
        assert_eq!(entry.default, ConfigValue::from("intel"));

        let entry = assert_some!(find_option("asm.nbytes"));
        assert_eq!(entry.default, ConfigValue::Int(10));

        assert_none!(find_option("scr.color"));
    }
}
