use crate::errors::{EngineError, EngineResult};
use crate::scheme::{BUILTIN_SCHEMES, ColorScheme, DEFAULT_SCHEME};
use crate::value::ConfigValue;
use crate::{Directive, OptionEngine};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Option defaults the engine boots with. These are the engine's own values,
/// which are not the ones the preferences layer mirrors on top of them.
static ENGINE_DEFAULTS: Lazy<BTreeMap<&'static str, ConfigValue>> = Lazy::new(|| {
    BTreeMap::from([
        ("asm.esil", ConfigValue::Bool(false)),
        ("asm.pseudo", ConfigValue::Bool(false)),
        ("asm.offset", ConfigValue::Bool(true)),
        ("asm.xrefs", ConfigValue::Bool(true)),
        ("asm.indent", ConfigValue::Bool(false)),
        ("asm.describe", ConfigValue::Bool(false)),
        ("asm.slow", ConfigValue::Bool(true)),
        ("asm.lines", ConfigValue::Bool(true)),
        ("asm.lines.fcn", ConfigValue::Bool(true)),
        ("asm.flags.offset", ConfigValue::Bool(false)),
        ("asm.emu", ConfigValue::Bool(false)),
        ("asm.cmt.right", ConfigValue::Bool(true)),
        ("asm.cmt.col", ConfigValue::Int(71)),
        ("asm.var.summary", ConfigValue::Bool(false)),
        ("asm.bytes", ConfigValue::Bool(true)),
        ("asm.size", ConfigValue::Bool(false)),
        ("asm.bytespace", ConfigValue::Bool(false)),
        ("asm.lbytes", ConfigValue::Bool(true)),
        ("asm.nbytes", ConfigValue::Int(6)),
        ("asm.syntax", ConfigValue::from("intel")),
        ("asm.ucase", ConfigValue::Bool(false)),
        ("asm.bb.line", ConfigValue::Bool(false)),
        ("asm.capitalize", ConfigValue::Bool(false)),
        ("asm.var.sub", ConfigValue::Bool(true)),
        ("asm.var.subonly", ConfigValue::Bool(true)),
        ("asm.tabs", ConfigValue::Int(0)),
        ("asm.tabs.off", ConfigValue::Int(0)),
        ("asm.marks", ConfigValue::Bool(true)),
        ("esil.breakoninvalid", ConfigValue::Bool(false)),
        ("graph.offset", ConfigValue::Bool(false)),
        ("scr.color", ConfigValue::Int(3)),
        ("dir.projects", ConfigValue::from("~/.local/share/cutlass/projects")),
    ])
});

/// Process-local engine holding options and color schemes in memory.
///
/// Every directive it receives is kept in an execution history so callers can
/// inspect what was sent.
pub struct InMemoryEngine {
    options: BTreeMap<String, ConfigValue>,
    custom_schemes: BTreeMap<String, ColorScheme>,
    current_scheme: ColorScheme,
    current_scheme_name: String,
    history: Vec<Directive>,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self {
            options: Self::default_options(),
            custom_schemes: BTreeMap::new(),
            current_scheme: BUILTIN_SCHEMES[DEFAULT_SCHEME].clone(),
            current_scheme_name: DEFAULT_SCHEME.to_string(),
            history: Vec::new(),
        }
    }

    fn default_options() -> BTreeMap<String, ConfigValue> {
        ENGINE_DEFAULTS
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Register (or replace) a user-defined scheme.
    pub fn add_custom_scheme(&mut self, name: &str, scheme: ColorScheme) {
        log::debug!("Registering custom color scheme '{name}'");
        self.custom_schemes.insert(name.to_string(), scheme);
    }

    pub fn remove_custom_scheme(&mut self, name: &str) -> Option<ColorScheme> {
        self.custom_schemes.remove(name)
    }

    /// Load every `*.json` file in `dir` as a custom scheme named after the
    /// file stem. Returns the number of schemes loaded.
    pub fn load_custom_schemes(&mut self, dir: &Path) -> EngineResult<usize> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let entries = fs::read_dir(dir).map_err(|source| EngineError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry
                .map_err(|source| EngineError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|source| EngineError::Io {
                path: path.clone(),
                source,
            })?;
            let value: serde_json::Value =
                serde_json::from_str(&content).map_err(|source| EngineError::Parse {
                    path: path.clone(),
                    source,
                })?;

            let name = name.to_string();
            self.add_custom_scheme(&name, ColorScheme::from_json(&value));
            loaded += 1;
        }

        log::info!("Loaded {loaded} custom color schemes from {}", dir.display());
        Ok(loaded)
    }

    /// Bundled and custom scheme names, sorted and de-duplicated.
    pub fn scheme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_SCHEMES
            .keys()
            .map(|name| name.to_string())
            .chain(self.custom_schemes.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn current_scheme_name(&self) -> &str {
        &self.current_scheme_name
    }

    pub fn option(&self, key: &str) -> Option<&ConfigValue> {
        self.options.get(key)
    }

    /// Every directive executed so far, oldest first.
    pub fn history(&self) -> &[Directive] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn resolve_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.custom_schemes
            .get(name)
            .or_else(|| BUILTIN_SCHEMES.get(name))
    }

    fn set_option(&mut self, key: String, value: ConfigValue) -> EngineResult<()> {
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(EngineError::InvalidOptionKey {
                key,
                reason: "Key must be non-empty and contain no whitespace".to_string(),
            });
        }

        // Known options keep their declared type.
        let value = match self.options.get(&key) {
            Some(existing) => value.coerce(existing.kind()),
            None => value,
        };
        self.options.insert(key, value);
        Ok(())
    }
}

impl Default for InMemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionEngine for InMemoryEngine {
    fn execute(&mut self, directive: Directive) -> EngineResult<()> {
        log::trace!("engine <- {directive}");
        self.history.push(directive.clone());

        match directive {
            Directive::ClearSettings => {
                self.options = Self::default_options();
                Ok(())
            }
            Directive::ResetColorScheme => {
                self.current_scheme = BUILTIN_SCHEMES[DEFAULT_SCHEME].clone();
                self.current_scheme_name = DEFAULT_SCHEME.to_string();
                Ok(())
            }
            Directive::LoadColorScheme(name) => {
                let scheme = self
                    .resolve_scheme(&name)
                    .cloned()
                    .ok_or_else(|| EngineError::UnknownColorScheme(name.clone()))?;
                self.current_scheme = scheme;
                self.current_scheme_name = name;
                Ok(())
            }
            Directive::SetOption { key, value } => self.set_option(key, value),
        }
    }

    fn get_bool(&self, key: &str) -> bool {
        self.options.get(key).is_some_and(ConfigValue::to_bool)
    }

    fn get_int(&self, key: &str) -> i64 {
        self.options.get(key).map(ConfigValue::to_int).unwrap_or(0)
    }

    fn get_string(&self, key: &str) -> String {
        self.options
            .get(key)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn color_scheme(&self) -> serde_json::Value {
        self.current_scheme.to_json()
    }

    fn is_custom_scheme(&self, name: &str) -> bool {
        self.custom_schemes.contains_key(name)
    }
}
