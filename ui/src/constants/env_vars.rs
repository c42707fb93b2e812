/// Environment variable name constants
/// Application config entries can be overridden with `CUTLASS_<KEY>`, nested
/// tables separated by `__` (e.g. `CUTLASS_LOGGING__LEVEL=debug`).
//
// Config source layout
pub const ENV_PREFIX: &str = "CUTLASS";
pub const ENV_PREFIX_SEPARATOR: &str = "_";
pub const ENV_SEPARATOR: &str = "__";

// Explicit config file location
pub const CUTLASS_CONFIG: &str = "CUTLASS_CONFIG";

// Individual overrides
pub const CUTLASS_SETTINGS_FILE: &str = "CUTLASS_SETTINGS_FILE";
pub const CUTLASS_RESOURCES_DIR: &str = "CUTLASS_RESOURCES_DIR";
pub const CUTLASS_LOGGING_LEVEL: &str = "CUTLASS_LOGGING__LEVEL";
pub const CUTLASS_LOGGING_FILE: &str = "CUTLASS_LOGGING__FILE";
