use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by an [`OptionEngine`](crate::OptionEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown color scheme '{0}'")]
    UnknownColorScheme(String),

    #[error("invalid option key '{key}': {reason}")]
    InvalidOptionKey { key: String, reason: String },

    #[error("failed to read color scheme at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse color scheme at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
