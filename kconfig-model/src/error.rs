use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or updating a configuration model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON model snapshot")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML model snapshot")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported model snapshot extension: {0:?}")]
    UnsupportedFormat(String),

    #[error("no such symbol: {0}")]
    UnknownSymbol(String),

    #[error("invalid value {value:?} for {kind} symbol {name}")]
    InvalidValue {
        name: String,
        kind: &'static str,
        value: String,
    },
}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
