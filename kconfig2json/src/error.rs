use std::path::PathBuf;

use kconfig_model::ModelError;
use thiserror::Error;

/// Errors raised while converting a model or writing the result.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A node's item names a symbol missing from the symbol table.
    #[error("{location}: node refers to undefined symbol {name}")]
    UndefinedSymbol { name: String, location: String },

    /// A node's item points past the end of the choice table.
    #[error("{location}: node refers to undefined choice #{index}")]
    UndefinedChoice { index: usize, location: String },

    #[error("no model snapshot for {0}: expected a .json or .toml export")]
    MissingSnapshot(PathBuf),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid configuration file {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize menu tree")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
