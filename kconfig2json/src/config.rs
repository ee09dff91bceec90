//! Tool configuration.
//!
//! Settings can live in a TOML file so a project does not have to repeat its
//! target on every invocation:
//!
//! ```toml
//! [target]
//! arch = "arm"
//! board = "arm/cxd56xx"
//!
//! [output]
//! pretty = true
//! ```

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::{ConvertError, Result},
    filter::TargetFilter,
};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".kconfig2json.toml";

/// Contents of the tool configuration file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub target: TargetFilter,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent the JSON output.
    pub pretty: bool,
}

impl ToolConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Locate the model snapshot for a Kconfig path.
///
/// A `.json`/`.toml` path is used as is. Otherwise the evaluator's export next
/// to it is used: `Kconfig` resolves to `Kconfig.json`, then `Kconfig.toml`.
pub fn model_snapshot_path(kconfig: &Path) -> Result<PathBuf> {
    if matches!(
        kconfig.extension().and_then(|s| s.to_str()),
        Some("json" | "toml")
    ) {
        return Ok(kconfig.to_path_buf());
    }

    ["json", "toml"]
        .iter()
        .map(|ext| {
            let mut name = OsString::from(kconfig.as_os_str());
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        })
        .find(|p| p.exists())
        .ok_or_else(|| ConvertError::MissingSnapshot(kconfig.to_path_buf()))
}
