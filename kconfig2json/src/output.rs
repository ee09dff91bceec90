//! Writing the menu tree as JSON.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    error::{ConvertError, Result},
    tree::MenuTree,
};

/// JSON layout of the written document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single line, no whitespace.
    #[default]
    Compact,
    /// Four-space indentation.
    Pretty,
}

/// Serialize `tree` into `writer`.
pub fn to_writer<W: Write>(tree: &MenuTree, writer: W, style: OutputStyle) -> Result<()> {
    match style {
        OutputStyle::Compact => serde_json::to_writer(writer, tree)?,
        OutputStyle::Pretty => {
            let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
            tree.serialize(&mut ser)?;
        }
    }
    Ok(())
}

pub fn to_string(tree: &MenuTree, style: OutputStyle) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(tree, &mut buf, style)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `tree` to `path`, or to standard output when `path` is `None`.
pub fn write_tree(tree: &MenuTree, path: Option<&Path>, style: OutputStyle) -> Result<()> {
    match path {
        Some(path) => {
            let io_err = |source| ConvertError::Io {
                path: path.to_path_buf(),
                source,
            };
            let file = File::create(path).map_err(io_err)?;
            let mut writer = BufWriter::new(file);
            to_writer(tree, &mut writer, style)?;
            writer.flush().map_err(io_err)?;
            debug!("wrote menu tree to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            to_writer(tree, &mut lock, style)?;
            lock.flush().map_err(|source| ConvertError::Io {
                path: "<stdout>".into(),
                source,
            })?;
        }
    }
    Ok(())
}
