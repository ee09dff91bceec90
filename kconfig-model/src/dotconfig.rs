//! Saved configuration (`.config`) loading.
//!
//! Lines look like `CONFIG_FOO=y`, `CONFIG_NAME="text"` or
//! `# CONFIG_FOO is not set`. Anything unusable is reported with `warn!` and
//! skipped, so a stale `.config` never prevents a conversion.

use std::{fs, path::Path};

use crate::{
    Kconfig,
    error::{ModelError, Result},
};

/// Default symbol name prefix in `.config` files.
pub const DEFAULT_PREFIX: &str = "CONFIG_";

/// One assignment read from a `.config` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
    /// Came from a `# ... is not set` line.
    pub unset: bool,
    pub line: usize,
}

/// Parse `.config` content into assignments, in file order.
pub fn parse(content: &str, prefix: &str) -> Vec<Assignment> {
    let mut out = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        let linenr = i + 1;
        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some(name) = comment
                .trim_start()
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(" is not set"))
            {
                out.push(Assignment {
                    name: name.to_string(),
                    value: "n".to_string(),
                    unset: true,
                    line: linenr,
                });
            }
            continue;
        }

        let Some((name, value)) = line
            .strip_prefix(prefix)
            .and_then(|rest| rest.split_once('='))
        else {
            warn!("line {linenr}: ignoring malformed line {line:?}");
            continue;
        };

        let value = if value.starts_with('"') {
            match unquote(value) {
                Some(v) => v,
                None => {
                    warn!("line {linenr}: malformed string literal for {prefix}{name}");
                    continue;
                }
            }
        } else {
            value.to_string()
        };

        out.push(Assignment {
            name: name.to_string(),
            value,
            unset: false,
            line: linenr,
        });
    }

    out
}

/// Strip surrounding double quotes and undo `\"` / `\\` escapes.
fn unquote(s: &str) -> Option<String> {
    let inner = s.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next()?);
        } else {
            out.push(c);
        }
    }
    Some(out)
}

impl Kconfig {
    /// Apply `.config` content as user values. Returns how many were applied.
    pub fn apply_config_str(&mut self, content: &str, prefix: &str) -> usize {
        let mut applied = 0;
        for a in parse(content, prefix) {
            let Some(sym) = self.symbol_mut(&a.name) else {
                warn!("line {}: unknown symbol {}{}", a.line, prefix, a.name);
                continue;
            };
            if a.unset && !sym.kind.is_bool_or_tristate() {
                continue;
            }
            match sym.set_value(&a.value) {
                Ok(()) => applied += 1,
                Err(e) => warn!("line {}: {e}", a.line),
            }
        }
        applied
    }

    /// Load a `.config` file as user values.
    pub fn load_config(&mut self, path: impl AsRef<Path>, prefix: &str) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let applied = self.apply_config_str(&content, prefix);
        info!("loaded {applied} values from {}", path.display());
        Ok(applied)
    }
}
