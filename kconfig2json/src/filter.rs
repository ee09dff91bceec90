//! Target platform scoping.
//!
//! A multi-platform source tree declares options for every architecture and
//! board. Only the common `Kconfig` file of `arch/` and `boards/` plus the
//! subtree of the configured target family are kept; everything else under
//! those directories is dropped, together with its children.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use kconfig_model::{Item, Kconfig, MenuNode};
use serde::Deserialize;

/// Why a node was left out of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Symbol shadows an environment variable.
    EnvVar(String),
    /// Defined under an architecture other than the target.
    ForeignArch(PathBuf),
    /// Defined under a board family other than the target.
    ForeignBoard(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EnvVar(var) => write!(f, "environment variable ${var}"),
            SkipReason::ForeignArch(p) => write!(f, "foreign architecture file {}", p.display()),
            SkipReason::ForeignBoard(p) => write!(f, "foreign board file {}", p.display()),
        }
    }
}

/// Which architecture and board subtrees to keep.
///
/// Families are matched as path prefixes relative to `arch_dir`/`board_dir`,
/// component by component: `arm` keeps `arch/arm/...` but not
/// `arch/arm64/...`. An unset family disables filtering of that directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetFilter {
    pub arch_dir: PathBuf,
    /// Target architecture family, e.g. `arm`.
    pub arch: Option<String>,
    pub board_dir: PathBuf,
    /// Target board family, e.g. `arm/cxd56xx`.
    pub board: Option<String>,
    /// Name of the file shared by all families in each directory.
    pub common_file: String,
}

impl Default for TargetFilter {
    fn default() -> Self {
        Self {
            arch_dir: PathBuf::from("arch"),
            arch: None,
            board_dir: PathBuf::from("boards"),
            board: None,
            common_file: "Kconfig".to_string(),
        }
    }
}

impl TargetFilter {
    /// Keep only `arch` and `board` families.
    pub fn new(arch: Option<&str>, board: Option<&str>) -> Self {
        Self {
            arch: arch.map(str::to_string),
            board: board.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn should_skip(&self, node: &MenuNode, kconf: &Kconfig) -> bool {
        self.skip_reason(node, kconf).is_some()
    }

    /// Decide whether `node` (and its subtree) must be left out.
    pub fn skip_reason(&self, node: &MenuNode, kconf: &Kconfig) -> Option<SkipReason> {
        if let Item::Symbol(name) = &node.item
            && let Some(var) = kconf.symbol(name).and_then(|s| s.env_var.as_ref())
        {
            return Some(SkipReason::EnvVar(var.clone()));
        }

        let path = source_relative(&node.filename, kconf.srctree.as_deref());
        if self.is_foreign(&path, &self.arch_dir, self.arch.as_deref()) {
            return Some(SkipReason::ForeignArch(path));
        }
        if self.is_foreign(&path, &self.board_dir, self.board.as_deref()) {
            return Some(SkipReason::ForeignBoard(path));
        }
        None
    }

    fn is_foreign(&self, path: &Path, dir: &Path, family: Option<&str>) -> bool {
        let Some(family) = family else {
            return false;
        };
        let Ok(rest) = path.strip_prefix(dir) else {
            return false;
        };
        rest != Path::new(&self.common_file) && !rest.starts_with(family)
    }
}

/// Make `path` relative to `srctree` when it lies beneath it, and drop `.`
/// components so prefix tests see the plain layout.
fn source_relative(path: &Path, srctree: Option<&Path>) -> PathBuf {
    let path = match srctree {
        Some(root) if path.is_absolute() => path.strip_prefix(root).unwrap_or(path),
        _ => path,
    };
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
