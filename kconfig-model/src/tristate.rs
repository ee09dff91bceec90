use std::{fmt, ops::Not, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Three-valued truth used by dependency evaluation.
///
/// The ordering is `No < Module < Yes`, which is what `&&` (minimum) and
/// `||` (maximum) rely on.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub enum Tristate {
    #[default]
    #[serde(rename = "n")]
    No,
    #[serde(rename = "m")]
    Module,
    #[serde(rename = "y")]
    Yes,
}

impl Tristate {
    /// Short textual form: `n`, `m` or `y`.
    pub fn as_str(self) -> &'static str {
        match self {
            Tristate::No => "n",
            Tristate::Module => "m",
            Tristate::Yes => "y",
        }
    }

    /// Numeric form used by relational comparisons (0, 1, 2).
    pub fn as_num(self) -> i64 {
        match self {
            Tristate::No => 0,
            Tristate::Module => 1,
            Tristate::Yes => 2,
        }
    }

    /// Parse `n`/`m`/`y`, returning `None` for anything else.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "n" => Some(Tristate::No),
            "m" => Some(Tristate::Module),
            "y" => Some(Tristate::Yes),
            _ => None,
        }
    }

    pub fn and(self, other: Tristate) -> Tristate {
        self.min(other)
    }

    pub fn or(self, other: Tristate) -> Tristate {
        self.max(other)
    }
}

impl Not for Tristate {
    type Output = Tristate;

    fn not(self) -> Tristate {
        match self {
            Tristate::No => Tristate::Yes,
            Tristate::Module => Tristate::Module,
            Tristate::Yes => Tristate::No,
        }
    }
}

impl fmt::Display for Tristate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tristate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tristate::from_str_opt(s).ok_or_else(|| format!("not a tristate value: {s:?}"))
    }
}
