use serde::{Deserialize, Serialize};

use crate::{
    Tristate,
    error::{ModelError, Result},
    expr::Expr,
};

/// Declared type of a symbol.
///
/// [`SymbolType::code`] returns the numeric token the evaluator uses for the
/// type; front-ends key their widgets on those numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolType {
    #[default]
    Unknown,
    Bool,
    Tristate,
    String,
    Int,
    Hex,
}

impl SymbolType {
    pub fn code(self) -> u8 {
        match self {
            SymbolType::Unknown => 0,
            SymbolType::Bool => 3,
            SymbolType::Hex => 24,
            SymbolType::Int => 27,
            SymbolType::String => 47,
            SymbolType::Tristate => 48,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolType::Unknown => "unknown",
            SymbolType::Bool => "bool",
            SymbolType::Tristate => "tristate",
            SymbolType::String => "string",
            SymbolType::Int => "int",
            SymbolType::Hex => "hex",
        }
    }

    pub fn is_bool_or_tristate(self) -> bool {
        matches!(self, SymbolType::Bool | SymbolType::Tristate)
    }
}

fn rev_dep_default() -> Expr {
    Expr::n()
}

/// A configurable option with its evaluated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: SymbolType,
    /// Current value as computed by the evaluator, in string form.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub user_value: Option<String>,
    /// Who `select`s this symbol.
    #[serde(default = "rev_dep_default")]
    pub rev_dep: Expr,
    /// Who `imply`s this symbol.
    #[serde(default = "rev_dep_default")]
    pub weak_rev_dep: Expr,
    /// Set when the symbol mirrors an environment variable (`option env=`).
    #[serde(default)]
    pub env_var: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolType) -> Self {
        let value = match kind {
            SymbolType::Bool | SymbolType::Tristate => "n".to_string(),
            _ => String::new(),
        };
        Self {
            name: name.into(),
            kind,
            value,
            user_value: None,
            rev_dep: Expr::n(),
            weak_rev_dep: Expr::n(),
            env_var: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_rev_dep(mut self, expr: Expr) -> Self {
        self.rev_dep = expr;
        self
    }

    pub fn with_weak_rev_dep(mut self, expr: Expr) -> Self {
        self.weak_rev_dep = expr;
        self
    }

    pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
        self.env_var = Some(var.into());
        self
    }

    /// Tri-state value; `n` for non-bool/tristate types.
    pub fn tri_value(&self) -> Tristate {
        if self.kind.is_bool_or_tristate() {
            Tristate::from_str_opt(&self.value).unwrap_or_default()
        } else {
            Tristate::No
        }
    }

    /// Value in string form. Symbols of unknown type evaluate to their name.
    pub fn str_value(&self) -> &str {
        match self.kind {
            SymbolType::Unknown => &self.name,
            _ => &self.value,
        }
    }

    /// Assign a user value, validating it against the symbol type.
    ///
    /// Both `user_value` and `value` are updated; `m` on a bool symbol is
    /// promoted to `y`.
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        let invalid = || ModelError::InvalidValue {
            name: self.name.clone(),
            kind: self.kind.name(),
            value: value.to_string(),
        };

        let value = match self.kind {
            SymbolType::Bool => match Tristate::from_str_opt(value).ok_or_else(invalid)? {
                Tristate::Module => Tristate::Yes.as_str().to_string(),
                t => t.as_str().to_string(),
            },
            SymbolType::Tristate => {
                Tristate::from_str_opt(value).ok_or_else(invalid)?;
                value.to_string()
            }
            SymbolType::Int => {
                value.parse::<i64>().map_err(|_| invalid())?;
                value.to_string()
            }
            SymbolType::Hex => {
                let digits = value
                    .strip_prefix("0x")
                    .or_else(|| value.strip_prefix("0X"))
                    .unwrap_or(value);
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(invalid());
                }
                value.to_string()
            }
            SymbolType::String => value.to_string(),
            SymbolType::Unknown => return Err(invalid()),
        };

        self.user_value = Some(value.clone());
        self.value = value;
        Ok(())
    }
}

/// Index of a choice in the model's choice table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub usize);

/// A group of mutually exclusive symbols.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub name: Option<String>,
    /// Current mode of the choice.
    #[serde(default)]
    pub mode: Tristate,
    /// Mode requested by the user, if any.
    #[serde(default)]
    pub user_value: Option<Tristate>,
}

impl Choice {
    pub fn new(name: Option<&str>, mode: Tristate) -> Self {
        Self {
            name: name.map(str::to_string),
            mode,
            ..Default::default()
        }
    }
}
