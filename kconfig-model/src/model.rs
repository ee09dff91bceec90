use std::{cmp::Ordering, collections::HashMap, fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::{
    Tristate,
    error::{ModelError, Result},
    expr::Expr,
    node::MenuNode,
    symbol::{Choice, ChoiceId, Symbol, SymbolType},
};

const DEFAULT_MODULES: &str = "MODULES";

/// A fully evaluated configuration model.
///
/// The menu tree hangs off [`Kconfig::top_node`]; symbols and choices live in
/// tables that tree items refer to by name and by [`ChoiceId`].
#[derive(Debug, Clone)]
pub struct Kconfig {
    pub top_node: MenuNode,
    /// Source tree root that node file names are relative to.
    pub srctree: Option<PathBuf>,
    modules: Option<String>,
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
    choices: Vec<Choice>,
}

/// On-disk layout of a model exported by the evaluator.
#[derive(Deserialize)]
struct Snapshot {
    top_node: MenuNode,
    #[serde(default)]
    srctree: Option<PathBuf>,
    #[serde(default = "default_modules")]
    modules: Option<String>,
    #[serde(default)]
    symbols: Vec<Symbol>,
    #[serde(default)]
    choices: Vec<Choice>,
}

fn default_modules() -> Option<String> {
    Some(DEFAULT_MODULES.to_string())
}

impl From<Snapshot> for Kconfig {
    fn from(s: Snapshot) -> Self {
        let mut kconf = Kconfig::new(s.top_node);
        kconf.srctree = s.srctree;
        kconf.modules = s.modules;
        kconf.choices = s.choices;
        for sym in s.symbols {
            kconf.add_symbol(sym);
        }
        kconf
    }
}

impl<'de> Deserialize<'de> for Kconfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Snapshot::deserialize(deserializer).map(Kconfig::from)
    }
}

impl Kconfig {
    /// Create an empty model around a top-level menu node.
    pub fn new(top_node: MenuNode) -> Self {
        Self {
            top_node,
            srctree: None,
            modules: default_modules(),
            symbols: Vec::new(),
            index: HashMap::new(),
            choices: Vec::new(),
        }
    }

    /// Load a model snapshot, choosing the decoder by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let kconf = match ext {
            "json" => Self::from_json_str(&content)?,
            "toml" => Self::from_toml_str(&content)?,
            _ => return Err(ModelError::UnsupportedFormat(ext.to_string())),
        };
        debug!(
            "loaded model {}: {} symbols, {} choices",
            path.display(),
            kconf.symbols.len(),
            kconf.choices.len()
        );
        Ok(kconf)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Add or replace a symbol.
    pub fn add_symbol(&mut self, sym: Symbol) {
        match self.index.get(&sym.name) {
            Some(&i) => self.symbols[i] = sym,
            None => {
                self.index.insert(sym.name.clone(), self.symbols.len());
                self.symbols.push(sym);
            }
        }
    }

    pub fn add_choice(&mut self, choice: Choice) -> ChoiceId {
        self.choices.push(choice);
        ChoiceId(self.choices.len() - 1)
    }

    pub fn with_symbol(mut self, sym: Symbol) -> Self {
        self.add_symbol(sym);
        self
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    pub fn symbol_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.index.get(name).map(|&i| &mut self.symbols[i])
    }


    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.get(id.0)
    }


    fn choice_by_name(&self, name: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.name.as_deref() == Some(name))
    }

    /// The designated modules symbol, if it exists in the model.
    pub fn modules_symbol(&self) -> Option<&Symbol> {
        self.modules.as_deref().and_then(|name| self.symbol(name))
    }

    pub fn is_modules_symbol(&self, name: &str) -> bool {
        self.modules.as_deref() == Some(name)
    }

    /// Simulate a user assignment to `name`.
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        self.symbol_mut(name)
            .ok_or_else(|| ModelError::UnknownSymbol(name.to_string()))?
            .set_value(value)
    }

    /// String value of a leaf. Undefined symbols evaluate to their own name.
    pub fn str_value(&self, expr: &Expr) -> String {
        match expr {
            Expr::Symbol(name) => match self.symbol(name) {
                Some(sym) => sym.str_value().to_string(),
                None => name.clone(),
            },
            Expr::Const(value) => value.clone(),
            _ => self.eval(expr).as_str().to_string(),
        }
    }

    /// Tri-state value of a leaf; same as [`Kconfig::eval`] for compound
    /// expressions.
    pub fn tri_value(&self, expr: &Expr) -> Tristate {
        self.eval(expr)
    }

    /// Evaluate an expression against the current symbol values.
    pub fn eval(&self, expr: &Expr) -> Tristate {
        self.eval_in(expr, None)
    }

    /// Evaluate with `scope` standing in for anonymous choice references.
    ///
    /// A choice reference that resolves to nothing counts as `y`.
    pub fn eval_in(&self, expr: &Expr, scope: Option<&Choice>) -> Tristate {
        match expr {
            Expr::Symbol(name) => self.symbol(name).map(Symbol::tri_value).unwrap_or_default(),
            Expr::Const(value) => Tristate::from_str_opt(value).unwrap_or_default(),
            Expr::CurrentChoice => scope.map(|c| c.mode).unwrap_or(Tristate::Yes),
            Expr::Choice(name) => self
                .choice_by_name(name)
                .map(|c| c.mode)
                .unwrap_or(Tristate::Yes),
            Expr::Not(inner) => !self.eval_in(inner, scope),
            Expr::And(lhs, rhs) => {
                let v = self.eval_in(lhs, scope);
                if v == Tristate::No {
                    v
                } else {
                    v.and(self.eval_in(rhs, scope))
                }
            }
            Expr::Or(lhs, rhs) => {
                let v = self.eval_in(lhs, scope);
                if v == Tristate::Yes {
                    v
                } else {
                    v.or(self.eval_in(rhs, scope))
                }
            }
            Expr::Rel(op, lhs, rhs) => {
                if op.holds(self.compare(lhs, rhs)) {
                    Tristate::Yes
                } else {
                    Tristate::No
                }
            }
        }
    }

    fn leaf_type(&self, expr: &Expr) -> SymbolType {
        match expr {
            Expr::Symbol(name) => self.symbol(name).map(|s| s.kind).unwrap_or_default(),
            Expr::Const(value) if Tristate::from_str_opt(value).is_some() => SymbolType::Tristate,
            _ => SymbolType::Unknown,
        }
    }

    fn to_num(&self, expr: &Expr) -> Option<i64> {
        match self.leaf_type(expr) {
            SymbolType::Bool | SymbolType::Tristate => Some(self.eval(expr).as_num()),
            SymbolType::Int => self.str_value(expr).parse().ok(),
            SymbolType::Hex => parse_radix(&self.str_value(expr), 16),
            SymbolType::String | SymbolType::Unknown => parse_auto(&self.str_value(expr)),
        }
    }

    /// Two string-typed operands compare as text; anything else compares
    /// numerically when both sides parse, falling back to text.
    fn compare(&self, lhs: &Expr, rhs: &Expr) -> Ordering {
        let both_strings = self.leaf_type(lhs) == SymbolType::String
            && self.leaf_type(rhs) == SymbolType::String;
        if !both_strings && let (Some(a), Some(b)) = (self.to_num(lhs), self.to_num(rhs)) {
            return a.cmp(&b);
        }
        self.str_value(lhs).cmp(&self.str_value(rhs))
    }
}

fn parse_radix(s: &str, radix: u32) -> Option<i64> {
    let (neg, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let s = if radix == 16 {
        s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
    } else {
        s
    };
    let v = i64::from_str_radix(s, radix).ok()?;
    Some(if neg { -v } else { v })
}

/// Parse an integer literal with an optional `0x`/`0o`/`0b` base prefix.
fn parse_auto(s: &str) -> Option<i64> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let lower = body.to_ascii_lowercase();
    let v = if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()?
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2).ok()?
    } else {
        if body.len() > 1 && body.starts_with('0') {
            return None;
        }
        body.parse::<i64>().ok()?
    };
    Some(if neg { -v } else { v })
}
