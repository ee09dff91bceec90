//! Menu tree nodes.
//!
//! A [`MenuNode`] mirrors one entry of the menu hierarchy. Siblings are kept
//! in source order in the parent's `list`, so walking `list` front to back
//! visits them exactly as the evaluator's sibling chain would.

use std::{borrow::Cow, fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{expr::Expr, symbol::ChoiceId};

/// What a menu node stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Menu,
    Comment,
    /// A symbol definition, by name.
    Symbol(String),
    /// A choice group, by index into the model's choice table.
    Choice(ChoiceId),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Menu => f.write_str("menu"),
            Item::Comment => f.write_str("comment"),
            Item::Symbol(name) => write!(f, "symbol {name}"),
            Item::Choice(id) => write!(f, "choice #{}", id.0),
        }
    }
}

/// Prompt text and the condition under which it is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub text: String,
    #[serde(default)]
    pub cond: Expr,
}

/// `default <value> [if <cond>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultRel {
    pub value: Expr,
    #[serde(default)]
    pub cond: Expr,
}

/// `select`/`imply <symbol> [if <cond>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectRel {
    pub symbol: String,
    #[serde(default)]
    pub cond: Expr,
}

/// `range <low> <high> [if <cond>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRel {
    pub low: Expr,
    pub high: Expr,
    #[serde(default)]
    pub cond: Expr,
}

/// Help text as found in the source, possibly not valid UTF-8.
///
/// Snapshots may carry it either as a string or as a raw byte array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawHelp")]
pub struct HelpText(Vec<u8>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHelp {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<RawHelp> for HelpText {
    fn from(raw: RawHelp) -> Self {
        match raw {
            RawHelp::Text(s) => HelpText(s.into_bytes()),
            RawHelp::Bytes(b) => HelpText(b),
        }
    }
}

impl HelpText {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        HelpText(bytes.into())
    }

    /// Decode as UTF-8, replacing invalid sequences with U+FFFD.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for HelpText {
    fn from(s: &str) -> Self {
        HelpText(s.as_bytes().to_vec())
    }
}

impl Serialize for HelpText {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

/// One entry of the menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub item: Item,
    #[serde(default)]
    pub prompt: Option<Prompt>,
    /// Direct dependencies, including those inherited from `if`/`menu`.
    #[serde(default)]
    pub dep: Expr,
    #[serde(default)]
    pub defaults: Vec<DefaultRel>,
    #[serde(default)]
    pub selects: Vec<SelectRel>,
    #[serde(default)]
    pub implies: Vec<SelectRel>,
    #[serde(default)]
    pub ranges: Vec<RangeRel>,
    #[serde(default)]
    pub help: Option<HelpText>,
    /// Kconfig file the node was defined in.
    #[serde(default)]
    pub filename: PathBuf,
    #[serde(default)]
    pub linenr: usize,
    #[serde(default)]
    pub is_menuconfig: bool,
    /// Child nodes in source order.
    #[serde(default, rename = "children")]
    pub list: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            prompt: None,
            dep: Expr::y(),
            defaults: Vec::new(),
            selects: Vec::new(),
            implies: Vec::new(),
            ranges: Vec::new(),
            help: None,
            filename: PathBuf::new(),
            linenr: 0,
            is_menuconfig: false,
            list: Vec::new(),
        }
    }

    pub fn menu(title: &str) -> Self {
        Self::new(Item::Menu).with_prompt(title)
    }

    pub fn comment(text: &str) -> Self {
        Self::new(Item::Comment).with_prompt(text)
    }

    pub fn symbol(name: &str) -> Self {
        Self::new(Item::Symbol(name.to_string()))
    }

    pub fn choice(id: ChoiceId) -> Self {
        Self::new(Item::Choice(id))
    }

    pub fn with_prompt(self, text: &str) -> Self {
        self.with_prompt_cond(text, Expr::y())
    }

    pub fn with_prompt_cond(mut self, text: &str, cond: Expr) -> Self {
        self.prompt = Some(Prompt {
            text: text.to_string(),
            cond,
        });
        self
    }

    pub fn with_dep(mut self, dep: Expr) -> Self {
        self.dep = dep;
        self
    }

    pub fn with_default(mut self, value: Expr, cond: Expr) -> Self {
        self.defaults.push(DefaultRel { value, cond });
        self
    }

    pub fn with_select(mut self, symbol: &str, cond: Expr) -> Self {
        self.selects.push(SelectRel {
            symbol: symbol.to_string(),
            cond,
        });
        self
    }

    pub fn with_imply(mut self, symbol: &str, cond: Expr) -> Self {
        self.implies.push(SelectRel {
            symbol: symbol.to_string(),
            cond,
        });
        self
    }

    pub fn with_range(mut self, low: Expr, high: Expr, cond: Expr) -> Self {
        self.ranges.push(RangeRel { low, high, cond });
        self
    }

    pub fn with_help(mut self, help: impl Into<HelpText>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn menuconfig(mut self) -> Self {
        self.is_menuconfig = true;
        self
    }

    /// Set the defining file and line.
    pub fn at(mut self, filename: impl Into<PathBuf>, linenr: usize) -> Self {
        self.filename = filename.into();
        self.linenr = linenr;
        self
    }

    pub fn child(mut self, node: MenuNode) -> Self {
        self.list.push(node);
        self
    }

    /// `file:line` of the definition, for diagnostics.
    pub fn location(&self) -> String {
        format!("{}:{}", self.filename.display(), self.linenr)
    }
}
