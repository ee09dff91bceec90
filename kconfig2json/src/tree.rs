//! Emitted menu tree.
//!
//! These types define the JSON document consumed by the configuration
//! front-end. Field order is the key order of the output, and optional keys
//! are left out rather than written as empty values.

use kconfig_model::{Kconfig, SymbolType, Tristate};
use schemars::JsonSchema;
use serde::{Serialize, Serializer};

use crate::{
    error::Result,
    stringify::expr_str,
    walker::{ConvertOptions, Walker},
};

/// Type code of a menu entry.
pub const MENU: u8 = 31;
/// Type code of a comment entry.
pub const COMMENT: u8 = 6;
/// Type code of a choice group.
pub const CHOICE: u8 = 4;

const DEFAULT_TOP_PROMPT: &str = "Main menu";

/// Discriminant written as the numeric `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Menu,
    Comment,
    Choice,
    Symbol(SymbolType),
}

impl RecordType {
    pub fn code(self) -> u8 {
        match self {
            RecordType::Menu => MENU,
            RecordType::Comment => COMMENT,
            RecordType::Choice => CHOICE,
            RecordType::Symbol(kind) => kind.code(),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One `default` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DefaultEntry {
    /// Symbol or constant name; `null` when the default is a compound expression.
    pub name: Option<String>,
    pub default: String,
    pub cond: String,
}

/// One `select` or `imply` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SelectEntry {
    pub symbol: String,
    pub cond: String,
}

/// One `range` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RangeEntry {
    pub min: String,
    pub max: String,
    pub cond: String,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Record emitted for one retained menu node.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Record {
    #[serde(rename = "type")]
    #[schemars(with = "u8")]
    pub kind: RecordType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Present (possibly `null`) on symbols and choices only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_value: Option<Option<String>>,
    #[serde(skip_serializing_if = "is_false")]
    pub menuconfig: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub modules: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev_dep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weak_rev_dep: Option<String>,
    /// Dependency text, omitted when it is just `y`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep: Option<String>,
    /// Dependency evaluated against the current values.
    pub visible: Tristate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<DefaultEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selects: Vec<SelectEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implies: Vec<SelectEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<RangeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Never empty when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Record>>,
}

impl Record {
    pub fn new(kind: RecordType, visible: Tristate) -> Self {
        Self {
            kind,
            name: None,
            value: None,
            user_value: None,
            menuconfig: false,
            modules: false,
            rev_dep: None,
            weak_rev_dep: None,
            dep: None,
            visible,
            prompt: None,
            defaults: Vec::new(),
            selects: Vec::new(),
            implies: Vec::new(),
            ranges: Vec::new(),
            help: None,
            children: None,
        }
    }

    pub fn children(&self) -> &[Record] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Depth-first search for the record of a named symbol.
    pub fn find(&self, name: &str) -> Option<&Record> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|r| r.find(name))
    }
}

/// The document root: top-level prompt, its condition and the walked forest.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MenuTree {
    pub prompt: String,
    pub cond: String,
    pub children: Vec<Record>,
}

impl MenuTree {
    /// Depth-first search for the record of a named symbol.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.children.iter().find_map(|r| r.find(name))
    }
}

/// Build the document root for `kconf`.
///
/// The root itself is never filtered and always carries `children`.
pub fn assemble(kconf: &Kconfig, options: &ConvertOptions) -> Result<MenuTree> {
    let top = &kconf.top_node;
    let (prompt, cond) = match &top.prompt {
        Some(p) => (p.text.clone(), expr_str(&p.cond)),
        None => (DEFAULT_TOP_PROMPT.to_string(), "y".to_string()),
    };

    let children = Walker::new(kconf, options).walk(&top.list, None)?;
    debug!("assembled {} top-level records", children.len());

    Ok(MenuTree {
        prompt,
        cond,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kconfig_model::{Expr, MenuNode};

    #[test]
    fn test_type_codes() {
        assert_eq!(RecordType::Menu.code(), 31);
        assert_eq!(RecordType::Comment.code(), 6);
        assert_eq!(RecordType::Choice.code(), 4);
        assert_eq!(RecordType::Symbol(SymbolType::Bool).code(), 3);
        assert_eq!(RecordType::Symbol(SymbolType::Hex).code(), 24);
        assert_eq!(RecordType::Symbol(SymbolType::Int).code(), 27);
        assert_eq!(RecordType::Symbol(SymbolType::String).code(), 47);
        assert_eq!(RecordType::Symbol(SymbolType::Tristate).code(), 48);
    }

    #[test]
    fn test_record_key_layout() {
        let mut r = Record::new(RecordType::Symbol(SymbolType::Bool), Tristate::Yes);
        r.name = Some("FOO".into());
        r.value = Some("y".into());
        r.user_value = Some(None);
        r.prompt = Some("Foo".into());

        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"type":3,"name":"FOO","value":"y","user_value":null,"visible":"y","prompt":"Foo"}"#
        );
    }

    #[test]
    fn test_root_always_has_children() {
        let kconf = Kconfig::new(MenuNode::menu("NuttX/arm Configuration"));
        let tree = assemble(&kconf, &ConvertOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"prompt":"NuttX/arm Configuration","cond":"y","children":[]}"#
        );
    }

    #[test]
    fn test_root_condition_is_always_stringified() {
        let kconf = Kconfig::new(
            MenuNode::new(kconfig_model::Item::Menu)
                .with_prompt_cond("Top", Expr::choice_ref(None).and(Expr::sym("A"))),
        );
        let tree = assemble(&kconf, &ConvertOptions::default()).unwrap();
        assert_eq!(tree.cond, "y && A");

        let kconf = Kconfig::new(MenuNode::new(kconfig_model::Item::Menu));
        let tree = assemble(&kconf, &ConvertOptions::default()).unwrap();
        assert_eq!(tree.prompt, "Main menu");
        assert_eq!(tree.cond, "y");
    }
}
