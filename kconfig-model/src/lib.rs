//! # kconfig-model
//!
//! A typed, read-only view of a Kconfig configuration model after it has been
//! parsed and evaluated.
//!
//! The model is produced by an external Kconfig evaluator and handed over as a
//! snapshot document (JSON or TOML). This crate gives consumers:
//!
//! - the menu tree ([`MenuNode`], [`Item`]) with prompts, dependencies and
//!   `default`/`select`/`imply`/`range` relations,
//! - symbol and choice tables ([`Symbol`], [`Choice`]),
//! - canonical expression text and tri-state evaluation ([`Expr`],
//!   [`Kconfig::eval`]),
//! - `.config` loading to overlay saved user values.
//!
//! ## Example
//!
//! ```rust
//! use kconfig_model::{Expr, Kconfig, MenuNode, Symbol, SymbolType, Tristate};
//!
//! let mut kconf = Kconfig::new(
//!     MenuNode::menu("Main menu")
//!         .child(MenuNode::symbol("DEBUG").with_prompt("Enable debug")),
//! )
//! .with_symbol(Symbol::new("DEBUG", SymbolType::Bool));
//!
//! assert_eq!(kconf.eval(&Expr::sym("DEBUG")), Tristate::No);
//! kconf.set_value("DEBUG", "y").unwrap();
//! assert_eq!(kconf.eval(&Expr::sym("DEBUG")), Tristate::Yes);
//! ```

#[macro_use]
extern crate log;

/// Saved configuration (`.config`) loading.
pub mod dotconfig;

/// Error types for model loading and updates.
pub mod error;

/// Expressions and their canonical text form.
pub mod expr;

mod model;

/// Menu tree nodes.
pub mod node;

/// Symbols and choices.
pub mod symbol;

mod tristate;

pub use error::{ModelError, Result};
pub use expr::{Expr, RelOp};
pub use model::Kconfig;
pub use node::{DefaultRel, HelpText, Item, MenuNode, Prompt, RangeRel, SelectRel};
pub use symbol::{Choice, ChoiceId, Symbol, SymbolType};
pub use tristate::Tristate;
