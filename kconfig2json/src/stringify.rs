//! Expression text for the front-end.

use std::sync::LazyLock;

use kconfig_model::Expr;
use regex::Regex;

/// Matches the choice placeholder with or without a name/index suffix:
/// `<choice>`, `<choice 3>`, `<choice BOARD>`.
static CHOICE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<choice[^<>]*>").unwrap());

/// Canonical text of `expr` with every choice reference rewritten to `y`.
///
/// A member of a choice depends on the choice itself; for the front-end that
/// is the same as "the choice is shown", i.e. `y`.
pub fn expr_str(expr: &Expr) -> String {
    CHOICE_REF.replace_all(&expr.to_string(), "y").into_owned()
}

/// True when the text is the constant `y`.
pub fn is_trivial_true(text: &str) -> bool {
    text == "y"
}

/// True when the text is the constant `n`.
pub fn is_trivial_false(text: &str) -> bool {
    text == "n"
}
