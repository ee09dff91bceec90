//! Dependency, condition and default expressions.
//!
//! Expressions are kept in the shape the evaluator produces them: leaves are
//! symbol references, constants or a reference to the enclosing choice, and
//! interior nodes are `!`, `&&`, `||` and the six relations. The
//! [`Display`](std::fmt::Display) impl renders the canonical text form used
//! throughout Kconfig tooling, so `A && (B || C)` round-trips through the
//! same parenthesization as the C tools.

use std::{fmt, ops::Not};

use serde::{Deserialize, Serialize};

/// Relational operator between two leaf operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelOp {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    Unequal,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEqual,
}

impl RelOp {
    pub fn as_str(self) -> &'static str {
        match self {
            RelOp::Equal => "=",
            RelOp::Unequal => "!=",
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
        }
    }

    /// Apply the operator to a three-way comparison result.
    pub fn holds(self, ord: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            RelOp::Equal => ord == Equal,
            RelOp::Unequal => ord != Equal,
            RelOp::Less => ord == Less,
            RelOp::LessEqual => ord != Greater,
            RelOp::Greater => ord == Greater,
            RelOp::GreaterEqual => ord != Less,
        }
    }
}

/// A parsed Kconfig expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Reference to a named symbol.
    Symbol(String),
    /// Constant symbol: `n`, `m`, `y` or a literal such as `"foo"` or `0x10`.
    Const(String),
    /// Reference to the choice enclosing the node. Choice members depend on
    /// it. Written `"current_choice"` in snapshots.
    CurrentChoice,
    /// Reference to a named choice.
    Choice(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Rel(RelOp, Box<Expr>, Box<Expr>),
}

impl Default for Expr {
    fn default() -> Self {
        Expr::y()
    }
}

impl Expr {
    pub fn y() -> Self {
        Expr::Const("y".into())
    }

    pub fn n() -> Self {
        Expr::Const("n".into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn constant(value: impl Into<String>) -> Self {
        Expr::Const(value.into())
    }

    /// Reference to the named choice, or to the enclosing one for `None`.
    pub fn choice_ref(name: Option<&str>) -> Self {
        match name {
            Some(name) => Expr::Choice(name.to_string()),
            None => Expr::CurrentChoice,
        }
    }

    pub fn and(self, other: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(other))
    }

    pub fn rel(op: RelOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Rel(op, Box::new(lhs), Box::new(rhs))
    }

    /// True for `!`, `&&`, `||` and relations; false for leaves.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Expr::Not(_) | Expr::And(..) | Expr::Or(..) | Expr::Rel(..)
        )
    }

    /// Write an operand of `&&`/`||`, parenthesized when it is itself an
    /// `||` (inside `&&`) or an `&&` (inside `||`).
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parenthesize_and: bool) -> fmt::Result {
        let wrap = match self {
            Expr::Or(..) => !parenthesize_and,
            Expr::And(..) => parenthesize_and,
            _ => false,
        };
        if wrap {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

/// Escape `\` and `"` for a double-quoted Kconfig string.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(name) => f.write_str(name),
            Expr::Const(value) => match value.as_str() {
                "n" | "m" | "y" => f.write_str(value),
                _ => write!(f, "\"{}\"", escape(value)),
            },
            Expr::CurrentChoice => f.write_str("<choice>"),
            Expr::Choice(name) => write!(f, "<choice {name}>"),
            Expr::Not(inner) => {
                if inner.is_compound() {
                    write!(f, "!({inner})")
                } else {
                    write!(f, "!{inner}")
                }
            }
            Expr::And(lhs, rhs) => {
                lhs.fmt_operand(f, false)?;
                f.write_str(" && ")?;
                rhs.fmt_operand(f, false)
            }
            Expr::Or(lhs, rhs) => {
                lhs.fmt_operand(f, true)?;
                f.write_str(" || ")?;
                rhs.fmt_operand(f, true)
            }
            Expr::Rel(op, lhs, rhs) => write!(f, "{lhs} {} {rhs}", op.as_str()),
        }
    }
}
