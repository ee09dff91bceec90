//! `default`, `select`/`imply` and `range` lists.
//!
//! Each builder keeps the source order and returns an empty list for an empty
//! input; empty lists are dropped from the output by the record serializer.

use kconfig_model::{DefaultRel, Expr, Kconfig, RangeRel, SelectRel};

use crate::{
    stringify::expr_str,
    tree::{DefaultEntry, RangeEntry, SelectEntry},
};

/// `default` entries. Plain symbols and constants carry their name and current
/// value; anything else is written out as expression text with no name.
pub fn defaults(kconf: &Kconfig, list: &[DefaultRel]) -> Vec<DefaultEntry> {
    list.iter()
        .map(|d| {
            let cond = expr_str(&d.cond);
            match &d.value {
                Expr::Symbol(name) | Expr::Const(name) => DefaultEntry {
                    name: Some(name.clone()),
                    default: kconf.str_value(&d.value),
                    cond,
                },
                compound => DefaultEntry {
                    name: None,
                    default: expr_str(compound),
                    cond,
                },
            }
        })
        .collect()
}

/// `select` and `imply` entries.
pub fn selects(list: &[SelectRel]) -> Vec<SelectEntry> {
    list.iter()
        .map(|s| SelectEntry {
            symbol: s.symbol.clone(),
            cond: expr_str(&s.cond),
        })
        .collect()
}

/// `range` entries with both bounds resolved to their current values.
pub fn ranges(kconf: &Kconfig, list: &[RangeRel]) -> Vec<RangeEntry> {
    list.iter()
        .map(|r| RangeEntry {
            min: kconf.str_value(&r.low),
            max: kconf.str_value(&r.high),
            cond: expr_str(&r.cond),
        })
        .collect()
}
