//! Depth-first conversion of the menu tree into records.

use kconfig_model::{Choice, Item, Kconfig, MenuNode};

use crate::{
    error::{ConvertError, Result},
    filter::TargetFilter,
    relations,
    stringify::{expr_str, is_trivial_false, is_trivial_true},
    tree::{Record, RecordType},
};

/// Settings threaded through a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Platform scoping applied to every node.
    pub target: TargetFilter,
    /// Log each filtered node at `info` level.
    pub report_skipped: bool,
}

/// Walks sibling lists of a model, producing one record per retained node.
pub struct Walker<'a> {
    kconf: &'a Kconfig,
    options: &'a ConvertOptions,
}

impl<'a> Walker<'a> {
    pub fn new(kconf: &'a Kconfig, options: &'a ConvertOptions) -> Self {
        Self { kconf, options }
    }

    /// Convert `nodes` in order. `scope` is the choice enclosing them, used to
    /// evaluate anonymous choice references.
    pub fn walk(&self, nodes: &[MenuNode], scope: Option<&Choice>) -> Result<Vec<Record>> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(reason) = self.options.target.skip_reason(node, self.kconf) {
                if self.options.report_skipped {
                    info!("skip {} at {}: {reason}", node.item, node.location());
                }
                continue;
            }
            if let Some(record) = self.record(node, scope)? {
                out.push(record);
            }
        }
        Ok(out)
    }

    /// Build the record for one node and its subtree.
    ///
    /// Returns `None` for a choice whose options were all filtered out.
    fn record(&self, node: &MenuNode, scope: Option<&Choice>) -> Result<Option<Record>> {
        let visible = self.kconf.eval_in(&node.dep, scope);

        let (mut record, child_scope) = match &node.item {
            Item::Menu => (Record::new(RecordType::Menu, visible), scope),
            Item::Comment => (Record::new(RecordType::Comment, visible), scope),
            Item::Symbol(name) => {
                let sym = self
                    .kconf
                    .symbol(name)
                    .ok_or_else(|| ConvertError::UndefinedSymbol {
                        name: name.clone(),
                        location: node.location(),
                    })?;

                let mut r = Record::new(RecordType::Symbol(sym.kind), visible);
                r.name = Some(sym.name.clone());
                r.value = Some(sym.str_value().to_string());
                r.user_value = Some(sym.user_value.clone());
                r.menuconfig = node.is_menuconfig;
                r.modules = self.kconf.is_modules_symbol(name);

                let rev_dep = expr_str(&sym.rev_dep);
                if !is_trivial_false(&rev_dep) {
                    r.rev_dep = Some(rev_dep);
                }
                let weak_rev_dep = expr_str(&sym.weak_rev_dep);
                if !is_trivial_false(&weak_rev_dep) {
                    r.weak_rev_dep = Some(weak_rev_dep);
                }
                (r, scope)
            }
            Item::Choice(id) => {
                let choice =
                    self.kconf
                        .choice(*id)
                        .ok_or_else(|| ConvertError::UndefinedChoice {
                            index: id.0,
                            location: node.location(),
                        })?;

                let mut r = Record::new(RecordType::Choice, visible);
                r.user_value = Some(choice.user_value.map(|t| t.as_str().to_string()));
                (r, Some(choice))
            }
        };

        let dep = expr_str(&node.dep);
        if !is_trivial_true(&dep) {
            record.dep = Some(dep);
        }

        if let Some(prompt) = &node.prompt {
            record.prompt = Some(prompt.text.clone());
        }

        record.defaults = relations::defaults(self.kconf, &node.defaults);
        record.selects = relations::selects(&node.selects);
        record.implies = relations::selects(&node.implies);
        record.ranges = relations::ranges(self.kconf, &node.ranges);

        if let Some(help) = &node.help {
            record.help = Some(help.to_text().into_owned());
        }

        if !node.list.is_empty() {
            let children = self.walk(&node.list, child_scope)?;
            if !children.is_empty() {
                record.children = Some(children);
            }
        }

        if record.kind == RecordType::Choice && record.children.is_none() {
            debug!("drop empty choice at {}", node.location());
            return Ok(None);
        }

        Ok(Some(record))
    }
}
