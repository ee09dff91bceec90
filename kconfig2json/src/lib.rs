//! Convert an evaluated Kconfig model into a JSON menu tree.
//!
//! The output mirrors the menu hierarchy with every expression rendered as
//! text, so a web front-end can show prompts, help and dependencies without
//! a Kconfig evaluator of its own.
//!
//! ```
//! use kconfig2json::{ConvertOptions, convert, output};
//! use kconfig_model::{Expr, Kconfig, MenuNode, Symbol, SymbolType};
//!
//! let kconf = Kconfig::new(
//!     MenuNode::menu("Main menu").child(
//!         MenuNode::symbol("DEBUG")
//!             .with_prompt("Enable debugging")
//!             .with_dep(Expr::sym("EXPERT")),
//!     ),
//! )
//! .with_symbol(Symbol::new("EXPERT", SymbolType::Bool))
//! .with_symbol(Symbol::new("DEBUG", SymbolType::Bool));
//!
//! let tree = convert(&kconf, &ConvertOptions::default()).unwrap();
//! assert_eq!(tree.children[0].dep.as_deref(), Some("EXPERT"));
//! let json = output::to_string(&tree, output::OutputStyle::Compact).unwrap();
//! assert!(json.starts_with(r#"{"prompt":"Main menu","cond":"y","children":[{"type":3"#));
//! ```

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod relations;
pub mod stringify;
pub mod tree;
pub mod walker;

#[cfg(test)]
mod testing;

use kconfig_model::Kconfig;

pub use config::ToolConfig;
pub use error::{ConvertError, Result};
pub use filter::{SkipReason, TargetFilter};
pub use output::OutputStyle;
pub use tree::{MenuTree, Record, RecordType};
pub use walker::ConvertOptions;

/// Convert `kconf` into its menu tree.
pub fn convert(kconf: &Kconfig, options: &ConvertOptions) -> Result<MenuTree> {
    tree::assemble(kconf, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_model;
    use kconfig_model::Tristate;

    fn cxd56_options() -> ConvertOptions {
        ConvertOptions {
            target: TargetFilter::new(Some("arm"), Some("arm/cxd56xx")),
            ..Default::default()
        }
    }

    #[test]
    fn test_visibility_follows_configuration() {
        let mut kconf = sample_model();
        let tree = convert(&kconf, &ConvertOptions::default()).unwrap();
        let err = tree.find("DEBUG_ERROR").unwrap();
        assert_eq!(err.visible, Tristate::No);
        assert_eq!(err.dep.as_deref(), Some("DEBUG_FEATURES"));

        kconf.set_value("DEBUG_FEATURES", "y").unwrap();
        let tree = convert(&kconf, &ConvertOptions::default()).unwrap();
        let err = tree.find("DEBUG_ERROR").unwrap();
        assert_eq!(err.visible, Tristate::Yes);
        assert_eq!(err.dep.as_deref(), Some("DEBUG_FEATURES"));
        assert_eq!(
            tree.find("DEBUG_FEATURES").unwrap().user_value,
            Some(Some("y".to_string()))
        );
    }

    #[test]
    fn test_target_scoping() {
        let kconf = sample_model();
        let tree = convert(&kconf, &cxd56_options()).unwrap();

        let prompts: Vec<_> = tree
            .children
            .iter()
            .filter_map(|r| r.prompt.as_deref())
            .collect();
        assert_eq!(
            prompts,
            [
                "Build Setup",
                "CPU Architecture",
                "Chip Selection",
                "Select target board",
                "Memory Configuration",
                "Debug Options",
            ]
        );

        let boards = &tree.children[3];
        assert_eq!(boards.kind, RecordType::Choice);
        let names: Vec<_> = boards
            .children()
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect();
        assert_eq!(names, ["ARCH_BOARD_SPRESENSE"]);

        assert!(tree.find("ARCH_BOARD_NUCLEO_F401RE").is_none());
        assert!(tree.find("ARCH_CHIP_ESP32C3").is_none());
        // Common files of arch/ stay.
        assert!(tree.find("ARCH_RISCV").is_some());
    }

    #[test]
    fn test_env_symbols_never_appear() {
        let kconf = sample_model();
        let tree = convert(&kconf, &cxd56_options()).unwrap();
        assert!(tree.find("HOST_ENV").is_none());
        let json = output::to_string(&tree, OutputStyle::Compact).unwrap();
        assert!(!json.contains("HOST_ENV"));
    }

    #[test]
    fn test_trivial_conditions_are_elided() {
        let kconf = sample_model();
        let tree = convert(&kconf, &ConvertOptions::default()).unwrap();

        // Only choice-membership in the dependency, which renders as `y`.
        let arm = tree.find("ARCH_ARM").unwrap();
        assert_eq!(arm.dep, None);
        let cxd = tree.find("ARCH_CHIP_CXD56XX").unwrap();
        assert_eq!(cxd.dep.as_deref(), Some("y && ARCH_ARM"));

        let modules = tree.find("MODULES").unwrap();
        assert!(modules.modules);
        assert_eq!(modules.rev_dep, None);
        assert_eq!(modules.weak_rev_dep, None);
    }

    #[test]
    fn test_default_order_is_kept() {
        let kconf = sample_model();
        let tree = convert(&kconf, &ConvertOptions::default()).unwrap();
        let ram = tree.find("RAM_SIZE").unwrap();
        let conds: Vec<_> = ram.defaults.iter().map(|d| d.cond.as_str()).collect();
        assert_eq!(
            conds,
            [
                "ARCH_CHIP_CXD56XX",
                "ARCH_CHIP_STM32",
                "ARCH_CHIP_ESP32C3 || ARCH_RISCV"
            ]
        );
        assert_eq!(ram.defaults[0].default, "1572864");
        assert_eq!(ram.ranges[0].cond, "ARCH_ARM = y");
    }

    #[test]
    fn test_output_is_deterministic() {
        let kconf = sample_model();
        let first = convert(&kconf, &cxd56_options()).unwrap();
        let second = convert(&kconf, &cxd56_options()).unwrap();
        assert_eq!(
            output::to_string(&first, OutputStyle::Pretty).unwrap(),
            output::to_string(&second, OutputStyle::Pretty).unwrap()
        );
    }

    #[test]
    fn test_toml_snapshot_choice_visibility() {
        let kconf = Kconfig::from_toml_str(
            r#"
[top_node]
item = "menu"
prompt = { text = "Main menu" }

[[top_node.children]]
item = { choice = 0 }
prompt = { text = "Sensor driver" }
filename = "drivers/sensors/Kconfig"
linenr = 4

[[top_node.children.children]]
item = { symbol = "SENSOR_BMI160" }
prompt = { text = "Bosch BMI160" }
dep = "current_choice"

[[choices]]
mode = "m"
user_value = "m"

[[symbols]]
name = "SENSOR_BMI160"
type = "tristate"
value = "m"
"#,
        )
        .unwrap();

        let tree = convert(&kconf, &ConvertOptions::default()).unwrap();
        let choice = &tree.children[0];
        assert_eq!(choice.visible, Tristate::Yes);
        assert_eq!(choice.user_value, Some(Some("m".to_string())));

        let member = tree.find("SENSOR_BMI160").unwrap();
        assert_eq!(member.visible, Tristate::Module);
        assert_eq!(member.dep, None);
    }

    #[test]
    fn test_no_choice_placeholders_in_output() {
        let kconf = sample_model();
        let tree = convert(&kconf, &ConvertOptions::default()).unwrap();
        let json = output::to_string(&tree, OutputStyle::Compact).unwrap();
        assert!(!json.contains("<choice"));
    }
}
