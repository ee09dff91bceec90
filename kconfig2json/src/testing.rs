//! Shared model fixture for unit tests: a trimmed-down multi-platform
//! source tree with an ARM/CXD56xx target and foreign RISC-V/STM32 entries.

use kconfig_model::{Choice, Expr, Kconfig, MenuNode, RelOp, Symbol, SymbolType, Tristate};

fn bool_sym(name: &str, value: &str) -> Symbol {
    Symbol::new(name, SymbolType::Bool).with_value(value)
}

pub fn sample_model() -> Kconfig {
    let mut kconf = Kconfig::new(MenuNode::menu("Main menu"));

    let mut arch_choice = Choice::new(None, Tristate::Yes);
    arch_choice.user_value = Some(Tristate::Yes);
    let arch_choice = kconf.add_choice(arch_choice);
    let chip_choice = kconf.add_choice(Choice::new(None, Tristate::Yes));
    let board_choice = kconf.add_choice(Choice::new(None, Tristate::Yes));
    let stm32_choice = kconf.add_choice(Choice::new(Some("STM32_BOARD"), Tristate::Yes));

    for sym in [
        bool_sym("EXPERIMENTAL", "n"),
        bool_sym("MODULES", "n"),
        Symbol::new("HOST_ENV", SymbolType::String)
            .with_value("Linux")
            .with_env_var("HOST"),
        bool_sym("ARCH_ARM", "y"),
        bool_sym("ARCH_RISCV", "n"),
        bool_sym("ARCH_CHIP_CXD56XX", "y"),
        bool_sym("ARCH_CHIP_STM32", "n"),
        bool_sym("ARCH_CHIP_ESP32C3", "n"),
        bool_sym("CXD56_SPI", "y"),
        bool_sym("CXD56_DMAC", "y"),
        bool_sym("SPI", "y")
            .with_rev_dep(Expr::sym("CXD56_SPI"))
            .with_weak_rev_dep(Expr::sym("CXD56_DMAC").and(Expr::choice_ref(None))),
        bool_sym("ARCH_BOARD_SPRESENSE", "y"),
        bool_sym("ARCH_BOARD_ESP32C3_DEVKIT", "n"),
        bool_sym("ARCH_BOARD_NUCLEO_F401RE", "n"),
        Symbol::new("RAM_SIZE", SymbolType::Int).with_value("1572864"),
        Symbol::new("RAM_START", SymbolType::Hex).with_value("0x0d000000"),
        bool_sym("DEBUG_FEATURES", "n"),
        bool_sym("DEBUG_ERROR", "n"),
    ] {
        kconf.add_symbol(sym);
    }

    let in_choice = Expr::choice_ref(None);

    kconf.top_node = MenuNode::menu("Main menu")
        .child(
            MenuNode::menu("Build Setup")
                .at("Kconfig", 5)
                .child(
                    MenuNode::symbol("EXPERIMENTAL")
                        .with_prompt("Prompt for development and/or incomplete code/drivers")
                        .at("Kconfig", 8),
                )
                .child(
                    MenuNode::symbol("MODULES")
                        .with_prompt("Enable loadable module support")
                        .with_default(Expr::n(), Expr::y())
                        .at("Kconfig", 20),
                )
                .child(
                    MenuNode::menu("Host environment")
                        .at("Kconfig", 30)
                        .child(MenuNode::symbol("HOST_ENV").at("Kconfig", 31)),
                ),
        )
        .child(
            MenuNode::choice(arch_choice)
                .with_prompt("CPU Architecture")
                .with_default(Expr::sym("ARCH_ARM"), Expr::y())
                .at("arch/Kconfig", 7)
                .child(
                    MenuNode::symbol("ARCH_ARM")
                        .with_prompt("ARM")
                        .with_dep(in_choice.clone())
                        .at("arch/Kconfig", 11),
                )
                .child(
                    MenuNode::symbol("ARCH_RISCV")
                        .with_prompt("RISC-V")
                        .with_dep(in_choice.clone())
                        .at("arch/Kconfig", 17),
                ),
        )
        .child(
            MenuNode::menu("Chip Selection")
                .with_dep(Expr::sym("ARCH_ARM"))
                .at("arch/arm/Kconfig", 1)
                .child(
                    MenuNode::choice(chip_choice)
                        .with_prompt("ARM chip selection")
                        .with_dep(Expr::sym("ARCH_ARM"))
                        .at("arch/arm/Kconfig", 10)
                        .child(
                            MenuNode::symbol("ARCH_CHIP_CXD56XX")
                                .with_prompt("Sony CXD56xx")
                                .with_dep(in_choice.clone().and(Expr::sym("ARCH_ARM")))
                                .with_select("ARCH_HAVE_MULTICPU", Expr::y())
                                .at("arch/arm/Kconfig", 20),
                        )
                        .child(
                            MenuNode::symbol("ARCH_CHIP_STM32")
                                .with_prompt("STMicro STM32 F1/F2/F3/F4/G4/L1")
                                .with_dep(in_choice.clone().and(Expr::sym("ARCH_ARM")))
                                .at("arch/arm/Kconfig", 40),
                        ),
                )
                .child(
                    MenuNode::symbol("CXD56_SPI")
                        .with_prompt("SPI")
                        .with_dep(Expr::sym("ARCH_CHIP_CXD56XX"))
                        .with_select("SPI", Expr::y())
                        .with_imply("CXD56_DMAC", Expr::sym("EXPERIMENTAL"))
                        .at("arch/arm/src/cxd56xx/Kconfig", 50),
                )
                .child(MenuNode::symbol("SPI").at("drivers/spi/Kconfig", 6)),
        )
        .child(
            MenuNode::menu("RISC-V Chip Selection")
                .with_dep(Expr::sym("ARCH_RISCV"))
                .at("arch/risc-v/Kconfig", 1)
                .child(
                    MenuNode::symbol("ARCH_CHIP_ESP32C3")
                        .with_prompt("Espressif ESP32-C3")
                        .at("arch/risc-v/Kconfig", 12),
                ),
        )
        .child(
            MenuNode::choice(board_choice)
                .with_prompt("Select target board")
                .at("boards/Kconfig", 5)
                .child(
                    MenuNode::symbol("ARCH_BOARD_SPRESENSE")
                        .with_prompt("Sony Spresense board")
                        .with_dep(in_choice.clone().and(Expr::sym("ARCH_CHIP_CXD56XX")))
                        .at("boards/arm/cxd56xx/spresense/Kconfig", 3),
                )
                .child(
                    MenuNode::symbol("ARCH_BOARD_ESP32C3_DEVKIT")
                        .with_prompt("Espressif ESP32-C3 DevKit")
                        .with_dep(in_choice.clone().and(Expr::sym("ARCH_CHIP_ESP32C3")))
                        .at("boards/risc-v/esp32c3/esp32c3-devkit/Kconfig", 3),
                ),
        )
        .child(
            MenuNode::choice(stm32_choice)
                .with_prompt("STM32 board variant")
                .at("boards/Kconfig", 40)
                .child(
                    MenuNode::symbol("ARCH_BOARD_NUCLEO_F401RE")
                        .with_prompt("STMicro Nucleo F401RE")
                        .with_dep(Expr::choice_ref(Some("STM32_BOARD")))
                        .at("boards/arm/stm32/nucleo-f4x1re/Kconfig", 2),
                ),
        )
        .child(
            MenuNode::menu("Memory Configuration")
                .at("Kconfig", 60)
                .child(
                    MenuNode::symbol("RAM_SIZE")
                        .with_prompt("Primary RAM size")
                        .with_default(Expr::constant("1572864"), Expr::sym("ARCH_CHIP_CXD56XX"))
                        .with_default(Expr::constant("196608"), Expr::sym("ARCH_CHIP_STM32"))
                        .with_default(
                            Expr::constant("400000"),
                            Expr::sym("ARCH_CHIP_ESP32C3").or(Expr::sym("ARCH_RISCV")),
                        )
                        .with_range(
                            Expr::constant("0"),
                            Expr::constant("2097152"),
                            Expr::rel(RelOp::Equal, Expr::sym("ARCH_ARM"), Expr::y()),
                        )
                        .at("Kconfig", 62),
                )
                .child(
                    MenuNode::comment("STM32 SRAM is split into two banks")
                        .with_dep(Expr::sym("ARCH_CHIP_STM32"))
                        .at("Kconfig", 68),
                )
                .child(
                    MenuNode::symbol("RAM_START")
                        .with_prompt("Primary RAM start address")
                        .at("Kconfig", 70),
                ),
        )
        .child(
            MenuNode::menu("Debug Options")
                .at("Kconfig", 100)
                .child(
                    MenuNode::symbol("DEBUG_FEATURES")
                        .with_prompt("Enable Debug Features")
                        .with_help("Enables debug features.")
                        .menuconfig()
                        .at("Kconfig", 102),
                )
                .child(
                    MenuNode::symbol("DEBUG_ERROR")
                        .with_prompt("Enable Error Output")
                        .with_dep(Expr::sym("DEBUG_FEATURES"))
                        .at("Kconfig", 110),
                ),
        );

    kconf
}
