use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use kconfig2json::{
    ConvertOptions, MenuTree, OutputStyle, ToolConfig, config::model_snapshot_path, convert,
    output,
};
use kconfig_model::{Kconfig, dotconfig::DEFAULT_PREFIX};
use log::{LevelFilter, warn};

const DEFAULT_DOTCONFIG: &str = ".config";

/// Convert a Kconfig menu tree into JSON for web configuration front-ends.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Kconfig model exported by the evaluator (`<path>.json` or `<path>.toml`).
    #[arg(default_value = "Kconfig")]
    kconfig: PathBuf,

    /// Output file; standard output when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tool configuration file [default: .kconfig2json.toml if present].
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Configuration values to apply before conversion [default: .config if present].
    #[arg(long, env = "KCONFIG_CONFIG")]
    dotconfig: Option<PathBuf>,

    /// Prefix of symbol names in the configuration file.
    #[arg(long, env = "CONFIG_", default_value = DEFAULT_PREFIX)]
    config_prefix: String,

    /// Source tree root used to relativize node locations.
    #[arg(long, env = "srctree")]
    srctree: Option<PathBuf>,

    /// Keep only this architecture family under `arch/`.
    #[arg(long)]
    arch: Option<String>,

    /// Keep only this board family under `boards/`, e.g. `arm/cxd56xx`.
    #[arg(long)]
    board: Option<String>,

    /// Print the JSON schema of the output and exit.
    #[arg(long)]
    schema: bool,

    /// Report filtered nodes and pretty-print the output.
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(&cli);

    if let Err(e) = run(cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logger(cli: &Cli) {
    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.schema {
        let schema = schemars::schema_for!(MenuTree);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = ToolConfig::load_or_default(cli.config.as_deref())?;

    let snapshot = model_snapshot_path(&cli.kconfig)?;
    let mut kconf = Kconfig::load(&snapshot)
        .with_context(|| format!("failed to load model {}", snapshot.display()))?;
    if let Some(srctree) = cli.srctree {
        kconf.srctree = Some(srctree);
    }

    apply_dotconfig(&mut kconf, cli.dotconfig.as_deref(), &cli.config_prefix)?;

    let mut target = config.target;
    if cli.arch.is_some() {
        target.arch = cli.arch;
    }
    if cli.board.is_some() {
        target.board = cli.board;
    }
    let options = ConvertOptions {
        target,
        report_skipped: cli.verbose || cli.debug,
    };

    let tree = convert(&kconf, &options)?;

    let style = if cli.verbose || cli.debug || config.output.pretty {
        OutputStyle::Pretty
    } else {
        OutputStyle::Compact
    };
    output::write_tree(&tree, cli.output.as_deref(), style)?;
    Ok(())
}

/// Load `path`, or `.config` when present. A missing explicit file is only
/// worth a warning: the model's own values are used instead.
fn apply_dotconfig(kconf: &mut Kconfig, path: Option<&Path>, prefix: &str) -> Result<()> {
    let path = match path {
        Some(p) if !p.exists() => {
            warn!("{} does not exist, using model values", p.display());
            return Ok(());
        }
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_DOTCONFIG);
            if !default.exists() {
                return Ok(());
            }
            default
        }
    };

    kconf
        .load_config(path, prefix)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok(())
}
