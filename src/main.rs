//! `config` binary: parses global options, then hands the rest of the
//! command line to the command tree.

use std::{error::Error, io, path::PathBuf, process};

use clap::Parser;
use config_cli::{
    cli::{CliService, CommandContext, formatting::format_error},
    config::{ConfigPaths, ConfigStore, LogLevel},
    tracing_config,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "config", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path of the CLI configuration file.
    #[arg(long, env = "ONOS_CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Subcommand path and its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format_error(&e.to_string()));
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config_path = match cli.config_file {
        Some(path) => path,
        None => ConfigPaths::main_config()?,
    };

    let loaded = ConfigStore::load(&config_path);
    let level = cli
        .log_level
        .or_else(|| loaded.as_ref().ok().map(|store| store.config().log_level))
        .unwrap_or_default();
    tracing_config::init(level)?;

    if let Err(e) = &loaded {
        warn!("Ignoring unreadable configuration: {e}");
    }
    debug!(config = %config_path.display(), args = ?cli.command, "Dispatching");

    let service = CliService::new(CommandContext::new(config_path));
    let mut stdout = io::stdout().lock();

    service.execute(&cli.command, &mut stdout)?;

    Ok(())
}
