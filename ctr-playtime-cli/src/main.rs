//! ctr-playtime CLI
//!
//! Lists the 3DS games in a library folder, reports recorded playtime, and
//! launches the emulator while timing the session.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use ctr_playtime_lib::Settings;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        root,
        ledger,
        command,
        ..
    } = cli;
    let resolve = |emulator: Option<PathBuf>| -> Result<Settings, CliError> {
        Ok(Settings::load()?.with_overrides(root.clone(), emulator, ledger.clone()))
    };

    match command {
        Commands::Scan => commands::scan::run_scan(&resolve(None)?),
        Commands::Times => commands::times::run_times(&resolve(None)?),
        Commands::Play {
            program_id,
            emulator,
        } => commands::play::run_play(&resolve(emulator)?, &program_id),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&resolve(None)?),
            ConfigAction::Set {
                roms,
                emulator,
                ledger,
            } => commands::config::run_config_set(roms, emulator, ledger),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

/// Route `log` output to stdout. Plain messages by default; `--verbose`
/// adds timestamps and debug records. `RUST_LOG` still applies on top.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env();
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
