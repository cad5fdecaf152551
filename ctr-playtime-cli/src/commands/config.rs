use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ctr_playtime_lib::Settings;
use ctr_playtime_lib::settings::settings_path;

use crate::CliError;

fn show_path(label: &str, value: Option<&Path>) {
    match value {
        Some(p) => log::info!(
            "  {:<10} {}",
            label,
            p.display().if_supports_color(Stdout, |t| t.cyan())
        ),
        None => log::info!(
            "  {:<10} {}",
            label,
            "not set".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
}

/// Show the settings file and what each location resolves to, global
/// overrides included.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "ctr-playtime Configuration".if_supports_color(Stdout, |t| t.bold())
    );
    crate::log_blank();
    log::info!(
        "  Config file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        if path.exists() {
            "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        },
    );
    crate::log_blank();

    show_path("roms", Some(settings.roms_root().as_path()));
    show_path("emulator", settings.emulator_executable().as_deref());
    show_path("ledger", Some(settings.ledger_file().as_path()));
    Ok(())
}

/// Update the stored settings; unspecified fields keep their value.
pub(crate) fn run_config_set(
    roms: Option<PathBuf>,
    emulator: Option<PathBuf>,
    ledger: Option<PathBuf>,
) -> Result<(), CliError> {
    if roms.is_none() && emulator.is_none() && ledger.is_none() {
        return Err(CliError::config(
            "Nothing to set. Pass --roms, --emulator, or --ledger",
        ));
    }

    let settings = Settings::load()?.with_overrides(roms, emulator, ledger);
    settings.save()?;
    log::info!("Saved {}", settings_path().display());
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
