use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ctr_playtime_lib::{GameCatalog, PlaytimeLedger, Settings};

use crate::CliError;

/// Run the times command.
pub(crate) fn run_times(settings: &Settings) -> Result<(), CliError> {
    let catalog = GameCatalog::build(&settings.roms_root());
    let ledger = PlaytimeLedger::load_or_initialize(settings.ledger_file(), catalog.records())?;

    log::info!("Ledger: {}", ledger.path().display());
    crate::log_blank();

    let snapshot = ledger.snapshot();
    if snapshot.is_empty() {
        log::info!(
            "{}",
            "No games recorded".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    for entry in snapshot.values() {
        let last = entry
            .last_time_played
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());
        log::info!(
            "  {}  {:>8}  {:<16}  {}",
            entry.game_id.if_supports_color(Stdout, |t| t.cyan()),
            format_minutes(entry.time_played),
            last,
            entry.name,
        );
    }
    Ok(())
}

/// "1h 05m" style, or just minutes under an hour.
pub(crate) fn format_minutes(minutes: u64) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}
