use std::process::Command;
use std::sync::Mutex;
use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ctr_playtime_lib::{
    GameCatalog, GameStatus, LedgerError, PlaySession, PlaytimeLedger, PollOutcome, Settings,
};

use crate::CliError;
use crate::commands::times::format_minutes;

/// How often the emulator process is checked.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A session for a game the ledger has no entry for could not be recorded,
/// so refuse it before the emulator starts.
fn check_tracked(ledger: &PlaytimeLedger, program_id: &str) -> Result<(), CliError> {
    match ledger.require_entry(program_id) {
        Ok(_) => Ok(()),
        Err(LedgerError::UnknownGameId(_)) => Err(CliError::untracked_game(
            program_id,
            ledger.path().display().to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Run the play command: launch, wait, record.
pub(crate) fn run_play(settings: &Settings, program_id: &str) -> Result<(), CliError> {
    let emulator = settings.emulator_executable().ok_or_else(|| {
        CliError::config("No emulator configured. Use --emulator or `config set --emulator`")
    })?;

    let catalog = GameCatalog::build(&settings.roms_root());
    let record = catalog
        .get(program_id)
        .ok_or_else(|| CliError::unknown_game(program_id))?;

    let ledger = PlaytimeLedger::load_or_initialize(settings.ledger_file(), catalog.records())?;
    check_tracked(&ledger, program_id)?;
    let ledger = Mutex::new(ledger);

    log::debug!("Launching {} {}", emulator.display(), record.path.display());
    let child = Command::new(&emulator).arg(&record.path).spawn()?;
    let mut session = PlaySession::start(program_id, child);

    log::info!(
        "{} {}",
        record.title.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", GameStatus::Running).if_supports_color(Stdout, |t| t.green()),
    );

    let summary = loop {
        match session.poll(&ledger)? {
            PollOutcome::Running(s) => {
                session = s;
                std::thread::sleep(POLL_INTERVAL);
            }
            PollOutcome::Finished(summary) => break summary,
        }
    };

    log::info!(
        "{} {}",
        record.title.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", GameStatus::Installed).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "Session: {}, total: {}",
        format_minutes(summary.minutes),
        format_minutes(summary.entry.time_played),
    );
    Ok(())
}
