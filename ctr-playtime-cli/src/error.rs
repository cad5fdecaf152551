use thiserror::Error;

use ctr_playtime_lib::{LedgerError, SessionError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    Session(#[from] SessionError),

    /// Program ID not present in the scanned library
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Game is in the library but not in an existing ledger
    #[error(
        "{program_id} is not in the playtime ledger {ledger}. Delete the ledger and run `times` to re-create it"
    )]
    UntrackedGame { program_id: String, ledger: String },

    /// Missing or unusable configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn unknown_game(msg: impl Into<String>) -> Self {
        Self::UnknownGame(msg.into())
    }

    pub(crate) fn untracked_game(program_id: impl Into<String>, ledger: impl Into<String>) -> Self {
        Self::UntrackedGame {
            program_id: program_id.into(),
            ledger: ledger.into(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
