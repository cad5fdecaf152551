use thiserror::Error;

/// Errors from reading or writing the playtime ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed ledger {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to serialize ledger: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Store missing during a read that must not initialize it
    #[error("Ledger not found: {0}")]
    NotFound(String),

    /// The game was never seeded into the ledger
    #[error("Unknown game ID: {0}")]
    UnknownGameId(String),

    /// Another holder of the shared ledger panicked mid-update
    #[error("Ledger lock poisoned")]
    Poisoned,
}

impl LedgerError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Errors from timing and finalizing a play session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `duration_minutes` or `stop` called before `start`
    #[error("Session timer was never started")]
    NotStarted,

    /// `duration_minutes` called before `stop`
    #[error("Session timer was never stopped")]
    NotStopped,

    /// Liveness check on the emulator process failed
    #[error("Process error: {0}")]
    Process(#[source] std::io::Error),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors from loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
