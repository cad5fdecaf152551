//! Game catalog and playtime tracking for a 3DS cartridge library.
//!
//! - [`scanner`] finds candidate files under a root
//! - [`catalog`] parses them into [`GameRecord`]s
//! - [`ledger`] keeps cumulative playtime on disk
//! - [`session`] times a play session and feeds the ledger
//! - [`settings`] holds the library/emulator/ledger locations

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod scanner;
pub mod session;
pub mod settings;

pub use catalog::GameCatalog;
pub use error::{LedgerError, SessionError, SettingsError};
pub use ledger::{LEDGER_FILE_NAME, PlaytimeEntry, PlaytimeLedger, SharedLedger};
pub use scanner::{CandidatePaths, scan};
pub use session::{
    GameStatus, Liveness, PlaySession, PollOutcome, SessionSummary, SessionTimer,
};
pub use settings::Settings;

// Re-export the parser surface so frontends depend on one crate.
pub use ctr_playtime_core::{GameRecord, Rejection};
pub use ctr_playtime_n3ds::{LocaleTitle, N3dsParser};
