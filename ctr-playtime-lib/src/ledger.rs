//! Persisted per-title playtime ledger.
//!
//! The store is a JSON object keyed by program ID:
//!
//! ```json
//! {
//!     "CTR-P-ABCE": {
//!         "name": "Some Game",
//!         "time_played": 42,
//!         "last_time_played": 1700000000
//!     }
//! }
//! ```
//!
//! Every mutation re-reads the whole file, updates one entry, and writes the
//! whole file back through a temp file + rename. Callers sharing a ledger
//! across threads go through [`SharedLedger`] so updates are serialized.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use ctr_playtime_core::GameRecord;

use crate::error::LedgerError;

/// File name of the ledger in its default location.
pub const LEDGER_FILE_NAME: &str = "3ds_game_times.json";

/// A ledger behind the single lock all mutations go through.
pub type SharedLedger = Arc<Mutex<PlaytimeLedger>>;

/// Cumulative playtime for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytimeEntry {
    pub game_id: String,
    pub name: String,
    /// Total minutes played. Never decreases.
    pub time_played: u64,
    /// Unix timestamp (seconds) of the last finished session.
    pub last_time_played: Option<i64>,
}

/// On-disk value; the game ID is the object key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    name: String,
    time_played: u64,
    last_time_played: Option<i64>,
}

type Store = BTreeMap<String, StoredEntry>;

impl PlaytimeEntry {
    fn from_stored(game_id: &str, stored: &StoredEntry) -> Self {
        Self {
            game_id: game_id.to_string(),
            name: stored.name.clone(),
            time_played: stored.time_played,
            last_time_played: stored.last_time_played,
        }
    }
}

/// In-memory view of the ledger file at `path`.
#[derive(Debug)]
pub struct PlaytimeLedger {
    path: PathBuf,
    store: Store,
}

impl PlaytimeLedger {
    /// Load the ledger, creating it from `catalog` if the file does not exist.
    ///
    /// A fresh ledger has one zeroed entry per record. An existing ledger is
    /// loaded as-is: games added to the library since are not picked up, and
    /// games no longer present are kept.
    pub fn load_or_initialize(
        path: impl Into<PathBuf>,
        catalog: &[GameRecord],
    ) -> Result<Self, LedgerError> {
        let path = path.into();
        match read_store(&path) {
            Ok(store) => Ok(Self { path, store }),
            Err(LedgerError::NotFound(_)) => {
                log::debug!("No ledger at {}, creating one", path.display());
                let mut store = Store::new();
                for record in catalog {
                    store.insert(
                        record.program_id.clone(),
                        StoredEntry {
                            name: record.title.clone(),
                            time_played: 0,
                            last_time_played: None,
                        },
                    );
                }
                write_store(&path, &store)?;
                Ok(Self { path, store })
            }
            Err(e) => Err(e),
        }
    }

    /// Load an existing ledger. A missing file is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let store = read_store(&path)?;
        Ok(Self { path, store })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full current state, keyed by game ID.
    pub fn snapshot(&self) -> BTreeMap<String, PlaytimeEntry> {
        self.store
            .iter()
            .map(|(id, stored)| (id.clone(), PlaytimeEntry::from_stored(id, stored)))
            .collect()
    }

    pub fn entry(&self, game_id: &str) -> Option<PlaytimeEntry> {
        self.store
            .get(game_id)
            .map(|stored| PlaytimeEntry::from_stored(game_id, stored))
    }

    /// Like [`entry`](Self::entry), but a missing game is
    /// [`LedgerError::UnknownGameId`]. Check this before starting a session:
    /// an existing ledger never picks up games added to the library later.
    pub fn require_entry(&self, game_id: &str) -> Result<PlaytimeEntry, LedgerError> {
        self.entry(game_id)
            .ok_or_else(|| LedgerError::UnknownGameId(game_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Add a finished session to `game_id`'s total.
    ///
    /// Re-reads the file so changes made since loading are kept, then writes
    /// the whole store back. The game must already have an entry.
    pub fn accumulate(
        &mut self,
        game_id: &str,
        duration_minutes: u64,
        timestamp: i64,
    ) -> Result<PlaytimeEntry, LedgerError> {
        let mut store = read_store(&self.path)?;
        let stored = store
            .get_mut(game_id)
            .ok_or_else(|| LedgerError::UnknownGameId(game_id.to_string()))?;

        stored.time_played = stored.time_played.saturating_add(duration_minutes);
        stored.last_time_played = Some(timestamp);
        let updated = PlaytimeEntry::from_stored(game_id, stored);

        write_store(&self.path, &store)?;
        self.store = store;

        log::debug!(
            "{}: +{} min, {} min total",
            game_id,
            duration_minutes,
            updated.time_played
        );
        Ok(updated)
    }

    pub fn into_shared(self) -> SharedLedger {
        Arc::new(Mutex::new(self))
    }
}

fn read_store(path: &Path) -> Result<Store, LedgerError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LedgerError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(LedgerError::io(path, e)),
    };
    serde_json::from_str(&contents).map_err(|e| LedgerError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write the store atomically, four-space indented.
fn write_store(path: &Path, store: &Store) -> Result<(), LedgerError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store
        .serialize(&mut serializer)
        .map_err(LedgerError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &buf).map_err(|e| LedgerError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| LedgerError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/ledger_tests.rs"]
mod tests;
