//! Game catalog: every cartridge image under a root that parses cleanly.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ctr_playtime_core::GameRecord;
use ctr_playtime_n3ds::N3dsParser;

use crate::scanner;

/// Ordered collection of parsed games, in scan order.
///
/// Records are rebuilt on every scan. Duplicate program IDs are kept (and
/// warned about); [`GameCatalog::get`] returns the first one.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    records: Vec<GameRecord>,
    rejected: usize,
}

impl GameCatalog {
    /// Scan `root` recursively and parse every file found.
    pub fn build(root: &Path) -> Self {
        log::debug!("Building catalog from {}", root.display());
        Self::from_candidates(scanner::scan(root))
    }

    /// Parse each candidate path in order, keeping the successes.
    pub fn from_candidates(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let parser = N3dsParser::new();
        let mut catalog = Self::default();
        let mut seen = HashSet::new();

        for path in paths {
            match parser.parse_file(&path) {
                Ok(record) => {
                    if !seen.insert(record.program_id.clone()) {
                        log::warn!(
                            "Duplicate program ID {} at {}",
                            record.program_id,
                            path.display()
                        );
                    }
                    catalog.records.push(record);
                }
                Err(rejection) => {
                    log::debug!(
                        "Skipping {} [{}]: {}",
                        path.display(),
                        rejection.kind(),
                        rejection
                    );
                    catalog.rejected += 1;
                }
            }
        }

        log::debug!(
            "Catalog: {} games, {} files skipped",
            catalog.records.len(),
            catalog.rejected
        );
        catalog
    }

    pub fn from_records(records: Vec<GameRecord>) -> Self {
        Self {
            records,
            rejected: 0,
        }
    }

    /// First record with the given program ID.
    pub fn get(&self, program_id: &str) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.program_id == program_id)
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of candidate files that were rejected during the scan.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl<'a> IntoIterator for &'a GameCatalog {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
