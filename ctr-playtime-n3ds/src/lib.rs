//! Nintendo 3DS cartridge image metadata extraction.
//!
//! Walks a CCI (NCSD) image far enough to recover a [`GameRecord`]:
//!
//! 1. NCSD magic and the primary partition entry
//! 2. NCCH product code (the program ID) and ExeFS location
//! 3. ExeFS directory, looking for the `icon` resource
//! 4. SMDH magic and the per-locale title table
//!
//! Each stage returns a typed [`Rejection`] on failure and the pipeline
//! stops there. Nothing is decrypted or verified; encrypted images whose
//! ExeFS is unreadable simply fail at stage 3 or 4.

mod exefs;
mod ncch;
mod ncsd;
mod smdh;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ctr_playtime_core::{ByteReader, GameRecord, ReadSeek, Rejection};

pub use exefs::{EXEFS_SLOT_COUNT, ResourceEntry, read_exefs_directory};
pub use ncsd::PartitionEntry;
pub use smdh::{
    LOCALE_COUNT, LOCALE_ENGLISH, LOCALE_JAPANESE, LocaleTitle, normalize_long_desc,
    read_locale_titles, select_title,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// NCSD magic at offset 0x100: "NCSD".
const NCSD_MAGIC: [u8; 4] = [0x4E, 0x43, 0x53, 0x44];

/// SMDH magic at the start of the icon resource: "SMDH".
const SMDH_MAGIC: [u8; 4] = [0x53, 0x4D, 0x44, 0x48];

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Extracts game records from 3DS cartridge images.
#[derive(Debug, Default, Clone, Copy)]
pub struct N3dsParser;

impl N3dsParser {
    pub fn new() -> Self {
        Self
    }

    /// Open `path` and parse it.
    pub fn parse_file(&self, path: &Path) -> Result<GameRecord, Rejection> {
        let mut file = BufReader::new(File::open(path)?);
        self.parse(&mut file, path)
    }

    /// Parse an image from `reader`, attributing the record to `path`.
    pub fn parse(&self, reader: &mut dyn ReadSeek, path: &Path) -> Result<GameRecord, Rejection> {
        let mut reader = ByteReader::new(reader)?;

        ncsd::check_ncsd_magic(&mut reader)?;
        let partition = ncsd::read_primary_partition(&mut reader)?;
        let ncch_offset = partition.offset();
        log::trace!(
            "{}: game partition at 0x{:X} ({} bytes)",
            path.display(),
            ncch_offset,
            partition.size()
        );

        let ncch = ncch::parse_ncch_header(&mut reader, ncch_offset)?;
        let exefs_abs_offset = ncch.exefs_abs_offset(ncch_offset);
        log::trace!(
            "{}: program ID {:?}, ExeFS at 0x{:X}",
            path.display(),
            ncch.program_id,
            exefs_abs_offset
        );

        let entries = read_exefs_directory(&mut reader, exefs_abs_offset)?;
        let icon_offset = exefs::find_icon(&entries)
            .map(|icon| icon.offset)
            .ok_or(Rejection::MissingIconResource)?;

        smdh::check_smdh_magic(&mut reader, icon_offset)?;
        let titles = read_locale_titles(&mut reader, icon_offset)?;
        let title = select_title(&titles);

        log::debug!("{} = {} ({})", path.display(), title, ncch.program_id);
        Ok(GameRecord::new(ncch.program_id, title, path))
    }

    /// Quick check for the NCSD magic without running the full pipeline.
    pub fn can_handle(&self, reader: &mut dyn ReadSeek) -> bool {
        ByteReader::new(reader)
            .and_then(|mut r| ncsd::check_ncsd_magic(&mut r))
            .is_ok()
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
