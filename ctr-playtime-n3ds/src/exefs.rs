//! ExeFS directory: ten fixed 16-byte slots naming the partition's resources.

use ctr_playtime_core::util::{decode_ascii, read_u32_le, trim_trailing_nuls};
use ctr_playtime_core::{ByteReader, MEDIA_UNIT, Rejection};

/// Number of file slots in the ExeFS header.
pub const EXEFS_SLOT_COUNT: usize = 10;

/// Bytes per slot: 8-byte name, u32 offset, u32 size.
const EXEFS_SLOT_SIZE: usize = 16;

/// Name of the resource holding the SMDH block.
pub(crate) const ICON_NAME: &str = "icon";

/// A named resource inside the ExeFS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub name: String,
    /// Absolute file offset of the resource data.
    pub offset: u64,
    pub size: u32,
}

/// Read all named entries from the ExeFS directory at `exefs_abs_offset`.
///
/// All ten slots are read; an empty name skips its slot but does not end
/// the directory. File data starts one media unit after the directory.
pub fn read_exefs_directory(
    reader: &mut ByteReader<'_>,
    exefs_abs_offset: u64,
) -> Result<Vec<ResourceEntry>, Rejection> {
    let table = reader.read_bytes_at(exefs_abs_offset, EXEFS_SLOT_COUNT * EXEFS_SLOT_SIZE)?;
    let data_base = exefs_abs_offset + MEDIA_UNIT;

    let mut entries = Vec::new();
    for (i, slot) in table.chunks_exact(EXEFS_SLOT_SIZE).enumerate() {
        let raw_name = decode_ascii(&slot[0..8]).ok_or_else(|| {
            Rejection::truncated(format!("Non-ASCII ExeFS name in slot {}", i))
        })?;
        let name = trim_trailing_nuls(&raw_name);
        if name.is_empty() {
            continue;
        }

        let relative_offset = read_u32_le(slot, 8);
        let size = read_u32_le(slot, 12);
        let entry = ResourceEntry {
            name: name.to_string(),
            offset: data_base + relative_offset as u64,
            size,
        };
        log::trace!("ExeFS slot {}: {} at 0x{:X}", i, entry.name, entry.offset);
        entries.push(entry);
    }

    Ok(entries)
}

/// Find the icon resource. A later slot with the same name shadows an
/// earlier one.
pub(crate) fn find_icon(entries: &[ResourceEntry]) -> Option<&ResourceEntry> {
    entries.iter().rev().find(|e| e.name == ICON_NAME)
}
