//! NCSD (CCI) outer header: magic check and the primary partition entry.

use ctr_playtime_core::util::read_u32_le;
use ctr_playtime_core::{ByteReader, MEDIA_UNIT, Rejection};

use super::NCSD_MAGIC;

/// Offset of the "NCSD" magic.
const NCSD_MAGIC_OFFSET: u64 = 0x100;

/// Offset of partition 0 in the partition table (u32 offset, u32 size).
const PARTITION_TABLE_OFFSET: u64 = 0x120;

/// One partition table entry, in media units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionEntry {
    pub offset_mu: u32,
    pub size_mu: u32,
}

impl PartitionEntry {
    /// Absolute byte offset of the partition.
    pub fn offset(&self) -> u64 {
        self.offset_mu as u64 * MEDIA_UNIT
    }

    /// Partition size in bytes.
    pub fn size(&self) -> u64 {
        self.size_mu as u64 * MEDIA_UNIT
    }
}

/// Check the NCSD magic at 0x100.
pub(crate) fn check_ncsd_magic(reader: &mut ByteReader<'_>) -> Result<(), Rejection> {
    let magic: [u8; 4] = reader.read_array_at(NCSD_MAGIC_OFFSET)?;
    if magic != NCSD_MAGIC {
        return Err(Rejection::not_a_container(format!(
            "Missing NCSD magic at 0x{:X}",
            NCSD_MAGIC_OFFSET
        )));
    }
    Ok(())
}

/// Read the game-data partition entry (partition 0).
pub(crate) fn read_primary_partition(
    reader: &mut ByteReader<'_>,
) -> Result<PartitionEntry, Rejection> {
    let buf: [u8; 8] = reader.read_array_at(PARTITION_TABLE_OFFSET)?;
    Ok(PartitionEntry {
        offset_mu: read_u32_le(&buf, 0),
        size_mu: read_u32_le(&buf, 4),
    })
}
