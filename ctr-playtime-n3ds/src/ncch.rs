//! NCCH partition header fields needed to reach the ExeFS.

use ctr_playtime_core::util::decode_ascii;
use ctr_playtime_core::{ByteReader, MEDIA_UNIT, Rejection};

/// Product code offset within the NCCH header.
const PRODUCT_CODE_OFFSET: u64 = 0x150;

/// Length of the product code kept as the program ID.
pub(crate) const PROGRAM_ID_LEN: usize = 10;

/// ExeFS offset field (media units, relative to the NCCH start).
const EXEFS_OFFSET_FIELD: u64 = 0x1A0;

/// Parsed NCCH header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NcchHeader {
    /// Product code, decoded verbatim.
    pub(crate) program_id: String,
    pub(crate) exefs_offset_mu: u32,
}

impl NcchHeader {
    /// Absolute offset of the ExeFS, given the partition's own offset.
    pub(crate) fn exefs_abs_offset(&self, ncch_offset: u64) -> u64 {
        ncch_offset + self.exefs_offset_mu as u64 * MEDIA_UNIT
    }
}

/// Read the program ID and ExeFS location from the NCCH at `ncch_offset`.
pub(crate) fn parse_ncch_header(
    reader: &mut ByteReader<'_>,
    ncch_offset: u64,
) -> Result<NcchHeader, Rejection> {
    let raw: [u8; PROGRAM_ID_LEN] = reader.read_array_at(ncch_offset + PRODUCT_CODE_OFFSET)?;
    let program_id = decode_ascii(&raw).ok_or_else(|| {
        Rejection::malformed_identifier(format!(
            "Non-ASCII product code at 0x{:X}",
            ncch_offset + PRODUCT_CODE_OFFSET
        ))
    })?;

    let exefs_offset_mu = reader.read_u32_le_at(ncch_offset + EXEFS_OFFSET_FIELD)?;

    Ok(NcchHeader {
        program_id,
        exefs_offset_mu,
    })
}
