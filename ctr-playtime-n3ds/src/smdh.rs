//! SMDH metadata block: per-locale titles and the display-title policy.

use ctr_playtime_core::util::{decode_utf16_le, strip_nuls};
use ctr_playtime_core::{ByteReader, Rejection};

use super::SMDH_MAGIC;

/// Number of application title structures read from the SMDH.
pub const LOCALE_COUNT: usize = 12;

/// Locale slot of the Japanese title.
pub const LOCALE_JAPANESE: usize = 0;

/// Locale slot of the English title.
pub const LOCALE_ENGLISH: usize = 1;

/// Title structures start 8 bytes into the SMDH (after magic, version, reserved).
const TITLES_OFFSET: u64 = 0x8;

const SHORT_DESC_SIZE: usize = 0x80;
const LONG_DESC_SIZE: usize = 0x100;
const PUBLISHER_SIZE: usize = 0x80;
const TITLE_STRUCT_SIZE: usize = SHORT_DESC_SIZE + LONG_DESC_SIZE + PUBLISHER_SIZE;

/// One locale's application title strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTitle {
    pub short_desc: String,
    /// Normalized long description; this is what gets displayed.
    pub long_desc: String,
    pub publisher: String,
}

/// Check for the "SMDH" magic at the icon resource's offset.
pub(crate) fn check_smdh_magic(
    reader: &mut ByteReader<'_>,
    icon_offset: u64,
) -> Result<(), Rejection> {
    let magic: [u8; 4] = reader.read_array_at(icon_offset)?;
    if magic != SMDH_MAGIC {
        return Err(Rejection::invalid_metadata(format!(
            "Missing SMDH magic at 0x{:X}",
            icon_offset
        )));
    }
    Ok(())
}

/// Read the twelve locale title structures of the SMDH at `icon_offset`.
pub fn read_locale_titles(
    reader: &mut ByteReader<'_>,
    icon_offset: u64,
) -> Result<[LocaleTitle; LOCALE_COUNT], Rejection> {
    let table = reader.read_bytes_at(icon_offset + TITLES_OFFSET, LOCALE_COUNT * TITLE_STRUCT_SIZE)?;

    let mut titles: [LocaleTitle; LOCALE_COUNT] = Default::default();
    for (title, raw) in titles.iter_mut().zip(table.chunks_exact(TITLE_STRUCT_SIZE)) {
        let (short_desc, rest) = raw.split_at(SHORT_DESC_SIZE);
        let (long_desc, publisher) = rest.split_at(LONG_DESC_SIZE);

        *title = LocaleTitle {
            short_desc: strip_nuls(&decode_utf16_le(short_desc)?),
            long_desc: normalize_long_desc(&decode_utf16_le(long_desc)?),
            publisher: strip_nuls(&decode_utf16_le(publisher)?),
        };
    }

    Ok(titles)
}

/// Clean up a raw long description for display.
///
/// Drops NULs, turns each newline into a space, then replaces each
/// non-overlapping pair of spaces with one.
pub fn normalize_long_desc(raw: &str) -> String {
    strip_nuls(raw).replace('\n', " ").replace("  ", " ")
}

/// Pick the display title: English when present, otherwise Japanese.
///
/// The Japanese title may itself be empty; an empty title is returned as-is.
pub fn select_title(titles: &[LocaleTitle; LOCALE_COUNT]) -> String {
    let english = &titles[LOCALE_ENGLISH].long_desc;
    if !english.is_empty() {
        return english.clone();
    }
    log::debug!("No English title, falling back to Japanese");
    titles[LOCALE_JAPANESE].long_desc.clone()
}
