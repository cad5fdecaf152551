//! Byte and string helpers shared by the parser stages.

use crate::error::Rejection;

pub fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

pub fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Decode a byte slice as ASCII, keeping every byte verbatim (NULs included).
///
/// Returns `None` if any byte is outside 0x00..=0x7F.
pub fn decode_ascii(buf: &[u8]) -> Option<String> {
    if !buf.is_ascii() {
        return None;
    }
    Some(buf.iter().map(|&b| b as char).collect())
}

/// Drop trailing NUL characters from a decoded fixed-width field.
pub fn trim_trailing_nuls(s: &str) -> &str {
    s.trim_end_matches('\0')
}

/// Decode UTF-16LE text from a fixed-width field.
///
/// A leading byte-order mark is dropped. Odd byte counts and unpaired
/// surrogates are rejected.
pub fn decode_utf16_le(buf: &[u8]) -> Result<String, Rejection> {
    if !buf.len().is_multiple_of(2) {
        return Err(Rejection::truncated(format!(
            "UTF-16 field has odd length {}",
            buf.len()
        )));
    }

    let units = (0..buf.len()).step_by(2).map(|i| read_u16_le(buf, i));
    let mut text = char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| Rejection::truncated(format!("Invalid UTF-16 text: {e}")))?;

    if text.starts_with('\u{FEFF}') {
        text.remove(0);
    }
    Ok(text)
}

/// Remove every NUL character from decoded text.
pub fn strip_nuls(s: &str) -> String {
    s.replace('\0', "")
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
