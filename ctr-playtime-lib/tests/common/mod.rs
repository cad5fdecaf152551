//! Synthetic 3DS images for integration tests.

use std::fs;
use std::path::Path;

const PARTITION0_OFFSET: usize = 0x4000;
const EXEFS_OFFSET: usize = PARTITION0_OFFSET + 5 * 0x200;
const ICON_OFFSET: usize = EXEFS_OFFSET + 0x200;

fn utf16(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

/// Minimal CCI: NCSD header, NCCH product code, one-entry ExeFS, SMDH with
/// an English title.
pub fn make_cci(program_id: &str, title: &str) -> Vec<u8> {
    assert_eq!(program_id.len(), 10);
    let mut rom = vec![0u8; 0x8000];

    rom[0x100..0x104].copy_from_slice(b"NCSD");
    rom[0x120..0x124].copy_from_slice(&((PARTITION0_OFFSET / 0x200) as u32).to_le_bytes());
    rom[0x124..0x128].copy_from_slice(&0x10u32.to_le_bytes());

    let p0 = PARTITION0_OFFSET;
    rom[p0 + 0x150..p0 + 0x15A].copy_from_slice(program_id.as_bytes());
    rom[p0 + 0x1A0..p0 + 0x1A4].copy_from_slice(&5u32.to_le_bytes());

    rom[EXEFS_OFFSET..EXEFS_OFFSET + 4].copy_from_slice(b"icon");
    rom[EXEFS_OFFSET + 12..EXEFS_OFFSET + 16].copy_from_slice(&0x36C0u32.to_le_bytes());

    rom[ICON_OFFSET..ICON_OFFSET + 4].copy_from_slice(b"SMDH");
    let english_long = ICON_OFFSET + 8 + 0x200 + 0x80;
    let encoded = utf16(title);
    rom[english_long..english_long + encoded.len()].copy_from_slice(&encoded);

    rom
}

pub fn write_cci(path: &Path, program_id: &str, title: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, make_cci(program_id, title)).unwrap();
}
