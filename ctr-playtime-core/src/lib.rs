//! Shared types for reading 3DS cartridge images.
//!
//! Holds the positioned [`ByteReader`], the [`Rejection`] taxonomy that every
//! parser stage reports through, and the [`GameRecord`] a successful parse
//! produces.

use std::io::{Read, Seek};
use std::path::PathBuf;

pub mod error;
pub mod reader;
pub mod util;

pub use error::Rejection;
pub use reader::ByteReader;

/// Size of one media unit. Every offset/size field in the NCSD partition
/// table and the NCCH header counts in these.
pub const MEDIA_UNIT: u64 = 0x200;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// One playable title recovered from a cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Product code from the NCCH header (e.g. "CTR-P-ABCE"), used as the
    /// catalog and ledger key.
    pub program_id: String,

    /// Display title picked by the locale fallback policy. May be empty.
    pub title: String,

    /// File the record was parsed from.
    pub path: PathBuf,
}

impl GameRecord {
    pub fn new(
        program_id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program_id: program_id.into(),
            title: title.into(),
            path: path.into(),
        }
    }
}
