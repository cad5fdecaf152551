//! Positioned, length-bounded reads over a cartridge image.

use std::io::{ErrorKind, SeekFrom};

use crate::ReadSeek;
use crate::error::Rejection;
use crate::util::read_u32_le;

/// Reads fixed-size fields at absolute offsets.
///
/// Every read is checked against the stream length first, so a bad offset
/// in a header becomes [`Rejection::TruncatedOrCorrupt`] instead of a short
/// read or a huge allocation.
pub struct ByteReader<'a> {
    inner: &'a mut dyn ReadSeek,
    len: u64,
}

impl<'a> ByteReader<'a> {
    pub fn new(inner: &'a mut dyn ReadSeek) -> Result<Self, Rejection> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len })
    }

    /// Total length of the underlying stream in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read `buf.len()` bytes starting at `offset`.
    pub fn read_into(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), Rejection> {
        let end = offset
            .checked_add(buf.len() as u64)
            .ok_or_else(|| Rejection::truncated(format!("Offset 0x{:X} overflows", offset)))?;
        if end > self.len {
            return Err(Rejection::truncated(format!(
                "Read of {} bytes at 0x{:X} runs past end of file (0x{:X})",
                buf.len(),
                offset,
                self.len
            )));
        }

        self.inner.seek(SeekFrom::Start(offset))?;
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                Rejection::truncated(format!("Unexpected end of file at 0x{:X}", offset))
            } else {
                Rejection::Io(e)
            }
        })
    }

    /// Read `len` bytes starting at `offset` into a new buffer.
    pub fn read_bytes_at(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, Rejection> {
        let mut buf = vec![0u8; len];
        self.read_into(offset, &mut buf)?;
        Ok(buf)
    }

    /// Read a fixed-size array starting at `offset`.
    pub fn read_array_at<const N: usize>(&mut self, offset: u64) -> Result<[u8; N], Rejection> {
        let mut buf = [0u8; N];
        self.read_into(offset, &mut buf)?;
        Ok(buf)
    }

    pub fn read_u32_le_at(&mut self, offset: u64) -> Result<u32, Rejection> {
        let buf: [u8; 4] = self.read_array_at(offset)?;
        Ok(read_u32_le(&buf, 0))
    }
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
