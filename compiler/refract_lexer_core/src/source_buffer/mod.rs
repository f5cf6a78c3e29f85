//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content, so
//! the scanner detects EOF without explicit bounds checks. The total size is
//! rounded up to the next 64-byte boundary, which also gives `peek()` safe
//! padding near the end.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// Owned source bytes followed by a zero sentinel and zero padding.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes saturate the length; generated
    /// analyzer sources are nowhere near that.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let padded_len = (bytes.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..bytes.len()].copy_from_slice(bytes);

        SourceBuffer {
            buf,
            source_len: u32::try_from(bytes.len()).unwrap_or(u32::MAX),
        }
    }

    /// Source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
