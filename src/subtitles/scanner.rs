//! Box scanner for cue data inside a sample.
//!
//! A scan continues only while *more* than a header's worth of bytes is
//! left, so a header-only box at the very end of a buffer is not reported.
//! Container-level parsing in [`crate::mp4`] uses the ordinary bound.

use crate::bits::reader::SliceReader;
use std::iter::FusedIterator;

pub const BOX_HEADER_SIZE: usize = 8;

/// A box found by [`BoxScanner`]. The payload borrows from the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedBox<'a> {
    pub fourcc: [u8; 4],
    /// Size including the 8-byte header
    pub total_size: u32,
    pub payload: &'a [u8],
}

impl ScannedBox<'_> {
    pub fn is(&self, fourcc: &[u8; 4]) -> bool {
        &self.fourcc == fourcc
    }
}

/// Lazy walk over the length-prefixed boxes of a byte buffer.
///
/// Ends on the first zero fourcc or zero size, on a size below the header
/// size, on a box running past the buffer, or when no more than 8 bytes
/// remain. Trailing bytes are dropped silently.
#[derive(Debug, Clone)]
pub struct BoxScanner<'a> {
    reader: SliceReader<'a>,
    done: bool,
}

impl<'a> BoxScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: SliceReader::new(data),
            done: false,
        }
    }

    fn read_next(&mut self) -> Option<ScannedBox<'a>> {
        let remaining = self.reader.remaining();
        if remaining <= BOX_HEADER_SIZE {
            return None;
        }
        let total_size = self.reader.read_u32()?;
        let fourcc = self.reader.read_fourcc()?;
        if total_size == 0 || fourcc == [0; 4] {
            return None;
        }
        let size = total_size as usize;
        if size < BOX_HEADER_SIZE || size > remaining {
            return None;
        }
        let payload = self.reader.take(size - BOX_HEADER_SIZE)?;
        Some(ScannedBox {
            fourcc,
            total_size,
            payload,
        })
    }
}

impl<'a> Iterator for BoxScanner<'a> {
    type Item = ScannedBox<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.read_next();
        self.done = next.is_none();
        next
    }
}

impl FusedIterator for BoxScanner<'_> {}

/// Scan the boxes of `data`.
pub fn scan_boxes(data: &[u8]) -> BoxScanner<'_> {
    BoxScanner::new(data)
}
