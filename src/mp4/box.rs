use crate::bits::reader::{read_fourcc, read_u32_be, read_u64_be, SliceReader};
use crate::errors::{Mp4Error, Mp4Result};
use std::io::Read;

/// Box header information
#[derive(Debug, Clone, PartialEq)]
pub struct BoxHeader {
    pub name: String,
    pub name_bytes: [u8; 4],
    /// Total size including the header. 0 means "extends to end of file".
    pub size: u64,
    pub header_size: u64,
}

impl BoxHeader {
    pub fn payload_size(&self) -> u64 {
        self.size.saturating_sub(self.header_size)
    }
}

/// Read a box header from an io source
pub fn read_box_header<R: Read>(r: &mut R) -> Mp4Result<BoxHeader> {
    let size32 = read_u32_be(r)
        .map_err(|e| Mp4Error::new(format!("Failed to read box size: {}", e)))?;
    let name_bytes =
        read_fourcc(r).map_err(|e| Mp4Error::new(format!("Failed to read box name: {}", e)))?;
    let mut size = size32 as u64;
    let mut header_size = 8u64;
    if size32 == 1 {
        size = read_u64_be(r)
            .map_err(|e| Mp4Error::new(format!("Failed to read extended box size: {}", e)))?;
        header_size = 16;
    }
    Ok(BoxHeader {
        name: fourcc_to_string(&name_bytes),
        name_bytes,
        size,
        header_size,
    })
}

/// Parse a box header from a slice cursor.
/// Returns `(name, total size, header size)`.
pub fn parse_box_header(r: &mut SliceReader<'_>) -> Option<([u8; 4], u64, usize)> {
    let size = r.read_u32()? as u64;
    let name = r.read_fourcc()?;
    if size == 1 {
        let large = r.read_u64()?;
        return Some((name, large, 16));
    }
    Some((name, size, 8))
}

/// Write a box header to a vector
pub fn write_box_header(output: &mut Vec<u8>, name: &str, size: u32) {
    output.extend_from_slice(&size.to_be_bytes());
    output.extend_from_slice(name.as_bytes());
}

/// Lossy rendering of a fourcc. Bytes outside ASCII are kept as Latin-1.
pub fn fourcc_to_string(fourcc: &[u8; 4]) -> String {
    fourcc.iter().map(|b| *b as char).collect()
}

/// Iterator over the child boxes of a container payload.
///
/// Yields `(name, payload)` pairs and stops at the first box whose declared
/// size is invalid or runs past the end of the data.
pub struct ChildBoxes<'a> {
    reader: SliceReader<'a>,
}

impl<'a> Iterator for ChildBoxes<'a> {
    type Item = ([u8; 4], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.remaining() < 8 {
            return None;
        }
        let start_remaining = self.reader.remaining();
        let Some((name, size, header_size)) = parse_box_header(&mut self.reader) else {
            self.exhaust();
            return None;
        };
        // size 0 runs to the end of the enclosing data
        let size = if size == 0 {
            start_remaining as u64
        } else {
            size
        };
        if size < header_size as u64 || size > start_remaining as u64 {
            self.exhaust();
            return None;
        }
        let payload = self.reader.take(size as usize - header_size)?;
        Some((name, payload))
    }
}

impl ChildBoxes<'_> {
    fn exhaust(&mut self) {
        self.reader = SliceReader::at(&[], 0);
    }
}

/// Walk the child boxes of `data`.
pub fn child_boxes(data: &[u8]) -> ChildBoxes<'_> {
    ChildBoxes {
        reader: SliceReader::new(data),
    }
}

/// Find a box and return the contained slice
pub fn find_box<'a>(data: &'a [u8], name: &str) -> Option<&'a [u8]> {
    child_boxes(data)
        .find(|(n, _)| n.as_slice() == name.as_bytes())
        .map(|(_, payload)| payload)
}

/// Follow a dotted path of nested boxes, e.g. `"mdia.minf.stbl"`.
pub fn find_box_path<'a>(data: &'a [u8], path: &str) -> Option<&'a [u8]> {
    path.split('.')
        .try_fold(data, |current, name| find_box(current, name))
}
