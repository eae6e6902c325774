use super::r#box::read_box_header;
use crate::errors::{Mp4Error, Mp4Result};
use crate::streams::seekable_stream::SeekableStream;
use std::io::{Read, Seek, SeekFrom};

/// Upper bound on the moov payload we are willing to buffer (256MB)
const MAX_MOOV_SIZE: u64 = 256 * 1024 * 1024;

/// Result of finding a moov box
#[derive(Debug, Clone, PartialEq)]
pub struct MoovBoxInfo {
    pub position: u64,
    pub size: u64,
    pub header_size: u64,
}

/// Walk the top-level boxes of the stream until the moov box is found.
/// Returns position and size of the moov box.
pub fn find_moov_box<S: SeekableStream>(stream: &mut S) -> Mp4Result<MoovBoxInfo> {
    let file_size = stream.stream_len()?;
    let mut pos = 0u64;

    while pos + 8 <= file_size {
        stream.seek(SeekFrom::Start(pos))?;
        let header = read_box_header(stream)?;
        let size = match header.size {
            0 => file_size - pos,
            n => n,
        };
        // the loop guard keeps file_size - pos from underflowing
        if size < header.header_size || size > file_size - pos {
            return Err(Mp4Error::new(format!(
                "invalid size {} for top-level box '{}' at offset {}",
                size, header.name, pos
            )));
        }
        if &header.name_bytes == b"moov" {
            return Ok(MoovBoxInfo {
                position: pos,
                size,
                header_size: header.header_size,
            });
        }
        pos += size;
    }

    Err(Mp4Error::new("moov box not found"))
}

/// Find moov box and read its payload data
/// Returns the moov box payload (without the box header)
pub fn find_and_read_moov_box<S: SeekableStream>(stream: &mut S) -> Mp4Result<Vec<u8>> {
    let moov_info = find_moov_box(stream)?;
    let payload_size = moov_info.size - moov_info.header_size;
    if payload_size > MAX_MOOV_SIZE {
        return Err(Mp4Error::new(format!(
            "moov box too large: {} bytes",
            payload_size
        )));
    }

    stream.seek(SeekFrom::Start(moov_info.position + moov_info.header_size))?;
    let mut moov_data = vec![0u8; payload_size as usize];
    stream.read_exact(&mut moov_data)?;
    Ok(moov_data)
}
