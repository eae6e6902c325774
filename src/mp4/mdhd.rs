use crate::bits::reader::SliceReader;
use crate::errors::{Mp4Error, Mp4Result};

/// Media header fields needed to time samples
#[derive(Debug, Clone, PartialEq)]
pub struct MediaHeader {
    pub timescale: u32,
    pub duration: u64,
    /// ISO 639-2/T code, `None` when unset or not decodable
    pub language: Option<String>,
}

/// Parse mdhd box payload to get timescale, duration and language
pub fn parse_mdhd(mdhd: &[u8]) -> Mp4Result<MediaHeader> {
    let mut r = SliceReader::new(mdhd);
    let version = r
        .read_u8()
        .ok_or_else(|| Mp4Error::new("mdhd box too small"))?;
    r.skip(3).ok_or_else(|| Mp4Error::new("mdhd box too small"))?;

    let fields = if version == 1 {
        // Version 1: 64-bit creation/modification/duration
        r.skip(16).and_then(|_| {
            let timescale = r.read_u32()?;
            let duration = r.read_u64()?;
            Some((timescale, duration))
        })
    } else {
        r.skip(8).and_then(|_| {
            let timescale = r.read_u32()?;
            let duration = r.read_u32()? as u64;
            Some((timescale, duration))
        })
    };
    let (timescale, duration) = fields
        .ok_or_else(|| Mp4Error::new(format!("mdhd v{} box too small", version)))?;

    let language = r.read_u16().and_then(decode_language);

    Ok(MediaHeader {
        timescale,
        duration,
        language,
    })
}

/// Decode a packed ISO 639-2/T code: pad bit followed by three 5-bit letters
fn decode_language(packed: u16) -> Option<String> {
    if packed == 0 {
        return None;
    }
    let code: String = [10u16, 5, 0]
        .iter()
        .map(|shift| (((packed >> shift) & 0x1F) as u8 + 0x60) as char)
        .collect();
    if code.chars().all(|c| c.is_ascii_lowercase()) {
        Some(code)
    } else {
        None
    }
}
