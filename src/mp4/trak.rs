use crate::bits::reader::SliceReader;
use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::mdhd::{parse_mdhd, MediaHeader};
use crate::mp4::r#box::{find_box, find_box_path};
use crate::mp4::sample_table::SampleTable;
use crate::mp4::stsd::first_sample_entry;

/// Everything the reader keeps about one trak box
#[derive(Debug)]
pub struct TrackInfo {
    pub track_id: u32,
    /// hdlr handler type, e.g. "text", "vide", "soun"
    pub handler_type: String,
    /// Format of the first stsd entry, e.g. "wvtt"
    pub sample_entry: Option<String>,
    pub media: MediaHeader,
    /// Sample table, or why it could not be built. Kept per track so a
    /// broken video table does not prevent reading a subtitle track.
    pub samples: Result<SampleTable, String>,
}

/// Extract track info from a trak box payload. `data_len` is the size of
/// the file the track lives in.
pub fn parse_trak(trak: &[u8], data_len: u64) -> Mp4Result<TrackInfo> {
    let tkhd = find_box(trak, "tkhd").ok_or_else(|| Mp4Error::new("tkhd box not found in trak"))?;
    let track_id = parse_track_id(tkhd).ok_or_else(|| Mp4Error::new("tkhd box too small"))?;

    let mdia = find_box(trak, "mdia")
        .ok_or_else(|| Mp4Error::new(format!("mdia box not found in track {}", track_id)))?;
    let media = find_box(mdia, "mdhd")
        .ok_or_else(|| Mp4Error::new(format!("mdhd box not found in track {}", track_id)))
        .and_then(parse_mdhd)?;

    let handler_type = find_box(mdia, "hdlr")
        .and_then(parse_handler_type)
        .unwrap_or_default();

    let stbl = find_box_path(mdia, "minf.stbl");
    let sample_entry = stbl
        .and_then(|stbl| find_box(stbl, "stsd"))
        .and_then(first_sample_entry);
    let samples = match stbl {
        Some(stbl) => SampleTable::from_stbl(stbl, data_len).map_err(|e| e.to_string()),
        None => Err("stbl box not found".to_string()),
    };

    Ok(TrackInfo {
        track_id,
        handler_type,
        sample_entry,
        media,
        samples,
    })
}

/// Track ID sits after version/flags and the creation/modification times,
/// which are 32-bit in version 0 and 64-bit in version 1.
fn parse_track_id(tkhd: &[u8]) -> Option<u32> {
    let mut r = SliceReader::new(tkhd);
    let version = r.read_u8()?;
    r.skip(3)?;
    r.skip(if version == 1 { 16 } else { 8 })?;
    r.read_u32()
}

/// hdlr payload: version/flags (4), pre_defined (4), handler type (4), ...
fn parse_handler_type(hdlr: &[u8]) -> Option<String> {
    let mut r = SliceReader::new(hdlr);
    r.skip(8)?;
    let handler = r.read_fourcc()?;
    Some(handler.iter().map(|b| *b as char).collect())
}
