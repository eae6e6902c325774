use super::r#box::{child_boxes, fourcc_to_string};
use crate::bits::reader::SliceReader;

/// Cue-carrying sample entry formats
pub const WEBVTT_SAMPLE_ENTRIES: [&str; 2] = ["wvtt", "svtt"];

/// Return the format fourcc of the first sample description entry.
///
/// The stsd payload is version/flags (4 bytes), entry count (4 bytes) and
/// then the entries, each laid out as a box.
pub fn first_sample_entry(stsd: &[u8]) -> Option<String> {
    let mut r = SliceReader::new(stsd);
    r.skip(4)?;
    let entry_count = r.read_u32()?;
    if entry_count == 0 {
        return None;
    }
    let entries = r.take(r.remaining())?;
    child_boxes(entries)
        .next()
        .map(|(name, _)| fourcc_to_string(&name))
}

/// Whether a sample entry format carries boxed WebVTT cues
pub fn is_webvtt_sample_entry(format: &str) -> bool {
    WEBVTT_SAMPLE_ENTRIES.contains(&format)
}
