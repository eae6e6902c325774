use super::r#box::find_box;
use crate::bits::reader::SliceReader;
use crate::errors::{Mp4Error, Mp4Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SttsEntry {
    pub sample_count: u32,
    pub sample_delta: u32,
}

/// Parse stts (decoding time to sample) box from an stbl payload
pub fn parse_stts(stbl: &[u8]) -> Mp4Result<Vec<SttsEntry>> {
    let stts = find_box(stbl, "stts")
        .ok_or_else(|| Mp4Error::new("stts box not found in stbl box"))?;

    let mut r = SliceReader::new(stts);
    let entry_count = r
        .skip(4)
        .and_then(|_| r.read_u32())
        .ok_or_else(|| Mp4Error::new("stts box too small: expected at least 8 bytes"))?;

    // Verify that the box has enough space for all entries
    let required_size = 8 + (entry_count as usize).saturating_mul(8);
    if required_size > stts.len() {
        return Err(Mp4Error::new(format!(
            "stts box too small for {} entries: expected {} bytes, got {}",
            entry_count,
            required_size,
            stts.len()
        )));
    }

    let mut entries = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        let (Some(sample_count), Some(sample_delta)) = (r.read_u32(), r.read_u32()) else {
            break;
        };
        entries.push(SttsEntry {
            sample_count,
            sample_delta,
        });
    }

    Ok(entries)
}

/// Expand stts entries into per-sample `(decode time, duration)` pairs,
/// in track time units. At most `limit` samples are expanded.
pub fn build_sample_times(entries: &[SttsEntry], limit: usize) -> Vec<(u64, u64)> {
    let mut times = Vec::new();
    let mut time_offset = 0u64;

    for entry in entries {
        let delta = entry.sample_delta as u64;
        for _ in 0..entry.sample_count {
            if times.len() >= limit {
                return times;
            }
            times.push((time_offset, delta));
            time_offset = time_offset.saturating_add(delta);
        }
    }

    times
}
