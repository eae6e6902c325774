use super::r#box::find_box;
use crate::bits::reader::SliceReader;
use crate::errors::{Mp4Error, Mp4Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SampleToChunkEntry {
    pub first_chunk: u32,
    pub samples_per_chunk: u32,
    pub sample_description_index: u32,
}

/// Parse stsc (sample to chunk) box from an stbl payload
pub fn parse_stsc(stbl: &[u8]) -> Mp4Result<Vec<SampleToChunkEntry>> {
    let stsc = find_box(stbl, "stsc")
        .ok_or_else(|| Mp4Error::new("stsc box not found in stbl box"))?;

    let mut r = SliceReader::new(stsc);
    let entry_count = r
        .skip(4)
        .and_then(|_| r.read_u32())
        .ok_or_else(|| Mp4Error::new("stsc box too small: expected at least 8 bytes"))?;

    let required_size = 8 + (entry_count as usize).saturating_mul(12);
    if required_size > stsc.len() {
        return Err(Mp4Error::new(format!(
            "stsc box too small for {} entries: expected {} bytes, got {}",
            entry_count,
            required_size,
            stsc.len()
        )));
    }

    let entries = (0..entry_count)
        .map_while(|_| {
            Some(SampleToChunkEntry {
                first_chunk: r.read_u32()?,
                samples_per_chunk: r.read_u32()?,
                sample_description_index: r.read_u32()?,
            })
        })
        .collect();

    Ok(entries)
}

/// Get the number of samples in a specific chunk (1-based chunk number)
pub fn samples_in_chunk(chunk_num: u32, sample_to_chunk: &[SampleToChunkEntry]) -> u32 {
    sample_to_chunk
        .iter()
        .take_while(|entry| entry.first_chunk <= chunk_num)
        .last()
        .map(|entry| entry.samples_per_chunk)
        .unwrap_or(0)
}
