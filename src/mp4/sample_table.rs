use super::stco::parse_stco_or_co64;
use super::stsc::{parse_stsc, samples_in_chunk, SampleToChunkEntry};
use super::stsz::parse_stsz;
use super::stts::{build_sample_times, parse_stts};
use crate::errors::{Mp4Error, Mp4Result};

/// Location and timing of one sample in the file
#[derive(Debug, Clone, PartialEq)]
pub struct SampleEntry {
    /// Absolute byte offset in the file
    pub offset: u64,
    pub size: u32,
    /// Decode time in track time units
    pub decode_time: u64,
    pub duration: u64,
}

/// Flattened sample table of one track
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    samples: Vec<SampleEntry>,
}

impl SampleTable {
    /// Build the table from an stbl payload. `data_len` is the size of the
    /// whole file; the samples of one track cannot add up to more.
    pub fn from_stbl(stbl: &[u8], data_len: u64) -> Mp4Result<Self> {
        let sizes = parse_stsz(stbl, data_len)?;
        let times = build_sample_times(&parse_stts(stbl)?, sizes.len());
        let chunk_offsets = parse_stco_or_co64(stbl)?;
        let sample_to_chunk = parse_stsc(stbl)?;
        Self::from_parts(&sizes, &times, &chunk_offsets, &sample_to_chunk)
    }

    /// Map samples to chunks and calculate byte ranges and times.
    pub fn from_parts(
        sizes: &[u32],
        times: &[(u64, u64)],
        chunk_offsets: &[u64],
        sample_to_chunk: &[SampleToChunkEntry],
    ) -> Mp4Result<Self> {
        if times.len() < sizes.len() {
            return Err(Mp4Error::new(format!(
                "stts covers {} of {} samples",
                times.len(),
                sizes.len()
            )));
        }

        let mut samples = Vec::with_capacity(sizes.len());
        for (chunk_idx, &chunk_offset) in chunk_offsets.iter().enumerate() {
            let chunk_num = (chunk_idx + 1) as u32;
            let mut chunk_byte_offset = 0u64;
            for _ in 0..samples_in_chunk(chunk_num, sample_to_chunk) {
                let index = samples.len();
                if index >= sizes.len() {
                    break;
                }
                let (decode_time, duration) = times[index];
                let offset = chunk_offset.checked_add(chunk_byte_offset).ok_or_else(|| {
                    Mp4Error::new(format!(
                        "sample {} offset overflows (chunk {} at {})",
                        index + 1,
                        chunk_num,
                        chunk_offset
                    ))
                })?;
                samples.push(SampleEntry {
                    offset,
                    size: sizes[index],
                    decode_time,
                    duration,
                });
                chunk_byte_offset += sizes[index] as u64;
            }
        }

        if samples.len() < sizes.len() {
            return Err(Mp4Error::new(format!(
                "chunk tables cover {} of {} samples",
                samples.len(),
                sizes.len()
            )));
        }

        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample by 1-based number
    pub fn get(&self, number: u32) -> Option<&SampleEntry> {
        let index = (number as usize).checked_sub(1)?;
        self.samples.get(index)
    }
}
