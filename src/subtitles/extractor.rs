use super::analyzer::select_cue_track;
use super::assembler::ContinuationAssembler;
use super::parser::decode_sample;
use super::types::ExtractStats;
use super::writer::WebVttWriter;
use crate::container::{ContainerReader, ReaderOptions, TrackSummary};
use crate::errors::ExtractResult;
use crate::mp4::Mp4Reader;
use crate::streams::LocalSeekableStream;
use log::{debug, info, warn};
use std::io::Write;
use std::path::Path;

/// Options for one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// 1-based track index; `None` selects the first cue track
    pub track: Option<u32>,
    pub reader: ReaderOptions,
}

/// Open a local MP4 file and choose the cue track to extract.
pub fn open_local_cue_track<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> ExtractResult<(Mp4Reader<LocalSeekableStream>, TrackSummary)> {
    let path = path.as_ref();
    info!("Opening {}", path.display());
    let reader = Mp4Reader::open(path, options.reader)?;
    let track = select_cue_track(&reader, options.track)?;
    Ok((reader, track))
}

/// Decode every sample of `track` and write the resulting WebVTT to `out`.
///
/// Samples are pulled in order and finalized cues are written as soon as the
/// assembler releases them; nothing is buffered beyond the pending set.
pub fn extract_cues<C, W>(
    reader: &mut C,
    track: &TrackSummary,
    out: W,
) -> ExtractResult<ExtractStats>
where
    C: ContainerReader + ?Sized,
    W: Write,
{
    let sample_count = reader.sample_count(track.index)?;
    let timescale = reader.timescale(track.index)?;
    info!(
        "Extracting track {}: {} samples, timescale {}",
        track.index, sample_count, timescale
    );
    if sample_count == 0 {
        warn!("Track {} has no samples", track.index);
    }

    let mut writer = WebVttWriter::new(out, timescale);
    writer.write_header()?;

    let mut assembler = ContinuationAssembler::new();
    for number in 1..=sample_count {
        let sample = reader.read_sample(track.index, number)?;
        let cues = decode_sample(&sample);
        debug!(
            "sample {}: {} bytes, {} cue(s)",
            number,
            sample.bytes.len(),
            cues.len()
        );
        writer.write_cues(&assembler.push_sample(cues))?;
    }
    writer.write_cues(&assembler.finish())?;

    let stats = ExtractStats {
        samples: sample_count,
        cues: writer.cues_written(),
    };
    writer.finish()?;
    info!("Wrote {} cues from {} samples", stats.cues, stats.samples);
    Ok(stats)
}

/// Extract the cue track of a local MP4 file into `out`.
pub fn extract_local_cues<P, W>(
    path: P,
    out: W,
    options: &ExtractOptions,
) -> ExtractResult<ExtractStats>
where
    P: AsRef<Path>,
    W: Write,
{
    let (mut reader, track) = open_local_cue_track(path, options)?;
    extract_cues(&mut reader, &track, out)
}
