pub mod bits;
pub use bits::reader::SliceReader;

pub mod container;
pub use container::{ContainerReader, ReaderOptions, Sample, TrackSummary};

pub mod mp4;
pub use mp4::Mp4Reader;

pub mod streams;
pub use streams::{seekable_stream, LocalSeekableStream, SeekableStream};

pub mod subtitles;
pub use subtitles::{Cue, ExtractOptions, ExtractStats};

pub mod errors;
pub use errors::{ExtractError, ExtractResult, Mp4Error, Mp4Result};

use std::io::Write;
use std::path::Path;

/// Extract the WebVTT cue track of a local MP4 file and write it to `out`.
pub fn extract_webvtt<P: AsRef<Path>, W: Write>(
    source: P,
    out: W,
    options: &ExtractOptions,
) -> ExtractResult<ExtractStats> {
    subtitles::extract_local_cues(source, out, options)
}

/// List the tracks of a local MP4 file.
pub fn list_tracks<P: AsRef<Path>>(
    source: P,
    options: ReaderOptions,
) -> ExtractResult<Vec<TrackSummary>> {
    let reader = Mp4Reader::open(source, options)?;
    Ok(reader.tracks())
}
