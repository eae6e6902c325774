//! The media container collaborator.
//!
//! The cue pipeline never touches the file format directly: it asks a
//! [`ContainerReader`] for the track list, picks a track, and then pulls that
//! track's samples one at a time. [`crate::mp4::Mp4Reader`] is the MP4
//! implementation.

use crate::errors::Mp4Result;
use log::LevelFilter;
use serde::Serialize;

/// Track as listed by the container
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrackSummary {
    /// 1-based position of the track in the container
    pub index: u32,
    pub track_id: u32,
    /// Handler type tag, e.g. "text"
    pub handler_type: String,
    /// Sample description tag, e.g. "wvtt"
    pub sample_entry: Option<String>,
    /// Units per second
    pub timescale: u32,
    /// Media duration from mdhd, in track time units
    pub duration: u64,
    pub sample_count: u32,
    pub language: Option<String>,
}

/// One timed sample of a track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub bytes: Vec<u8>,
    /// Track time units
    pub presentation_timestamp: u64,
    /// Track time units
    pub duration: u64,
}

/// Reader configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Most verbose level at which the reader reports its own diagnostics.
    /// `Off` keeps the reader silent.
    pub log_level: LevelFilter,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Off,
        }
    }
}

/// Narrow interface to a media container.
///
/// Tracks are addressed by their 1-based index, samples by their 1-based
/// number within the track.
#[cfg_attr(test, mockall::automock)]
pub trait ContainerReader {
    fn tracks(&self) -> Vec<TrackSummary>;

    fn sample_count(&self, track: u32) -> Mp4Result<u32>;

    fn timescale(&self, track: u32) -> Mp4Result<u32>;

    /// Read sample `number` in `[1, sample_count]`.
    fn read_sample(&mut self, track: u32, number: u32) -> Mp4Result<Sample>;
}
