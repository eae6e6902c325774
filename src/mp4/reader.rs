use crate::container::{ContainerReader, ReaderOptions, Sample, TrackSummary};
use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::moov_finder::find_and_read_moov_box;
use crate::mp4::r#box::child_boxes;
use crate::mp4::sample_table::SampleTable;
use crate::mp4::trak::{parse_trak, TrackInfo};
use crate::streams::seekable_stream::{LocalSeekableStream, SeekableStream};
use log::Level;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// MP4 file opened for sample reading.
///
/// The moov box is parsed once on open; sample bytes are read from the
/// stream on demand.
pub struct Mp4Reader<S: SeekableStream> {
    stream: S,
    tracks: Vec<TrackInfo>,
    options: ReaderOptions,
}

impl Mp4Reader<LocalSeekableStream> {
    /// Open a local MP4 file.
    pub fn open<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Mp4Result<Self> {
        let path = path.as_ref();
        let stream = LocalSeekableStream::open(path).map_err(|e| {
            Mp4Error::new(format!("failed to open {}: {}", path.display(), e))
        })?;
        Self::new(stream, options)
    }
}

impl<S: SeekableStream> Mp4Reader<S> {
    /// Parse the moov box of `stream` and index its tracks.
    pub fn new(mut stream: S, options: ReaderOptions) -> Mp4Result<Self> {
        let data_len = stream.stream_len()?;
        let moov = find_and_read_moov_box(&mut stream)?;

        let mut tracks = Vec::new();
        for (name, payload) in child_boxes(&moov) {
            if &name != b"trak" {
                continue;
            }
            let track = parse_trak(payload, data_len)?;
            if let Err(reason) = &track.samples {
                Self::diag(
                    options,
                    Level::Debug,
                    format_args!("track {} has no usable sample table: {}", track.track_id, reason),
                );
            }
            tracks.push(track);
        }

        Self::diag(
            options,
            Level::Info,
            format_args!("moov box: {} bytes, {} tracks", moov.len(), tracks.len()),
        );

        Ok(Self {
            stream,
            tracks,
            options,
        })
    }

    /// Log through the `log` facade only if the reader's own verbosity allows it.
    fn diag(options: ReaderOptions, level: Level, args: std::fmt::Arguments<'_>) {
        if level <= options.log_level {
            log::log!(level, "{}", args);
        }
    }

    fn track(&self, track: u32) -> Mp4Result<&TrackInfo> {
        (track as usize)
            .checked_sub(1)
            .and_then(|i| self.tracks.get(i))
            .ok_or_else(|| Mp4Error::new(format!("no track with index {}", track)))
    }

    fn sample_table(&self, track: u32) -> Mp4Result<&SampleTable> {
        let info = self.track(track)?;
        info.samples.as_ref().map_err(|reason| {
            Mp4Error::new(format!("track {} sample table: {}", info.track_id, reason))
        })
    }
}

impl<S: SeekableStream> ContainerReader for Mp4Reader<S> {
    fn tracks(&self) -> Vec<TrackSummary> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, t)| TrackSummary {
                index: (i + 1) as u32,
                track_id: t.track_id,
                handler_type: t.handler_type.clone(),
                sample_entry: t.sample_entry.clone(),
                timescale: t.media.timescale,
                duration: t.media.duration,
                sample_count: t.samples.as_ref().map(|s| s.len() as u32).unwrap_or(0),
                language: t.media.language.clone(),
            })
            .collect()
    }

    fn sample_count(&self, track: u32) -> Mp4Result<u32> {
        Ok(self.sample_table(track)?.len() as u32)
    }

    fn timescale(&self, track: u32) -> Mp4Result<u32> {
        let info = self.track(track)?;
        match info.media.timescale {
            0 => Err(Mp4Error::new(format!(
                "track {} has a timescale of 0",
                info.track_id
            ))),
            timescale => Ok(timescale),
        }
    }

    fn read_sample(&mut self, track: u32, number: u32) -> Mp4Result<Sample> {
        let entry = self
            .sample_table(track)?
            .get(number)
            .cloned()
            .ok_or_else(|| {
                Mp4Error::new(format!("track {} has no sample {}", track, number))
            })?;

        let mut bytes = vec![0u8; entry.size as usize];
        if entry.size > 0 {
            self.stream.seek(SeekFrom::Start(entry.offset))?;
            self.stream.read_exact(&mut bytes).map_err(|e| {
                Mp4Error::new(format!(
                    "failed to read sample {} ({} bytes at offset {}): {}",
                    number, entry.size, entry.offset, e
                ))
            })?;
        }
        Self::diag(
            self.options,
            Level::Trace,
            format_args!(
                "sample {}: {} bytes at {}, time {} +{}",
                number, entry.size, entry.offset, entry.decode_time, entry.duration
            ),
        );

        Ok(Sample {
            bytes,
            presentation_timestamp: entry.decode_time,
            duration: entry.duration,
        })
    }
}
