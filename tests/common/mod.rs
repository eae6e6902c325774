//! Synthetic MP4 files for integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn make_box(fourcc: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut buf = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
    buf.extend_from_slice(fourcc);
    buf.extend_from_slice(payload);
    buf
}

fn full_box(fourcc: &[u8; 4], body: &[u8]) -> Vec<u8> {
    make_box(fourcc, &[&[0u8, 0, 0, 0][..], body].concat())
}

/// A `vttc` cue box with the given fields.
pub fn vttc(identifier: Option<&str>, settings: Option<&str>, text: Option<&str>) -> Vec<u8> {
    let mut fields = Vec::new();
    if let Some(id) = identifier {
        fields.extend(make_box(b"iden", id.as_bytes()));
    }
    if let Some(settings) = settings {
        fields.extend(make_box(b"sttg", settings.as_bytes()));
    }
    if let Some(text) = text {
        fields.extend(make_box(b"payl", text.as_bytes()));
    }
    make_box(b"vttc", &fields)
}

/// A `vtte` box, marking a sample without cues.
pub fn vtte() -> Vec<u8> {
    make_box(b"vtte", b"")
}

pub struct TrackSpec {
    pub handler: [u8; 4],
    pub sample_entry: [u8; 4],
    pub timescale: u32,
    /// (bytes, duration)
    pub samples: Vec<(Vec<u8>, u32)>,
}

impl TrackSpec {
    pub fn webvtt(timescale: u32, samples: Vec<(Vec<u8>, u32)>) -> Self {
        Self {
            handler: *b"text",
            sample_entry: *b"wvtt",
            timescale,
            samples,
        }
    }

    pub fn video() -> Self {
        Self {
            handler: *b"vide",
            sample_entry: *b"avc1",
            timescale: 90000,
            samples: vec![(vec![0u8; 16], 3000)],
        }
    }

    fn trak(&self, track_id: u32, chunk_offset: u32) -> Vec<u8> {
        let mut tkhd = vec![0u8; 8];
        tkhd.extend_from_slice(&track_id.to_be_bytes());
        tkhd.extend_from_slice(&[0u8; 68]);

        let total: u32 = self.samples.iter().map(|(_, d)| d).sum();
        let mut mdhd = vec![0u8; 8];
        mdhd.extend_from_slice(&self.timescale.to_be_bytes());
        mdhd.extend_from_slice(&total.to_be_bytes());
        // "und"
        mdhd.extend_from_slice(&[0x55, 0xc4, 0, 0]);

        let mut hdlr = vec![0u8; 4];
        hdlr.extend_from_slice(&self.handler);
        hdlr.extend_from_slice(&[0u8; 13]);

        let entry = make_box(&self.sample_entry, &[0, 0, 0, 0, 0, 0, 0, 1]);
        let stsd = full_box(b"stsd", &[&1u32.to_be_bytes()[..], &entry].concat());

        let count = self.samples.len() as u32;
        let mut stts = count.to_be_bytes().to_vec();
        let mut stsz = 0u32.to_be_bytes().to_vec();
        stsz.extend_from_slice(&count.to_be_bytes());
        for (bytes, duration) in &self.samples {
            stts.extend_from_slice(&1u32.to_be_bytes());
            stts.extend_from_slice(&duration.to_be_bytes());
            stsz.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        }
        let (stsc, stco) = if count == 0 {
            (0u32.to_be_bytes().to_vec(), 0u32.to_be_bytes().to_vec())
        } else {
            (
                [1u32, 1, count, 1].iter().flat_map(|v| v.to_be_bytes()).collect(),
                [1u32, chunk_offset].iter().flat_map(|v| v.to_be_bytes()).collect(),
            )
        };

        let stbl = [
            stsd,
            full_box(b"stts", &stts),
            full_box(b"stsc", &stsc),
            full_box(b"stsz", &stsz),
            full_box(b"stco", &stco),
        ]
        .concat();
        let minf = make_box(b"minf", &make_box(b"stbl", &stbl));
        let mdia = make_box(
            b"mdia",
            &[full_box(b"mdhd", &mdhd), full_box(b"hdlr", &hdlr), minf].concat(),
        );
        make_box(b"trak", &[full_box(b"tkhd", &tkhd), mdia].concat())
    }
}

/// Lay out ftyp, mdat (one chunk per track) and moov.
pub fn build_mp4(tracks: &[TrackSpec]) -> Vec<u8> {
    let ftyp = make_box(b"ftyp", b"isom\0\0\0\x01isomiso6");

    let mut mdat_payload = Vec::new();
    let mut offsets = Vec::new();
    let data_start = (ftyp.len() + 8) as u32;
    for track in tracks {
        offsets.push(data_start + mdat_payload.len() as u32);
        for (bytes, _) in &track.samples {
            mdat_payload.extend_from_slice(bytes);
        }
    }

    let traks: Vec<u8> = tracks
        .iter()
        .zip(offsets)
        .enumerate()
        .flat_map(|(i, (track, offset))| track.trak(i as u32 + 1, offset))
        .collect();
    let moov = make_box(b"moov", &traks);

    [ftyp, make_box(b"mdat", &mdat_payload), moov].concat()
}

/// Write `data` to a file in a fresh temporary directory.
pub fn write_temp_mp4(data: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.mp4");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(data).unwrap();
    (dir, path)
}

/// Two-sample track where the second sample continues cue "X".
pub fn continuation_track() -> TrackSpec {
    TrackSpec::webvtt(
        1000,
        vec![
            (vttc(Some("X"), Some("line:0"), Some("Hello")), 2000),
            (vttc(Some("X"), None, None), 1000),
        ],
    )
}

pub const CONTINUATION_VTT: &str = "WEBVTT\n\nX\n0:00:00.000 --> 0:00:03.000 line:0\nHello\n\n";

/// Single sample with one cue that has neither identifier nor settings.
pub fn anonymous_track() -> TrackSpec {
    TrackSpec::webvtt(1000, vec![(vttc(None, None, Some("Hi")), 500)])
}

pub const ANONYMOUS_VTT: &str = "WEBVTT\n\n0:00:00.000 --> 0:00:00.500\nHi\n\n";
