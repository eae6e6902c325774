mod common;

use common::*;
use mp4vtt::subtitles::open_local_cue_track;
use mp4vtt::{extract_webvtt, list_tracks, ExtractError, ExtractOptions, Mp4Reader, ReaderOptions};

fn extract(path: &std::path::Path, track: Option<u32>) -> Result<String, ExtractError> {
    let mut out = Vec::new();
    let options = ExtractOptions {
        track,
        ..ExtractOptions::default()
    };
    extract_webvtt(path, &mut out, &options)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_continued_cue_spans_both_samples() {
    let (_dir, path) = write_temp_mp4(&build_mp4(&[continuation_track()]));
    assert_eq!(extract(&path, None).unwrap(), CONTINUATION_VTT);
}

#[test]
fn test_cue_without_identifier_or_settings() {
    let (_dir, path) = write_temp_mp4(&build_mp4(&[anonymous_track()]));
    assert_eq!(extract(&path, None).unwrap(), ANONYMOUS_VTT);
}

#[test]
fn test_auto_selection_skips_non_cue_tracks() {
    let data = build_mp4(&[TrackSpec::video(), anonymous_track(), continuation_track()]);
    let (_dir, path) = write_temp_mp4(&data);
    assert_eq!(extract(&path, None).unwrap(), ANONYMOUS_VTT);
    assert_eq!(extract(&path, Some(3)).unwrap(), CONTINUATION_VTT);
}

#[test]
fn test_requested_track_must_be_cue_track() {
    let data = build_mp4(&[TrackSpec::video(), anonymous_track()]);
    let (_dir, path) = write_temp_mp4(&data);

    let err = extract(&path, Some(1)).unwrap_err();
    assert!(matches!(err, ExtractError::TrackNotFound(_)), "{:?}", err);
    let err = extract(&path, Some(9)).unwrap_err();
    assert!(matches!(err, ExtractError::TrackNotFound(_)), "{:?}", err);
}

#[test]
fn test_file_without_cue_track() {
    let (_dir, path) = write_temp_mp4(&build_mp4(&[TrackSpec::video()]));
    let err = extract(&path, None).unwrap_err();
    assert!(matches!(err, ExtractError::TrackNotFound(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_svtt_sample_entry_is_accepted() {
    let mut track = anonymous_track();
    track.sample_entry = *b"svtt";
    let (_dir, path) = write_temp_mp4(&build_mp4(&[track]));
    assert_eq!(extract(&path, None).unwrap(), ANONYMOUS_VTT);
}

#[test]
fn test_gap_and_overlapping_cues() {
    let track = TrackSpec::webvtt(
        1000,
        vec![
            (
                [vttc(Some("a"), None, Some("one")), vttc(None, None, Some("two"))].concat(),
                1000,
            ),
            (vtte(), 500),
            (
                [vttc(None, Some("align:start"), Some("three")), vttc(Some("b"), None, Some("four"))]
                    .concat(),
                1500,
            ),
            (vttc(Some("b"), None, None), 500),
        ],
    );
    let (_dir, path) = write_temp_mp4(&build_mp4(&[track]));
    let expected = concat!(
        "WEBVTT\n\n",
        "0:00:00.000 --> 0:00:01.000\ntwo\n\n",
        "a\n0:00:00.000 --> 0:00:01.000\none\n\n",
        "0:00:01.500 --> 0:00:03.000 align:start\nthree\n\n",
        "b\n0:00:01.500 --> 0:00:03.500\nfour\n\n",
    );
    assert_eq!(extract(&path, None).unwrap(), expected);
}

#[test]
fn test_empty_cue_track() {
    let (_dir, path) = write_temp_mp4(&build_mp4(&[TrackSpec::webvtt(1000, Vec::new())]));
    assert_eq!(extract(&path, None).unwrap(), "WEBVTT\n\n");
}

#[test]
fn test_zero_timescale_is_container_error() {
    let mut track = anonymous_track();
    track.timescale = 0;
    let (_dir, path) = write_temp_mp4(&build_mp4(&[track]));
    let err = extract(&path, None).unwrap_err();
    assert!(matches!(err, ExtractError::ContainerRead(_)), "{:?}", err);
}

#[test]
fn test_missing_or_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract(&dir.path().join("absent.mp4"), None).unwrap_err();
    assert!(matches!(err, ExtractError::ContainerRead(_)));

    let (_dir, path) = write_temp_mp4(b"not an mp4 file at all");
    let err = extract(&path, None).unwrap_err();
    assert!(matches!(err, ExtractError::ContainerRead(_)));
}

#[test]
fn test_list_tracks() {
    let data = build_mp4(&[TrackSpec::video(), continuation_track()]);
    let (_dir, path) = write_temp_mp4(&data);
    let tracks = list_tracks(&path, ReaderOptions::default()).unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].handler_type, "vide");
    assert_eq!(tracks[1].index, 2);
    assert_eq!(tracks[1].sample_entry.as_deref(), Some("wvtt"));
    assert_eq!(tracks[1].sample_count, 2);
    assert_eq!(tracks[1].language.as_deref(), Some("und"));
    assert_eq!(tracks[1].duration, 3000);
    assert_eq!(tracks[0].duration, 3000);

    let (_, selected) = open_local_cue_track(&path, &ExtractOptions::default()).unwrap();
    assert_eq!(selected.track_id, 2);
}

#[test]
fn test_huge_top_level_box_is_container_error() {
    let mut data = make_box(b"ftyp", b"isom");
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(b"free");
    data.extend_from_slice(&u64::MAX.to_be_bytes());

    let result = Mp4Reader::new(std::io::Cursor::new(data), ReaderOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_oversized_stsz_in_other_track_does_not_block_extraction() {
    let mut data = build_mp4(&[TrackSpec::video(), anonymous_track()]);
    // first stsz belongs to the video track: size 1, count u32::MAX
    let at = data.windows(4).position(|w| w == b"stsz").unwrap() + 8;
    data[at..at + 4].copy_from_slice(&1u32.to_be_bytes());
    data[at + 4..at + 8].copy_from_slice(&u32::MAX.to_be_bytes());
    let (_dir, path) = write_temp_mp4(&data);

    let tracks = list_tracks(&path, ReaderOptions::default()).unwrap();
    assert_eq!(tracks[0].sample_count, 0);
    assert_eq!(extract(&path, None).unwrap(), ANONYMOUS_VTT);
    let err = extract(&path, Some(1)).unwrap_err();
    assert!(matches!(err, ExtractError::TrackNotFound(_)));
}
