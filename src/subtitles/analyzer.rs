use crate::container::{ContainerReader, TrackSummary};
use crate::errors::{ExtractError, ExtractResult};
use crate::mp4::stsd::is_webvtt_sample_entry;
use log::{debug, info};

pub const TEXT_HANDLER: &str = "text";

/// Whether a track carries WebVTT cues: a `text` handler with a `wvtt` or
/// `svtt` sample description.
pub fn is_cue_track(track: &TrackSummary) -> bool {
    track.handler_type == TEXT_HANDLER
        && track
            .sample_entry
            .as_deref()
            .map_or(false, is_webvtt_sample_entry)
}

/// Pick the cue track to extract.
///
/// With `requested` set, that 1-based track index is used as-is and must
/// itself be a cue track. Otherwise the first cue track in container order
/// is chosen.
pub fn select_cue_track<C: ContainerReader + ?Sized>(
    reader: &C,
    requested: Option<u32>,
) -> ExtractResult<TrackSummary> {
    let tracks = reader.tracks();
    for track in &tracks {
        debug!(
            "track {} (id {}): handler '{}', sample entry {:?}, {} samples",
            track.index, track.track_id, track.handler_type, track.sample_entry, track.sample_count
        );
    }

    let selected = match requested {
        Some(index) => {
            let track = tracks
                .into_iter()
                .find(|t| t.index == index)
                .ok_or_else(|| {
                    ExtractError::track_not_found(format!("track {} does not exist", index))
                })?;
            if !is_cue_track(&track) {
                return Err(ExtractError::track_not_found(format!(
                    "track {} is not a VTT text track (handler '{}', sample entry {})",
                    index,
                    track.handler_type,
                    track.sample_entry.as_deref().unwrap_or("none")
                )));
            }
            track
        }
        None => tracks
            .into_iter()
            .find(is_cue_track)
            .ok_or_else(|| ExtractError::track_not_found("VTT text track is not found"))?,
    };

    info!(
        "Using track {} (id {}, {})",
        selected.index,
        selected.track_id,
        selected.sample_entry.as_deref().unwrap_or("?")
    );
    Ok(selected)
}
