use super::scanner::scan_boxes;
use super::types::{Cue, IDEN, PAYL, STTG, VTTC};
use crate::container::Sample;

/// Decode the payload of one `vttc` box into a cue.
///
/// Missing fields stay empty and unknown sub-boxes are skipped. Timing is
/// left at zero for the caller to fill in.
pub fn decode_cue(vttc_payload: &[u8]) -> Cue {
    let mut cue = Cue::default();
    for field in scan_boxes(vttc_payload) {
        let target = match field.fourcc {
            IDEN => &mut cue.identifier,
            STTG => &mut cue.settings,
            PAYL => &mut cue.payload_text,
            _ => continue,
        };
        *target = String::from_utf8_lossy(field.payload).into_owned();
    }
    cue
}

/// Decode every `vttc` box of a sample, in box order, stamped with the
/// sample's timing.
pub fn decode_sample(sample: &Sample) -> Vec<Cue> {
    scan_boxes(&sample.bytes)
        .filter(|b| b.is(&VTTC))
        .map(|b| Cue {
            start_time: sample.presentation_timestamp,
            duration: sample.duration,
            ..decode_cue(b.payload)
        })
        .collect()
}
