use serde::Serialize;

/// Cue container box inside a sample
pub const VTTC: [u8; 4] = *b"vttc";
/// Cue identifier field
pub const IDEN: [u8; 4] = *b"iden";
/// Cue settings field
pub const STTG: [u8; 4] = *b"sttg";
/// Cue text field
pub const PAYL: [u8; 4] = *b"payl";

/// One WebVTT cue decoded from a sample
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Cue {
    /// Empty when the cue box carried no `iden`
    pub identifier: String,
    pub settings: String,
    pub payload_text: String,
    /// Track time units
    pub start_time: u64,
    /// Track time units
    pub duration: u64,
}

impl Cue {
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.duration)
    }

    /// Whether `next` re-signals this cue. Cues without an identifier
    /// never continue each other.
    pub fn is_continued_by(&self, next: &Cue) -> bool {
        !self.identifier.is_empty() && self.identifier == next.identifier
    }

    /// Push the end of the cue outward by `duration` time units.
    pub fn extend(&mut self, duration: u64) {
        self.duration = self.duration.saturating_add(duration);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub samples: u32,
    pub cues: usize,
}
