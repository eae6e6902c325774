mod analyzer;
mod assembler;
mod extractor;
mod parser;
mod scanner;
mod types;
mod utils;
mod writer;

pub use analyzer::{is_cue_track, select_cue_track};
pub use assembler::ContinuationAssembler;
pub use extractor::{extract_cues, extract_local_cues, open_local_cue_track, ExtractOptions};
pub use parser::{decode_cue, decode_sample};
pub use scanner::{scan_boxes, BoxScanner, ScannedBox};
pub use types::{Cue, ExtractStats};
pub use utils::format_timestamp;
pub use writer::{render_cue, WebVttWriter, WEBVTT_HEADER};
