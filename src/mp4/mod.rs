pub mod r#box;
pub use r#box::{child_boxes, find_box, find_box_path, write_box_header};
pub mod moov_finder;
pub use moov_finder::{find_and_read_moov_box, find_moov_box, MoovBoxInfo};
pub mod mdhd;
pub use mdhd::{parse_mdhd, MediaHeader};
pub mod stco;
pub use stco::parse_stco_or_co64;
pub mod stsz;
pub use stsz::parse_stsz;
pub mod stsc;
pub use stsc::{parse_stsc, SampleToChunkEntry};
pub mod stts;
pub use stts::{build_sample_times, parse_stts, SttsEntry};
pub mod stsd;
pub use stsd::{first_sample_entry, is_webvtt_sample_entry};
pub mod sample_table;
pub use sample_table::{SampleEntry, SampleTable};
pub mod trak;
pub use trak::{parse_trak, TrackInfo};
pub mod reader;
pub use reader::Mp4Reader;
