use super::types::Cue;
use super::utils::{format_timestamp, units_to_seconds};
use std::io::{self, Write};

pub const WEBVTT_HEADER: &str = "WEBVTT\n\n";

/// Render one finalized cue as a WebVTT block, blank line included.
pub fn render_cue(cue: &Cue, timescale: u32) -> String {
    let start = format_timestamp(units_to_seconds(cue.start_time, timescale));
    let end = format_timestamp(units_to_seconds(cue.end_time(), timescale));

    let mut block = String::new();
    if !cue.identifier.is_empty() {
        block.push_str(&cue.identifier);
        block.push('\n');
    }
    block.push_str(&start);
    block.push_str(" --> ");
    block.push_str(&end);
    if !cue.settings.is_empty() {
        block.push(' ');
        block.push_str(&cue.settings);
    }
    block.push('\n');
    block.push_str(&cue.payload_text);
    block.push_str("\n\n");
    block
}

/// Streams WebVTT text to `out` one cue at a time.
pub struct WebVttWriter<W: Write> {
    out: W,
    timescale: u32,
    cues_written: usize,
}

impl<W: Write> WebVttWriter<W> {
    pub fn new(out: W, timescale: u32) -> Self {
        Self {
            out,
            timescale,
            cues_written: 0,
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.out.write_all(WEBVTT_HEADER.as_bytes())
    }

    pub fn write_cue(&mut self, cue: &Cue) -> io::Result<()> {
        self.out
            .write_all(render_cue(cue, self.timescale).as_bytes())?;
        self.cues_written += 1;
        Ok(())
    }

    pub fn write_cues<'a, I>(&mut self, cues: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Cue>,
    {
        for cue in cues {
            self.write_cue(cue)?;
        }
        Ok(())
    }

    pub fn cues_written(&self) -> usize {
        self.cues_written
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
