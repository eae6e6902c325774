use super::types::Cue;
use log::trace;

/// Merges cues that are re-signaled across consecutive samples.
///
/// A cue with an identifier stays pending while following samples repeat
/// that identifier; each repeat adds its duration to the pending cue. The
/// cue is finalized at the first sample that does not repeat it, or at the
/// end of the track. Cues without an identifier are finalized as soon as
/// they are seen.
///
/// Samples must be pushed in ascending presentation order.
#[derive(Debug, Default)]
pub struct ContinuationAssembler {
    pending: Vec<Cue>,
}

impl ContinuationAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues still waiting to be finalized, in insertion order.
    pub fn pending(&self) -> &[Cue] {
        &self.pending
    }

    /// Reconcile one sample's cues against the pending set.
    ///
    /// Returns the cues finalized by this sample: lapsed pending cues first,
    /// in pending order, then new cues without an identifier, in sample order.
    pub fn push_sample(&mut self, mut incoming: Vec<Cue>) -> Vec<Cue> {
        let mut finalized = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len() + incoming.len());

        for mut held in std::mem::take(&mut self.pending) {
            let (repeats, rest): (Vec<Cue>, Vec<Cue>) = incoming
                .into_iter()
                .partition(|cue| held.is_continued_by(cue));
            incoming = rest;

            if repeats.is_empty() {
                finalized.push(held);
            } else {
                for cue in &repeats {
                    held.extend(cue.duration);
                }
                trace!(
                    "cue '{}' continued by {} box(es), duration now {}",
                    held.identifier,
                    repeats.len(),
                    held.duration
                );
                still_pending.push(held);
            }
        }

        for cue in incoming {
            if cue.identifier.is_empty() {
                finalized.push(cue);
            } else {
                still_pending.push(cue);
            }
        }

        self.pending = still_pending;
        finalized
    }

    /// End of track: every pending cue is finalized, in pending order.
    pub fn finish(self) -> Vec<Cue> {
        self.pending
    }
}
