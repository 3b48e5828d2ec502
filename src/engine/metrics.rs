//! Reduction traces.
//!
//! [`ElisionEngine::reduce_to_fixed_point`](super::ElisionEngine::reduce_to_fixed_point)
//! only returns the final sequence. When a caller wants to show the merges
//! one at a time (or just see what happened), it uses
//! [`ElisionEngine::reduce_with_trace`](super::ElisionEngine::reduce_with_trace)
//! and gets a [`Reduction`] instead:
//!
//! ```text
//! [que][il][le][aime]
//!   step 0: position 0, "qu'il"  -> [qu'il][le][aime]
//!   step 1: position 1, "l'aime" -> [qu'il][l'aime]
//! ```
//!
//! Timings are wall-clock and only meant for debugging. Each step stores a
//! full snapshot of the sequence, so traces are opt-in.

use crate::SentenceSlot;
use std::time::Duration;

/// One merge applied during a reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    /// Index of the left slot of the merged pair, before the splice.
    pub position: usize,
    /// Surface text of the merged word.
    pub merged_text: String,
    /// The whole sequence right after this merge.
    pub slots: Vec<SentenceSlot>,
    /// Time spent scanning and splicing for this step.
    pub duration: Duration,
}

/// Outcome of a traced reduction.
#[derive(Debug, Clone)]
pub struct Reduction {
    /// The fixed-point sequence.
    pub slots: Vec<SentenceSlot>,
    /// Merges in the order they were applied; empty if nothing contracted.
    pub steps: Vec<MergeStep>,
    /// Total elapsed time, including the final (empty) scan.
    pub total: Duration,
}

impl Reduction {
    pub fn merge_count(&self) -> usize {
        self.steps.len()
    }

    /// Intermediate sequences, starting after the first merge.
    pub fn snapshots(&self) -> impl Iterator<Item = &[SentenceSlot]> {
        self.steps.iter().map(|step| step.slots.as_slice())
    }
}
