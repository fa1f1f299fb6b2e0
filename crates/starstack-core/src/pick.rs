//! Star picking: the source of rough star positions.
//!
//! The interactive side lives behind [`StarPicker`] so the pipeline never
//! depends on a terminal or display. [`ScriptedPicker`] replays a fixed
//! sequence of picks for headless runs and tests.

use std::collections::VecDeque;

use crate::frame::{Frame, RoughPick};

/// Supplies rough star positions, one call per star.
///
/// Calls are blocking and made strictly in sequence. `None` means the star is
/// unavailable (the user declined or cancelled).
pub trait StarPicker {
    fn pick(&mut self, frame: &Frame, label: &str) -> Option<RoughPick>;
}

/// Replays a prepared list of picks in call order.
///
/// Once the list is exhausted every further call returns `None`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPicker {
    picks: VecDeque<Option<RoughPick>>,
    calls: usize,
}

impl ScriptedPicker {
    pub fn new<I>(picks: I) -> Self
    where
        I: IntoIterator<Item = Option<RoughPick>>,
    {
        Self {
            picks: picks.into_iter().collect(),
            calls: 0,
        }
    }

    /// Same two picks for each of `frames` frames.
    pub fn repeating(first: RoughPick, second: RoughPick, frames: usize) -> Self {
        Self::new((0..frames).flat_map(|_| [Some(first), Some(second)]))
    }

    /// Number of `pick` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl StarPicker for ScriptedPicker {
    fn pick(&mut self, _frame: &Frame, _label: &str) -> Option<RoughPick> {
        self.calls += 1;
        self.picks.pop_front().flatten()
    }
}
