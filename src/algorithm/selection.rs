//! Choice sources and random tile selection
//!
//! The solver never touches a random number generator directly. Every
//! undetermined cell asks a [`ChoiceSource`] for an index into the sorted
//! candidate set, so production runs can use a seeded or entropy-backed
//! generator while tests replay fixed choices.

use crate::algorithm::bitset::TileSet;
use crate::spatial::tiles::TileId;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Capability to pick an index in `0..len`
pub trait ChoiceSource {
    /// Return an index strictly below `len`
    ///
    /// Callers never pass `len == 0`; implementations return 0 if they do.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Uniform random selector backed by a seedable generator
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl ChoiceSource for RandomSelector {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Always picks the first candidate
///
/// Produces the lowest-numbered valid tile everywhere, which makes the
/// output fully determined by the tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl ChoiceSource for FirstChoice {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Replays a recorded sequence of choices, cycling when exhausted
///
/// Each recorded value is reduced modulo the candidate count, so any
/// sequence is valid for any table.
#[derive(Debug, Clone, Default)]
pub struct ReplaySelector {
    choices: Vec<usize>,
    cursor: usize,
}

impl ReplaySelector {
    /// Create a selector replaying `choices`
    pub const fn new(choices: Vec<usize>) -> Self {
        Self { choices, cursor: 0 }
    }
}

impl ChoiceSource for ReplaySelector {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 || self.choices.is_empty() {
            return 0;
        }
        let recorded = self
            .choices
            .get(self.cursor % self.choices.len())
            .copied()
            .unwrap_or(0);
        self.cursor += 1;
        recorded % len
    }
}

/// Pick one tile from `candidates`, `None` if the set is empty
///
/// The choice source is consulted only when there is something to choose
/// from, so an empty set never consumes a recorded choice.
pub fn pick_tile<S: ChoiceSource + ?Sized>(candidates: &TileSet, source: &mut S) -> Option<TileId> {
    let len = candidates.len();
    if len == 0 {
        return None;
    }
    candidates.nth(source.choose_index(len).min(len - 1))
}
