//! Append-only record of every generation computed so far.
//!
//! ## Invariants
//!
//! - Index 0 is the seed.
//! - `history[i + 1] == history[i].step()` for every stored pair.
//! - Entries are never removed or replaced.
//!
//! Storage is an `im::Vector`, so [`History::snapshot`] is an O(1) clone that
//! stays valid no matter how far the live history grows afterwards.
//!
//! Each appended grid is also indexed by hash. The first time a grid repeats an
//! earlier one the history records a [`Cycle`]; a fixed point is simply a
//! cycle of period 1.

use std::hash::{Hash, Hasher};
use std::ops::Index;

use im::Vector;
use rustc_hash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Grid;

/// The first repetition found in a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// First generation of the repeating sequence.
    pub start: usize,
    /// Number of generations before it repeats.
    pub period: usize,
}

impl Cycle {
    /// True if the cycle is a fixed point (period 1).
    #[must_use]
    pub const fn is_fixed_point(&self) -> bool {
        self.period == 1
    }
}

/// Ordered, append-only sequence of generations.
#[derive(Clone, Debug)]
pub struct History {
    grids: Vector<Grid>,
    /// Grid hash -> generations with that hash.
    seen: FxHashMap<u64, SmallVec<[usize; 2]>>,
    cycle: Option<Cycle>,
}

impl History {
    /// Start a history from a seed grid.
    #[must_use]
    pub fn new(seed: Grid) -> Self {
        let mut history = Self {
            grids: Vector::new(),
            seen: FxHashMap::default(),
            cycle: None,
        };
        history.push(seed);
        history
    }

    /// Number of stored generations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Always false: a history holds at least its seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Generation `n`, if computed.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&Grid> {
        self.grids.get(n)
    }

    /// The seed generation.
    #[must_use]
    pub fn seed(&self) -> &Grid {
        &self.grids[0]
    }

    /// The most recently computed generation.
    #[must_use]
    pub fn last(&self) -> &Grid {
        &self.grids[self.grids.len() - 1]
    }

    /// Index of the most recently computed generation.
    #[must_use]
    pub fn last_generation(&self) -> usize {
        self.grids.len() - 1
    }

    /// First repetition observed, if any.
    #[must_use]
    pub const fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    /// Iterate generations in order.
    pub fn iter(&self) -> impl Iterator<Item = &Grid> + '_ {
        self.grids.iter()
    }

    /// O(1) copy of the history as it stands now.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Grid> {
        self.grids.clone()
    }

    /// Append the next generation.
    ///
    /// Returns the cycle if this grid is the first repeat of an earlier one.
    pub(crate) fn push(&mut self, grid: Grid) -> Option<Cycle> {
        let generation = self.grids.len();
        let hash = grid_hash(&grid);
        let bucket = self.seen.entry(hash).or_default();

        let mut found = None;
        if self.cycle.is_none() {
            found = bucket
                .iter()
                .copied()
                .find(|&earlier| self.grids.get(earlier) == Some(&grid))
                .map(|start| Cycle {
                    start,
                    period: generation - start,
                });
            self.cycle = found;
        }

        bucket.push(generation);
        self.grids.push_back(grid);
        found
    }
}

impl Index<usize> for History {
    type Output = Grid;

    fn index(&self, generation: usize) -> &Grid {
        &self.grids[generation]
    }
}

fn grid_hash(grid: &Grid) -> u64 {
    let mut hasher = FxHasher::default();
    grid.hash(&mut hasher);
    hasher.finish()
}
