//! The generation-request orchestrator.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::history::{Cycle, History};
use super::stats::EngineStats;
use crate::core::{
    builtin_seed, ArgumentError, Dimensions, EngineConfig, Grid, Result, SeedSource,
};

/// Answer to a generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    /// Generation the grid actually belongs to.
    ///
    /// Lower than `requested` when the engine became stable first.
    pub generation: usize,

    /// Generation the caller asked for.
    pub requested: usize,

    /// Snapshot of the generation's grid.
    pub grid: Grid,
}

impl Resolved {
    /// True if the request resolved to an earlier, stable generation.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.generation < self.requested
    }
}

/// Game of Life engine with memoized history and stability detection.
///
/// ```
/// use life_engine::LifeEngine;
///
/// let mut engine = LifeEngine::from_bits(&[[1, 1], [1, 1]]).unwrap();
/// let resolved = engine.resolve(10).unwrap();
///
/// // A block never changes, so generation 1 is already the fixed point.
/// assert_eq!(resolved.generation, 1);
/// assert!(engine.is_stable());
/// ```
#[derive(Clone, Debug)]
pub struct LifeEngine {
    history: History,
    /// First generation equal to its predecessor. `Some` means stable.
    stable_at: Option<usize>,
    rng_seed: Option<u64>,
    stats: EngineStats,
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeEngine {
    /// Engine seeded with the built-in 8x8 pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::from_grid(builtin_seed())
    }

    /// Engine seeded with the given grid.
    #[must_use]
    pub fn from_grid(seed: Grid) -> Self {
        debug!(dims = %seed.dimensions(), population = seed.population(), "seeded engine");
        Self {
            history: History::new(seed),
            stable_at: None,
            rng_seed: None,
            stats: EngineStats::new(),
        }
    }

    /// Engine seeded with a 0/1 bit matrix.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Ok(Self::from_grid(Grid::from_bits(rows)?))
    }

    /// Engine seeded with a uniformly random `rows` x `cols` grid.
    ///
    /// `rng_seed` makes the grid reproducible; `None` draws from OS entropy.
    pub fn random(rows: i64, cols: i64, rng_seed: Option<u64>) -> Result<Self> {
        Self::with_config(&EngineConfig {
            seed: SeedSource::Random { rows, cols, rng_seed },
        })
    }

    /// Engine built from a configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        let (seed, rng_seed) = config.seed.build()?;
        let mut engine = Self::from_grid(seed);
        engine.rng_seed = rng_seed;
        Ok(engine)
    }

    /// Resolve generation `n` to a grid.
    ///
    /// Memoized generations are returned as-is. Missing ones are computed in
    /// order and recorded. Once stable at generation S, any request for
    /// `n >= S` resolves to S.
    ///
    /// A negative `n` is rejected without touching the engine.
    pub fn resolve(&mut self, n: i64) -> Result<Resolved> {
        match usize::try_from(n) {
            Ok(requested) => Ok(self.resolve_at(requested)),
            Err(_) => {
                debug!(requested = n, "rejected negative generation");
                Err(ArgumentError::NegativeGeneration(n).into())
            }
        }
    }

    /// Resolve an already validated generation index.
    pub fn resolve_at(&mut self, requested: usize) -> Resolved {
        self.stats.requests += 1;
        if requested < self.history.len() {
            self.stats.cache_hits += 1;
            trace!(requested, "history hit");
        } else {
            while self.history.len() <= requested && self.step() {}
        }

        let generation = requested.min(self.history.last_generation());
        if generation < requested {
            self.stats.stable_truncations += 1;
        }

        Resolved {
            generation,
            requested,
            grid: self.history[generation].clone(),
        }
    }

    /// Compute and record one more generation.
    ///
    /// Returns false, and does nothing, once the engine is stable.
    pub fn step(&mut self) -> bool {
        if self.stable_at.is_some() {
            return false;
        }

        let generation = self.history.len();
        let next = self.history.last().step();
        let unchanged = next == *self.history.last();
        let population = next.population();

        if let Some(cycle) = self.history.push(next) {
            info!(start = cycle.start, period = cycle.period, "cycle detected");
        }
        self.stats.generations_computed += 1;
        debug!(generation, population, "computed generation");

        if unchanged {
            self.stable_at = Some(generation);
            info!(generation, "reached fixed point");
        }
        true
    }

    /// True once some generation equals its predecessor.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        self.stable_at.is_some()
    }

    /// The fixed-point generation, if reached.
    #[must_use]
    pub const fn stable_generation(&self) -> Option<usize> {
        self.stable_at
    }

    /// First repetition observed so far (a fixed point has period 1).
    #[must_use]
    pub const fn cycle(&self) -> Option<Cycle> {
        self.history.cycle()
    }

    /// All generations computed so far.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Number of generations computed so far, including the seed.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The seed generation.
    #[must_use]
    pub fn seed(&self) -> &Grid {
        self.history.seed()
    }

    /// RNG seed used to build a random seed grid.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Grid dimensions, shared by every generation.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.history.seed().dimensions()
    }

    /// Request counters.
    #[must_use]
    pub const fn stats(&self) -> &EngineStats {
        &self.stats
    }
}
