//! Engine configuration.
//!
//! The seed generation is the only thing an engine is configured with; the
//! update rule is fixed. Hosts can build an `EngineConfig` in code or load it
//! from JSON:
//!
//! ```
//! use life_engine::core::{EngineConfig, SeedSource};
//!
//! let config: EngineConfig =
//!     serde_json::from_str(r#"{ "seed": { "random": { "rows": 4, "cols": 6, "rng_seed": 9 } } }"#)
//!         .unwrap();
//! assert_eq!(config, EngineConfig::random(4, 6).with_rng_seed(9));
//! assert!(matches!(EngineConfig::default().seed, SeedSource::Builtin));
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::grid::{Dimensions, Grid};
use super::patterns::{builtin_seed, Pattern};
use super::rng::LifeRng;

/// Where generation 0 comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// The fixed 8x8 built-in seed.
    #[default]
    Builtin,

    /// Uniformly random cells.
    Random {
        /// Row count (negative values are rejected).
        rows: i64,
        /// Column count (negative values are rejected).
        cols: i64,
        /// RNG seed. `None` draws one from OS entropy.
        #[serde(default)]
        rng_seed: Option<u64>,
    },

    /// A named pattern centered in a blank grid.
    Pattern {
        /// Which pattern.
        pattern: Pattern,
        /// Row count.
        rows: i64,
        /// Column count.
        cols: i64,
    },

    /// An explicit 0/1 bit matrix.
    Rows(Vec<Vec<u8>>),
}

impl SeedSource {
    /// Build the seed grid.
    ///
    /// Returns the grid together with the RNG seed used, if any.
    pub fn build(&self) -> Result<(Grid, Option<u64>)> {
        match self {
            Self::Builtin => Ok((builtin_seed(), None)),
            Self::Random { rows, cols, rng_seed } => {
                let dims = Dimensions::new(*rows, *cols)?;
                let mut rng = rng_seed.map_or_else(LifeRng::from_entropy, LifeRng::new);
                Ok((Grid::random(dims, &mut rng), Some(rng.seed())))
            }
            Self::Pattern { pattern, rows, cols } => {
                let dims = Dimensions::new(*rows, *cols)?;
                Ok((pattern.place(dims)?, None))
            }
            Self::Rows(rows) => Ok((Grid::from_bits(rows)?, None)),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed generation source.
    #[serde(default)]
    pub seed: SeedSource,
}

impl EngineConfig {
    /// Use the built-in 8x8 seed.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Use a random `rows` x `cols` seed.
    pub fn random(rows: i64, cols: i64) -> Self {
        Self {
            seed: SeedSource::Random {
                rows,
                cols,
                rng_seed: None,
            },
        }
    }

    /// Use a named pattern centered in a `rows` x `cols` grid.
    pub fn pattern(pattern: Pattern, rows: i64, cols: i64) -> Self {
        Self {
            seed: SeedSource::Pattern { pattern, rows, cols },
        }
    }

    /// Use an explicit bit matrix.
    pub fn rows(rows: Vec<Vec<u8>>) -> Self {
        Self {
            seed: SeedSource::Rows(rows),
        }
    }

    /// Fix the RNG seed of a random source. No effect on other sources.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        if let SeedSource::Random { rng_seed, .. } = &mut self.seed {
            *rng_seed = Some(seed);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ArgumentError;

    #[test]
    fn test_default_is_builtin() {
        let (grid, rng_seed) = EngineConfig::default().seed.build().unwrap();
        assert_eq!(grid, builtin_seed());
        assert_eq!(rng_seed, None);
    }

    #[test]
    fn test_random_with_seed_is_reproducible() {
        let config = EngineConfig::random(5, 7).with_rng_seed(123);
        let (a, seed_a) = config.seed.build().unwrap();
        let (b, _) = config.seed.build().unwrap();
        assert_eq!(a, b);
        assert_eq!(seed_a, Some(123));
        assert_eq!(a.dimensions(), Dimensions { rows: 5, cols: 7 });
    }

    #[test]
    fn test_random_without_seed_reports_seed() {
        let (grid, seed) = EngineConfig::random(3, 3).seed.build().unwrap();
        let seed = seed.expect("entropy seed should be reported");
        let (replay, _) = EngineConfig::random(3, 3).with_rng_seed(seed).seed.build().unwrap();
        assert_eq!(grid, replay);
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        let err = EngineConfig::random(-2, 3).seed.build().unwrap_err();
        assert_eq!(
            err.argument(),
            Some(&ArgumentError::NegativeDimensions { rows: -2, cols: 3 })
        );
    }

    #[test]
    fn test_with_rng_seed_ignored_for_builtin() {
        assert_eq!(EngineConfig::builtin().with_rng_seed(5), EngineConfig::builtin());
    }

    #[test]
    fn test_pattern_source() {
        let (grid, _) = EngineConfig::pattern(Pattern::Block, 4, 4).seed.build().unwrap();
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(1, 1), Some(true));
    }

    #[test]
    fn test_serialization() {
        let configs = [
            EngineConfig::builtin(),
            EngineConfig::random(3, 4).with_rng_seed(1),
            EngineConfig::pattern(Pattern::Glider, 8, 8),
            EngineConfig::rows(vec![vec![0, 1], vec![1, 0]]),
        ];
        for config in configs {
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    #[test]
    fn test_missing_seed_defaults_to_builtin() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.seed, SeedSource::Builtin);
    }
}
