//! Core types: grids, the update rule, seeds, RNG, configuration and errors.
//!
//! Everything here is pure data and pure functions. The stateful part of the
//! crate (history, stability, memoized requests) lives in `engine`.

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rng;
pub mod rule;

pub use config::{EngineConfig, SeedSource};
pub use error::{ArgumentError, LifeError, Result};
pub use grid::{Dimensions, Grid};
pub use patterns::{builtin_seed, Pattern, UnknownPattern, BUILTIN_SEED};
pub use rng::{LifeRng, LifeRngState};
