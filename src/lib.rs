//! # life-engine
//!
//! Conway's Game of Life on bounded grids, with memoized generations.
//!
//! ## Design Principles
//!
//! 1. **Append-Only History**: Every computed generation is kept. Asking for
//!    an earlier generation never recomputes anything.
//!
//! 2. **Fixed Rule**: B3/S23 on a bounded (non-wrapping) grid. Corner cells
//!    have 3 neighbors, edge cells 5, interior cells 8.
//!
//! 3. **Stability Short-Circuit**: Once a generation equals its predecessor
//!    the engine stops computing; later requests resolve to that fixed point.
//!
//! ## Modules
//!
//! - `core`: Grids, the update rule, seeds and patterns, RNG, configuration, errors
//! - `engine`: History, cycle detection, statistics, the `LifeEngine` orchestrator
//! - `render`: Text rendering and a terminal playback driver
//!
//! ```
//! use life_engine::{LifeEngine, Renderer, TextRenderer};
//!
//! let mut engine = LifeEngine::new();
//! let resolved = engine.resolve(1000).unwrap();
//! print!("{}", TextRenderer::new().render(resolved.generation, &resolved.grid));
//! ```

pub mod core;
pub mod engine;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    ArgumentError, Dimensions, EngineConfig, Grid, LifeError, LifeRng, Pattern, Result,
    SeedSource,
};

pub use crate::engine::{Cycle, EngineStats, History, LifeEngine, Resolved};

pub use crate::render::{Playback, PlaybackConfig, PlaybackReport, Renderer, TextRenderer};
