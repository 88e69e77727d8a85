//! The generation-advance engine.
//!
//! ## Overview
//!
//! [`LifeEngine`] owns an append-only [`History`] of generations and answers
//! "give me generation N" requests:
//!
//! - **Memoized**: a generation is computed at most once
//! - **Sequential**: generation k+1 is derived from generation k only
//! - **Stability-aware**: once a generation equals its predecessor, nothing
//!   more is computed and later requests resolve to that fixed point
//! - **Cycle-aware**: the first repetition in the history is recorded as a
//!   [`Cycle`] for hosts that want to spot oscillators
//!
//! ## Usage
//!
//! ```rust
//! use life_engine::engine::LifeEngine;
//!
//! let mut engine = LifeEngine::new();
//! let resolved = engine.resolve(1000).unwrap();
//!
//! if resolved.is_truncated() {
//!     println!("stable since generation {}", resolved.generation);
//! }
//! ```
//!
//! Requests take `&mut self`; hosts sharing one engine across threads must
//! serialize access themselves.

pub mod history;
pub mod life;
pub mod stats;

pub use history::{Cycle, History};
pub use life::{LifeEngine, Resolved};
pub use stats::EngineStats;
