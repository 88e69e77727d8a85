//! Turning generations into something a person can look at.
//!
//! Rendering is not part of the simulation. A [`Renderer`] only sees a
//! read-only grid and the generation it belongs to.
//!
//! - [`TextRenderer`]: text board with 1-based row and column legends
//! - [`Playback`]: clear-screen/sleep loop that animates a range of generations

pub mod playback;
pub mod text;

pub use playback::{Playback, PlaybackConfig, PlaybackReport, CLEAR_SCREEN};
pub use text::TextRenderer;

use crate::core::Grid;

/// Formats one generation.
pub trait Renderer {
    /// Render `grid`, which belongs to `generation`.
    fn render(&self, generation: usize, grid: &Grid) -> String;
}
