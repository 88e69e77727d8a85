//! Terminal animation: resolve successive generations and draw each one.
//!
//! The driver only talks to the engine through `resolve`, so any host can
//! swap it for its own loop.

use std::io::Write;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Renderer;
use crate::core::Result;
use crate::engine::LifeEngine;

/// ANSI sequence: clear the screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Playback settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// First generation to draw.
    pub start: usize,

    /// Last generation to draw (inclusive).
    pub end: usize,

    /// Pause between frames.
    pub frame_delay: Duration,

    /// Emit [`CLEAR_SCREEN`] before every frame.
    pub clear_screen: bool,

    /// Stop right after drawing the fixed-point generation.
    pub stop_when_stable: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 100,
            frame_delay: Duration::from_millis(200),
            clear_screen: true,
            stop_when_stable: true,
        }
    }
}

impl PlaybackConfig {
    /// Draw generations `start..=end`.
    #[must_use]
    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the pause between frames.
    #[must_use]
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Enable or disable screen clearing.
    #[must_use]
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Enable or disable stopping at the fixed point.
    #[must_use]
    pub fn with_stop_when_stable(mut self, enabled: bool) -> Self {
        self.stop_when_stable = enabled;
        self
    }
}

/// Outcome of a playback run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackReport {
    /// Frames written.
    pub frames: usize,
    /// Generation shown in the last frame.
    pub last_generation: usize,
    /// Whether the engine was stable when playback ended.
    pub stable: bool,
}

/// Draws a range of generations to a writer.
#[derive(Clone, Debug, Default)]
pub struct Playback {
    config: PlaybackConfig,
}

impl Playback {
    /// Create a driver with the given settings.
    pub fn new(config: PlaybackConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Draw every generation in the configured range.
    pub fn run<R, W>(&self, engine: &mut LifeEngine, renderer: &R, out: &mut W) -> Result<PlaybackReport>
    where
        R: Renderer + ?Sized,
        W: Write,
    {
        let mut report = PlaybackReport::default();

        for n in self.config.start..=self.config.end {
            if report.frames > 0 && !self.config.frame_delay.is_zero() {
                thread::sleep(self.config.frame_delay);
            }

            let resolved = engine.resolve_at(n);
            if self.config.clear_screen {
                out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            out.write_all(renderer.render(resolved.generation, &resolved.grid).as_bytes())?;
            out.flush()?;

            report.frames += 1;
            report.last_generation = resolved.generation;
            debug!(generation = resolved.generation, "drew frame");

            if self.config.stop_when_stable && engine.stable_generation() == Some(resolved.generation) {
                break;
            }
        }

        report.stable = engine.is_stable();
        info!(
            frames = report.frames,
            last_generation = report.last_generation,
            stable = report.stable,
            "playback finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, Grid, Pattern};
    use crate::render::TextRenderer;

    fn quiet(start: usize, end: usize) -> Playback {
        Playback::new(
            PlaybackConfig::default()
                .with_range(start, end)
                .with_frame_delay(Duration::ZERO)
                .with_clear_screen(false),
        )
    }

    #[test]
    fn test_draws_each_generation() {
        let mut engine = LifeEngine::with_config(&crate::core::EngineConfig::pattern(
            Pattern::Blinker,
            3,
            3,
        ))
        .unwrap();
        let mut out: Vec<u8> = Vec::new();
        let report = quiet(0, 2).run(&mut engine, &TextRenderer::new(), &mut out).unwrap();

        assert_eq!(report.frames, 3);
        assert_eq!(report.last_generation, 2);
        assert!(!report.stable);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "  1 2 3\n1   *  \n2   *  \n3   *  \n\
             \x20 1 2 3\n1      \n2 * * *\n3      \n\
             \x20 1 2 3\n1   *  \n2   *  \n3   *  \n"
        );
    }

    #[test]
    fn test_stops_at_fixed_point() {
        let mut engine = LifeEngine::from_grid(Grid::new(Dimensions { rows: 2, cols: 2 }));
        let report = quiet(0, 10)
            .run(&mut engine, &TextRenderer::new(), &mut std::io::sink())
            .unwrap();

        assert_eq!(report.frames, 2);
        assert_eq!(report.last_generation, 1);
        assert!(report.stable);
    }

    #[test]
    fn test_keeps_drawing_fixed_point_when_asked() {
        let mut engine = LifeEngine::from_grid(Grid::new(Dimensions { rows: 2, cols: 2 }));
        let playback = Playback::new(
            quiet(0, 4).config().clone().with_stop_when_stable(false),
        );
        let report = playback
            .run(&mut engine, &TextRenderer::new(), &mut std::io::sink())
            .unwrap();

        assert_eq!(report.frames, 5);
        assert_eq!(report.last_generation, 1);
    }

    #[test]
    fn test_clear_screen_prefix() {
        let mut engine = LifeEngine::new();
        let playback = Playback::new(quiet(0, 0).config().clone().with_clear_screen(true));
        let mut out: Vec<u8> = Vec::new();
        playback.run(&mut engine, &TextRenderer::new(), &mut out).unwrap();
        assert!(out.starts_with(CLEAR_SCREEN.as_bytes()));
    }

    #[test]
    fn test_config_serialization() {
        let config = PlaybackConfig::default().with_range(2, 40);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PlaybackConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
