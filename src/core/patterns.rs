//! The built-in seed and a handful of classic named patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ArgumentError, Result};
use super::grid::{Dimensions, Grid};

/// The default 8x8 seed generation.
pub const BUILTIN_SEED: [[u8; 8]; 8] = [
    [0, 0, 1, 1, 0, 0, 0, 1],
    [0, 1, 1, 1, 0, 0, 1, 1],
    [1, 0, 0, 0, 1, 1, 0, 1],
    [0, 1, 1, 0, 1, 1, 1, 1],
    [1, 1, 0, 1, 0, 1, 0, 0],
    [1, 0, 1, 0, 1, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 0, 0, 1, 1, 0],
];

/// The built-in seed as a grid.
#[must_use]
pub fn builtin_seed() -> Grid {
    Grid::from_bit_array(&BUILTIN_SEED)
}

/// Classic named patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Period-2 oscillator, placed vertically.
    Blinker,
    /// 2x2 still life.
    Block,
    /// 6-cell still life.
    Beehive,
    /// Period-2 oscillator.
    Toad,
    /// Period-2 oscillator made of two diagonal blocks.
    Beacon,
    /// The smallest spaceship.
    Glider,
}

impl Pattern {
    /// Every named pattern.
    pub const ALL: [Self; 6] = [
        Self::Blinker,
        Self::Block,
        Self::Beehive,
        Self::Toad,
        Self::Beacon,
        Self::Glider,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blinker => "blinker",
            Self::Block => "block",
            Self::Beehive => "beehive",
            Self::Toad => "toad",
            Self::Beacon => "beacon",
            Self::Glider => "glider",
        }
    }

    /// Live cells as `(row, col)` offsets inside the bounding box.
    #[must_use]
    pub const fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Self::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Self::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Self::Beehive => &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
            Self::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Self::Beacon => &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
            Self::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }

    /// Bounding box of the pattern.
    ///
    /// This is the smallest grid the pattern can be placed in. Oscillators
    /// and spaceships usually need extra room to evolve as expected.
    #[must_use]
    pub fn min_dimensions(self) -> Dimensions {
        self.cells()
            .iter()
            .fold(Dimensions::default(), |acc, &(r, c)| Dimensions {
                rows: acc.rows.max(r + 1),
                cols: acc.cols.max(c + 1),
            })
    }

    /// Place the pattern centered in a blank grid of the given size.
    pub fn place(self, dims: Dimensions) -> Result<Grid> {
        let needed = self.min_dimensions();
        if !dims.fits(needed) {
            return Err(ArgumentError::PatternTooLarge {
                pattern: self.name(),
                needed,
                available: dims,
            }
            .into());
        }

        let top = (dims.rows - needed.rows) / 2;
        let left = (dims.cols - needed.cols) / 2;
        let mut grid = Grid::new(dims);
        for &(r, c) in self.cells() {
            grid.set(top + r, left + c, true)?;
        }
        Ok(grid)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pattern name that matched nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown pattern '{0}'")]
pub struct UnknownPattern(pub String);

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPattern(s.to_string()))
    }
}
