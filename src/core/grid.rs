//! Bounded grids of live/dead cells.
//!
//! A [`Grid`] is one generation. Its [`Dimensions`] are fixed at creation and
//! carried unchanged into every generation computed from it.
//!
//! ## Edges
//!
//! The grid is bounded, not toroidal. Cells past the border simply do not
//! exist, so a corner cell has 3 neighbor positions, an edge cell 5 and an
//! interior cell 8.
//!
//! ```
//! use life_engine::core::Grid;
//!
//! let blinker = Grid::from_bits(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
//! assert_eq!(blinker.live_neighbors(1, 0).unwrap(), 3);
//!
//! let next = blinker.step();
//! assert_eq!(next, Grid::from_bits(&[[0, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap());
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{ArgumentError, Result};
use super::rng::LifeRng;
use super::rule;

/// Row and column counts of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Dimensions {
    /// Build dimensions from signed input, rejecting negative values.
    ///
    /// Zero rows or columns are accepted and describe an empty grid. A cell
    /// count that cannot be allocated is rejected as too large.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let dims = match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(rows), Ok(cols)) => Self { rows, cols },
            _ => return Err(ArgumentError::NegativeDimensions { rows, cols }.into()),
        };
        match dims.checked_area() {
            Some(_) => Ok(dims),
            None => Err(ArgumentError::TooLarge { dims }.into()),
        }
    }

    /// Total number of cells, or `None` if it exceeds what a grid can hold.
    #[must_use]
    pub const fn checked_area(self) -> Option<usize> {
        match self.rows.checked_mul(self.cols) {
            Some(area) if area <= isize::MAX as usize => Some(area),
            _ => None,
        }
    }

    /// Total number of cells.
    ///
    /// Saturates instead of wrapping; dimensions built with [`Dimensions::new`]
    /// never saturate.
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// True if the grid holds no cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// True if `(row, col)` lies inside these dimensions.
    #[must_use]
    pub const fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// True if `other` fits inside these dimensions.
    #[must_use]
    pub const fn fits(self, other: Self) -> bool {
        other.rows <= self.rows && other.cols <= self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One generation: a rectangular, row-major matrix of cells.
///
/// Two grids are equal iff their dimensions match and every cell matches.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<bool>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = ArgumentError;

    fn try_from(repr: GridRepr) -> std::result::Result<Self, Self::Error> {
        let expected = repr
            .dims
            .checked_area()
            .ok_or(ArgumentError::TooLarge { dims: repr.dims })?;
        if repr.cells.len() != expected {
            return Err(ArgumentError::CellCountMismatch {
                dims: repr.dims,
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            dims: repr.dims,
            cells: repr.cells,
        })
    }
}

impl Grid {
    /// Create a grid with every cell dead.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.area()],
        }
    }

    /// Create a grid from rows of booleans.
    ///
    /// Every row must be as wide as the first one. An empty slice yields a
    /// 0x0 grid; rows that are all empty yield an Rx0 grid.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(ArgumentError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                }
                .into());
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            dims: Dimensions { rows: rows.len(), cols },
            cells,
        })
    }

    /// Create a grid from a 0/1 bit matrix.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let mut bools = Vec::with_capacity(rows.len());
        for (row, values) in rows.iter().enumerate() {
            let converted = values
                .as_ref()
                .iter()
                .enumerate()
                .map(|(col, &value)| match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err(ArgumentError::InvalidCell { row, col, value }),
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            bools.push(converted);
        }
        Self::from_rows(&bools)
    }

    /// Create a grid from a fixed-size 0/1 bit array.
    ///
    /// # Panics
    ///
    /// Panics if any bit is neither 0 nor 1. Use [`Grid::from_bits`] for
    /// input that is not known in advance.
    #[must_use]
    pub fn from_bit_array<const R: usize, const C: usize>(bits: &[[u8; C]; R]) -> Self {
        assert!(
            bits.iter().flatten().all(|&bit| bit <= 1),
            "bit array cells must be 0 or 1"
        );
        Self {
            dims: Dimensions { rows: R, cols: C },
            cells: bits.iter().flatten().map(|&bit| bit == 1).collect(),
        }
    }

    /// Create a grid where every cell is independently and uniformly live or dead.
    pub fn random(dims: Dimensions, rng: &mut LifeRng) -> Self {
        Self {
            dims,
            cells: (0..dims.area()).map(|_| rng.gen_cell()).collect(),
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.dims.cols
    }

    /// True if the grid holds no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// State of the cell at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let i = self.checked_index(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Iterate rows in order, each as a slice of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let cols = self.dims.cols;
        (0..self.dims.rows).map(move |r| &self.cells[r * cols..(r + 1) * cols])
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True if no cell is alive.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// In-bounds neighbor coordinates of `(row, col)`, excluding the cell itself.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<SmallVec<[(usize, usize); 8]>> {
        self.checked_index(row, col)?;
        let mut out = SmallVec::new();
        for r in self.row_span(row) {
            for c in self.col_span(col) {
                if (r, c) != (row, col) {
                    out.push((r, c));
                }
            }
        }
        Ok(out)
    }

    /// Count of live neighbors of `(row, col)`, in `0..=8`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8> {
        self.checked_index(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    /// Compute the next generation.
    ///
    /// Every cell is derived from `self` alone; the result is a fresh grid.
    #[must_use]
    pub fn step(&self) -> Self {
        let cols = self.dims.cols;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| rule::next_state(alive, self.count_neighbors(i / cols, i % cols)))
            .collect();

        Self { dims: self.dims, cells }
    }

    /// Caller guarantees `(row, col)` is in bounds.
    fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0u8;
        for r in self.row_span(row) {
            let base = r * self.dims.cols;
            for c in self.col_span(col) {
                if self.cells[base + c] {
                    count += 1;
                }
            }
        }
        if self.cells[row * self.dims.cols + col] {
            count -= 1;
        }
        count
    }

    fn row_span(&self, row: usize) -> RangeInclusive<usize> {
        row.saturating_sub(1)..=(row + 1).min(self.dims.rows - 1)
    }

    fn col_span(&self, col: usize) -> RangeInclusive<usize> {
        col.saturating_sub(1)..=(col + 1).min(self.dims.cols - 1)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.dims.contains(row, col).then(|| row * self.dims.cols + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        self.index(row, col).ok_or_else(|| {
            ArgumentError::OutOfBounds {
                row,
                col,
                dims: self.dims,
            }
            .into()
        })
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({})", self.dims)?;
        for row in self.iter_rows() {
            let line: String = row.iter().map(|&alive| if alive { '1' } else { '0' }).collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
