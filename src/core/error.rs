//! Error types for the life engine.
//!
//! Every rejected input is an [`LifeError::InvalidArgument`]. Rejections are
//! reported to the caller and never leave the engine partially mutated.

use super::grid::Dimensions;

/// Result alias used throughout the crate.
pub type Result<T, E = LifeError> = std::result::Result<T, E>;

/// Errors produced by the engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// An argument was rejected before any state changed.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Writing a frame failed (playback driver only).
    #[error("i/o error during playback: {0}")]
    Io(#[from] std::io::Error),
}

impl LifeError {
    /// Whether this is an `InvalidArgument` rejection.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The argument error, if this is one.
    #[must_use]
    pub const fn argument(&self) -> Option<&ArgumentError> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Io(_) => None,
        }
    }
}

/// The specific reason an argument was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Generations are indexed from 0; time does not run backwards.
    #[error("generation {0} is negative")]
    NegativeGeneration(i64),

    /// Grid dimensions must be non-negative.
    #[error("dimensions {rows}x{cols} must be non-negative")]
    NegativeDimensions {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        cols: i64,
    },

    /// The grid would hold more cells than can be allocated.
    #[error("dimensions {dims} hold too many cells")]
    TooLarge {
        /// Requested dimensions.
        dims: Dimensions,
    },

    /// A serialized grid's cell list does not match its dimensions.
    #[error("{dims} grid expected {} cells, found {found}", dims.area())]
    CellCountMismatch {
        /// Declared dimensions.
        dims: Dimensions,
        /// Number of cells actually present.
        found: usize,
    },

    /// A seed row does not match the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A seed cell is neither 0 nor 1.
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending value.
        value: u8,
    },

    /// A coordinate lies outside the grid.
    #[error("cell ({row}, {col}) is outside a {dims} grid")]
    OutOfBounds {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// Grid dimensions.
        dims: Dimensions,
    },

    /// A named pattern does not fit in the requested grid.
    #[error("pattern {pattern} needs at least {needed}, grid is {available}")]
    PatternTooLarge {
        /// Pattern name.
        pattern: &'static str,
        /// Minimum dimensions the pattern needs.
        needed: Dimensions,
        /// Dimensions that were offered.
        available: Dimensions,
    },
}
