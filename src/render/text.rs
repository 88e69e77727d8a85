//! Plain-text board rendering.
//!
//! ```text
//!   1 2 3
//! 1   *
//! 2   *
//! 3   *
//! ```
//!
//! Columns and rows carry 1-based legends. Every field is right-aligned to
//! the digit width of the column count, and row labels to the digit width of
//! the row count, so wide grids stay lined up.

use std::fmt::Write as _;

use super::Renderer;
use crate::core::Grid;

/// Renders a grid as a text board with row and column legends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    live: char,
    dead: char,
    generation_header: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            live: '*',
            dead: ' ',
            generation_header: false,
        }
    }
}

impl TextRenderer {
    /// Renderer with `*` for live cells and blanks for dead ones.
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph for live cells.
    #[must_use]
    pub fn with_live(mut self, glyph: char) -> Self {
        self.live = glyph;
        self
    }

    /// Glyph for dead cells.
    #[must_use]
    pub fn with_dead(mut self, glyph: char) -> Self {
        self.dead = glyph;
        self
    }

    /// Prefix the board with a `Generation N` line.
    #[must_use]
    pub fn with_generation_header(mut self, enabled: bool) -> Self {
        self.generation_header = enabled;
        self
    }
}

impl Renderer for TextRenderer {
    fn render(&self, generation: usize, grid: &Grid) -> String {
        let row_width = digits(grid.rows());
        let col_width = digits(grid.cols());
        let mut out = String::new();

        // Writing into a String cannot fail.
        if self.generation_header {
            let _ = writeln!(out, "Generation {generation}");
        }

        let legend: Vec<String> = (1..=grid.cols())
            .map(|c| format!("{c:>col_width$}"))
            .collect();
        let _ = writeln!(out, "{:row_width$} {}", "", legend.join(" "));

        for (r, row) in grid.iter_rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&alive| {
                    let glyph = if alive { self.live } else { self.dead };
                    format!("{glyph:>col_width$}")
                })
                .collect();
            let _ = writeln!(out, "{:>row_width$} {}", r + 1, cells.join(" "));
        }

        out
    }
}

fn digits(n: usize) -> usize {
    n.max(1).to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{builtin_seed, Dimensions};

    #[test]
    fn test_builtin_board() {
        let board = TextRenderer::new().render(0, &builtin_seed());
        let expected = concat!(
            "  1 2 3 4 5 6 7 8\n",
            "1     * *       *\n",
            "2   * * *     * *\n",
            "3 *       * *   *\n",
            "4   * *   * * * *\n",
            "5 * *   *   *    \n",
            "6 *   *   * * *  \n",
            "7   * * * * * * *\n",
            "8 *   *     * *  \n",
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn test_wide_legend_alignment() {
        let mut grid = Grid::new(Dimensions { rows: 2, cols: 12 });
        grid.set(1, 10, true).unwrap();
        let board = TextRenderer::new().render(0, &grid);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], "   1  2  3  4  5  6  7  8  9 10 11 12");
        assert_eq!(lines[2], "2                                *   ");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_custom_glyphs_and_header() {
        let grid = Grid::from_bits(&[[1, 0]]).unwrap();
        let board = TextRenderer::new()
            .with_live('#')
            .with_dead('.')
            .with_generation_header(true)
            .render(7, &grid);
        assert_eq!(board, "Generation 7\n  1 2\n1 # .\n");
    }

    #[test]
    fn test_empty_grid() {
        let board = TextRenderer::new().render(0, &Grid::new(Dimensions::default()));
        assert_eq!(board, "  \n");
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(100), 3);
    }
}
