//! Units: two vertically adjacent cells in one column.

use core::fmt;

use crate::config::{BOARD_SIZE, UNIT_LENGTH};

/// A unit as placed on a board.
///
/// Rows are normalized on construction so that `rows().0 <= rows().1`.
/// Construction does not validate the shape; [`Board::is_valid_placement`]
/// rejects units whose rows are not exactly one apart or that leave the grid.
///
/// [`Board::is_valid_placement`]: crate::Board::is_valid_placement
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    rows: (usize, usize),
    column: usize,
}

impl Unit {
    /// Create a unit occupying `rows` in `column`, in either row order.
    pub fn new(rows: (usize, usize), column: usize) -> Self {
        let (a, b) = rows;
        Self {
            rows: (a.min(b), a.max(b)),
            column,
        }
    }

    /// Unit whose top cell is at (`row`, `column`).
    pub fn vertical(row: usize, column: usize) -> Self {
        Self::new((row, row + 1), column)
    }

    /// Occupied rows, smallest first.
    pub fn rows(&self) -> (usize, usize) {
        self.rows
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Both occupied cells as `(row, col)`, top first.
    pub fn cells(&self) -> [(usize, usize); UNIT_LENGTH] {
        [(self.rows.0, self.column), (self.rows.1, self.column)]
    }

    /// Whether the unit occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        col == self.column && (row == self.rows.0 || row == self.rows.1)
    }

    /// Exactly two adjacent rows, fully inside the grid.
    pub fn is_well_formed(&self) -> bool {
        let size = BOARD_SIZE as usize;
        self.rows.1 - self.rows.0 == 1 && self.rows.1 < size && self.column < size
    }

    /// True when any cell of `self` is within Chebyshev distance 1 of any
    /// cell of `other`. Overlap counts as adjacency.
    pub fn touches(&self, other: &Unit) -> bool {
        self.cells().iter().any(|&(r, c)| {
            other
                .cells()
                .iter()
                .any(|&(or, oc)| r.abs_diff(or) <= 1 && c.abs_diff(oc) <= 1)
        })
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unit {{ rows: ({}, {}), column: {} }}",
            self.rows.0, self.rows.1, self.column
        )
    }
}
