//! Fully determined grids.

use std::fmt::{self, Display};

use crate::{coord::Coord, digit::Digit, digit_set::DigitSet, topology::Unit};

/// A fully determined 9×9 grid: one digit per cell.
///
/// Values of this type are produced by
/// [`CandidateGrid::to_solved`](crate::CandidateGrid::to_solved) and by the
/// solver, which validate the sudoku invariant before construction. The
/// [`is_valid`](Self::is_valid) check is still available as a final
/// correctness gate for callers that assemble grids by other means.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Coord, Digit, SolvedGrid};
///
/// let grid = SolvedGrid::new([Digit::D1; 81]);
/// assert_eq!(grid.digit_at("E5".parse()?), Digit::D1);
/// assert!(!grid.is_valid()); // all-ones is no sudoku
/// # Ok::<(), sudokit_core::ParseCoordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    digits: [Digit; 81],
}

impl SolvedGrid {
    /// Creates a grid from 81 digits in row-major order.
    #[must_use]
    pub const fn new(digits: [Digit; 81]) -> Self {
        Self { digits }
    }

    /// Returns the digit at a coordinate.
    #[must_use]
    pub const fn digit_at(&self, coord: Coord) -> Digit {
        self.digits[coord.index()]
    }

    /// Returns `true` if every row, column, and box contains each digit 1-9
    /// exactly once.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Unit::ALL.iter().all(|unit| {
            let seen: DigitSet = unit.coords().iter().map(|&c| self.digit_at(c)).collect();
            seen == DigitSet::FULL
        })
    }

    /// Returns the 81-character line rendering in row-major order.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.digits.iter().map(|d| d.to_char()).collect()
    }

    /// Returns an iterator over the nine rows, top to bottom, each as an
    /// array of nine digits.
    pub fn rows(&self) -> impl Iterator<Item = [Digit; 9]> {
        (0..9).map(|row| {
            let mut cells = [Digit::D1; 9];
            for (col, cell) in cells.iter_mut().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let coord = Coord::from_row_col(row, col as u8);
                *cell = self.digit_at(coord);
            }
            cells
        })
    }
}

impl Display for SolvedGrid {
    /// Formats the grid as its 81-character line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
