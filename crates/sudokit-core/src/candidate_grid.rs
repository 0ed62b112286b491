//! Per-cell candidate tracking for the whole board.
//!
//! [`CandidateGrid`] maps every coordinate to the set of digits that can
//! still be placed there. A fresh grid holds all nine candidates in every
//! cell; the solver narrows it by elimination. A cell whose candidate set is
//! empty means the grid has no solution along the current path; detecting
//! that condition is the caller's job (the grid itself never rejects a
//! removal).

use crate::{
    coord::Coord,
    digit::Digit,
    digit_set::DigitSet,
    solved_grid::SolvedGrid,
    topology::Unit,
};

/// Candidate sets for all 81 cells.
///
/// The representation is cell-major: one [`DigitSet`] per coordinate. Cloning
/// is a flat copy of 81 `u16` masks, which keeps per-branch copies in the
/// backtracking search cheap.
///
/// # Examples
///
/// ```
/// use sudokit_core::{CandidateGrid, Coord, Digit};
///
/// let mut grid = CandidateGrid::new();
/// let cell: Coord = "A1".parse()?;
///
/// assert_eq!(grid.candidates_at(cell).len(), 9);
/// assert!(grid.remove_candidate(cell, Digit::D3));
/// assert!(!grid.remove_candidate(cell, Digit::D3)); // already gone
/// # Ok::<(), sudokit_core::ParseCoordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateGrid {
    /// Creates a grid with all nine candidates in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set at a coordinate.
    #[must_use]
    pub const fn candidates_at(&self, coord: Coord) -> DigitSet {
        self.cells[coord.index()]
    }

    /// Removes a candidate digit from a cell, returning `true` if it was
    /// present.
    pub const fn remove_candidate(&mut self, coord: Coord, digit: Digit) -> bool {
        self.cells[coord.index()].remove(digit)
    }

    /// Returns the digit at a coordinate if the cell is decided (exactly one
    /// candidate left).
    #[must_use]
    pub const fn decided_digit(&self, coord: Coord) -> Option<Digit> {
        self.candidates_at(coord).single()
    }

    /// Returns `true` if every cell is decided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Coord::all().all(|c| self.decided_digit(c).is_some())
    }

    /// Returns `true` if the grid is fully solved.
    ///
    /// A grid is solved when every cell is decided and every unit's decided
    /// digits are exactly {1..9}. Checking per-unit distinctness (rather than
    /// a digit sum) rules out grids where a duplicate and a gap cancel out.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokit_core::CandidateGrid;
    ///
    /// assert!(!CandidateGrid::new().is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete()
            && Unit::ALL.iter().all(|unit| {
                let mut seen = DigitSet::EMPTY;
                for coord in unit.coords() {
                    if let Some(digit) = self.decided_digit(coord) {
                        seen.insert(digit);
                    }
                }
                seen == DigitSet::FULL
            })
    }

    /// Converts the grid into a [`SolvedGrid`] if it is solved.
    ///
    /// Returns `None` when any cell is still ambiguous or any unit violates
    /// the distinctness invariant.
    #[must_use]
    pub fn to_solved(&self) -> Option<SolvedGrid> {
        if !self.is_solved() {
            return None;
        }
        let mut digits = [Digit::D1; 81];
        for coord in Coord::all() {
            digits[coord.index()] = self.decided_digit(coord)?;
        }
        Some(SolvedGrid::new(digits))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn coord(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    #[test]
    fn test_new_grid_has_all_candidates() {
        let grid = CandidateGrid::new();
        for c in Coord::all() {
            assert_eq!(grid.candidates_at(c), DigitSet::FULL);
        }
    }

    #[test]
    fn test_remove_candidate_is_idempotent() {
        let mut grid = CandidateGrid::new();
        assert!(grid.remove_candidate(coord("E5"), Digit::D5));
        assert!(!grid.remove_candidate(coord("E5"), Digit::D5));
        assert_eq!(grid.candidates_at(coord("E5")).len(), 8);
    }

    #[test]
    fn test_decided_digit() {
        let mut grid = CandidateGrid::new();
        assert_eq!(grid.decided_digit(coord("A1")), None);
        for digit in Digit::ALL {
            if digit != Digit::D4 {
                grid.remove_candidate(coord("A1"), digit);
            }
        }
        assert_eq!(grid.decided_digit(coord("A1")), Some(Digit::D4));
    }

    #[test]
    fn test_fresh_grid_is_not_solved() {
        let grid = CandidateGrid::new();
        assert!(!grid.is_complete());
        assert!(!grid.is_solved());
        assert!(grid.to_solved().is_none());
    }

    /// A complete latin-square-of-boxes filling built by shifting
    /// `123456789` per row; it satisfies all three unit kinds.
    fn solved_cells() -> CandidateGrid {
        let mut grid = CandidateGrid::new();
        for c in Coord::all() {
            let shift = (c.row() * 3 + c.row() / 3) % 9;
            let value = (c.col() + shift) % 9 + 1;
            for digit in Digit::ALL {
                if digit.value() != value {
                    grid.remove_candidate(c, digit);
                }
            }
        }
        grid
    }

    #[test]
    fn test_valid_completion_is_solved() {
        let grid = solved_cells();
        assert!(grid.is_complete());
        assert!(grid.is_solved());
        let solved = grid.to_solved().unwrap();
        for c in Coord::all() {
            assert_eq!(Some(solved.digit_at(c)), grid.decided_digit(c));
        }
    }

    #[test]
    fn test_duplicate_in_unit_is_not_solved() {
        // Every cell decided, but A2 duplicates A1's digit.
        let reference = solved_cells();
        let a1 = reference.decided_digit(coord("A1")).unwrap();
        let mut grid = CandidateGrid::new();
        for c in Coord::all() {
            let want = if c == coord("A2") {
                a1
            } else {
                reference.decided_digit(c).unwrap()
            };
            for digit in Digit::ALL {
                if digit != want {
                    grid.remove_candidate(c, digit);
                }
            }
        }
        assert!(grid.is_complete());
        assert!(!grid.is_solved());
        assert!(grid.to_solved().is_none());
    }
}
