//! Constraint-propagation sudoku solver.
//!
//! Given an 81-character puzzle line, the solver either produces a fully
//! determined, validated 9×9 grid or reports that none exists. Solving is a
//! pipeline:
//!
//! 1. [`parse`] turns the line into given `(coordinate, digit)` values;
//! 2. [`confirm`] enters each given into a fresh candidate grid, running
//!    naked-single and hidden-single elimination to a fixed point;
//! 3. if cells remain ambiguous, [`search`] backtracks over them with the
//!    minimum-remaining-values heuristic, cloning the grid per branch.
//!
//! Propagation contradictions are internal control flow, recovered by the
//! search; callers only ever see [`ParseError`], a
//! [`SolveError::NoSolution`], or (with a budgeted [`Solver`]) a
//! [`SolveError::BudgetExhausted`].
//!
//! # Examples
//!
//! ```
//! use sudokit_solver::solve;
//!
//! let puzzle =
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
//! let solution = solve(puzzle)?;
//! assert!(solution.is_valid());
//! assert_eq!(solution.to_line().len(), 81);
//! # Ok::<(), sudokit_solver::SolveError>(())
//! ```

pub use self::{
    error::{Contradiction, ParseError, SolveError},
    parse::parse,
    propagate::{confirm, eliminate},
    search::{Solver, search},
};
use sudokit_core::SolvedGrid;

mod error;
mod parse;
mod propagate;
mod search;

#[cfg(test)]
mod testing;

/// Solves an 81-character puzzle line with the default (unbudgeted) solver.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for malformed input and
/// [`SolveError::NoSolution`] when the puzzle has no completion.
pub fn solve(puzzle: &str) -> Result<SolvedGrid, SolveError> {
    Solver::new().solve(puzzle)
}
