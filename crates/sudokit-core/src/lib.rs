//! Core data structures for the sudokit solver.
//!
//! This crate provides the fixed 9×9 geometry and the candidate bookkeeping
//! that the solver crate builds on:
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`coord`]: board coordinates in row-major order, displayed in `A1`..`I9`
//!   notation
//! - [`digit_set`]: a 9-bit set of candidate digits for a single cell
//! - [`topology`]: the 27 units (rows, columns, boxes) and the precomputed
//!   peer table, built once at compile time and shared read-only
//! - [`candidate_grid`]: per-cell candidate sets for the whole board
//! - [`solved_grid`]: a fully determined, validated grid
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{CandidateGrid, Coord, Digit};
//!
//! let mut grid = CandidateGrid::new();
//! let cell = Coord::from_row_col(0, 0);
//!
//! // Every cell starts with all nine candidates.
//! assert_eq!(grid.candidates_at(cell).len(), 9);
//!
//! grid.remove_candidate(cell, Digit::D5);
//! assert_eq!(grid.candidates_at(cell).len(), 8);
//! ```

pub use self::{
    candidate_grid::CandidateGrid,
    coord::{Coord, ParseCoordError},
    digit::Digit,
    digit_set::DigitSet,
    solved_grid::SolvedGrid,
    topology::Unit,
};

pub mod candidate_grid;
pub mod coord;
pub mod digit;
pub mod digit_set;
pub mod solved_grid;
pub mod topology;
