//! Test utilities for propagation assertions.
//!
//! [`PropagationTester`] drives [`confirm`]/[`eliminate`] on a fresh grid and
//! offers chained assertions, so tests read as a short script of moves and
//! expectations. Coordinates are given in `A1` notation and digits as plain
//! numbers; all assertion methods panic with the offending cell in the
//! message.

use std::str::FromStr as _;

use sudokit_core::{CandidateGrid, Coord, Digit, DigitSet};

use crate::{confirm, eliminate};

#[derive(Debug)]
pub(crate) struct PropagationTester {
    grid: CandidateGrid,
}

impl PropagationTester {
    pub(crate) fn new() -> Self {
        Self {
            grid: CandidateGrid::new(),
        }
    }

    fn cell(s: &str) -> Coord {
        Coord::from_str(s).unwrap_or_else(|_| panic!("bad test coordinate {s:?}"))
    }

    /// Confirms a digit, panicking on contradiction.
    #[track_caller]
    pub(crate) fn confirm(mut self, cell: &str, digit: u8) -> Self {
        confirm(&mut self.grid, Self::cell(cell), Digit::from_value(digit))
            .unwrap_or_else(|e| panic!("confirm {cell}={digit} contradicted: {e}"));
        self
    }

    /// Eliminates a candidate, panicking on contradiction.
    #[track_caller]
    pub(crate) fn eliminate(mut self, cell: &str, digit: u8) -> Self {
        eliminate(&mut self.grid, Self::cell(cell), Digit::from_value(digit))
            .unwrap_or_else(|e| panic!("eliminate {digit} at {cell} contradicted: {e}"));
        self
    }

    /// Asserts that a cell is decided to exactly `digit`.
    #[track_caller]
    pub(crate) fn assert_decided(self, cell: &str, digit: u8) -> Self {
        let got = self.grid.decided_digit(Self::cell(cell));
        assert_eq!(
            got,
            Some(Digit::from_value(digit)),
            "{cell} should be decided to {digit}, candidates are {}",
            self.grid.candidates_at(Self::cell(cell)),
        );
        self
    }

    /// Asserts that `digit` is not a candidate at `cell`.
    #[track_caller]
    pub(crate) fn assert_missing(&self, cell: &str, digit: u8) -> &Self {
        let candidates = self.grid.candidates_at(Self::cell(cell));
        assert!(
            !candidates.contains(Digit::from_value(digit)),
            "{cell} should not list {digit}, candidates are {candidates}",
        );
        self
    }

    /// Asserts the exact candidate set at `cell`.
    #[track_caller]
    pub(crate) fn assert_candidates(&self, cell: &str, expected: DigitSet) -> &Self {
        let candidates = self.grid.candidates_at(Self::cell(cell));
        assert_eq!(candidates, expected, "unexpected candidates at {cell}");
        self
    }
}
