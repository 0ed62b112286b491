//! Solver error types.

use sudokit_core::{Coord, Digit, Unit};

/// Error returned when an input line cannot be parsed as a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input is not exactly 81 characters long.
    #[display("expected puzzle to be 81 characters long, got {len}")]
    WrongLength {
        /// Actual character count of the input.
        len: usize,
    },
}

/// A contradiction detected during constraint propagation.
///
/// Contradictions are expected and frequent: they are how the backtracking
/// search prunes dead branches. They are recovered locally by the search loop
/// and only surface to callers, collapsed into
/// [`SolveError::NoSolution`], when no alternative remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Contradiction {
    /// A cell's candidate set became empty.
    #[display("no candidates left at {cell}")]
    EmptyCell {
        /// The cell that ran out of candidates.
        cell: Coord,
    },
    /// A digit has no remaining position in a unit.
    #[display("digit {digit} has no position left in {unit}")]
    Unplaceable {
        /// The digit that cannot be placed.
        digit: Digit,
        /// The unit with no slot left for it.
        unit: Unit,
    },
}

/// Error returned by the top-level solve entry points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The input line was rejected by the parser.
    #[display("{_0}")]
    Parse(#[from] ParseError),
    /// Every branch of the search was exhausted without finding a solution.
    #[display("no solution found")]
    NoSolution,
    /// The configured node budget ran out before the search finished.
    #[display("search aborted after exhausting the node budget")]
    BudgetExhausted,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseError::WrongLength { len: 80 }.to_string(),
            "expected puzzle to be 81 characters long, got 80"
        );
        assert_eq!(
            Contradiction::EmptyCell {
                cell: Coord::from_str("B7").unwrap()
            }
            .to_string(),
            "no candidates left at B7"
        );
        assert_eq!(
            Contradiction::Unplaceable {
                digit: Digit::D5,
                unit: Unit::Row { row: 0 }
            }
            .to_string(),
            "digit 5 has no position left in row A"
        );
        assert_eq!(SolveError::NoSolution.to_string(), "no solution found");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: SolveError = ParseError::WrongLength { len: 0 }.into();
        assert_eq!(err, SolveError::Parse(ParseError::WrongLength { len: 0 }));
    }
}
