//! Puzzle line parsing.

use sudokit_core::{Coord, Digit};

use crate::ParseError;

/// Parses an 81-character puzzle line into its given values.
///
/// Characters are read row-major, row `A` to row `I`. Digits `1`-`9` are
/// givens; `.` and every other character stand for an unknown cell and are
/// simply omitted from the result.
///
/// # Errors
///
/// Returns [`ParseError::WrongLength`] if the input is not exactly 81
/// characters.
///
/// # Examples
///
/// ```
/// use sudokit_solver::parse;
///
/// let givens = parse(&format!("5{}", ".".repeat(80)))?;
/// assert_eq!(givens.len(), 1);
/// assert_eq!(givens[0].0.to_string(), "A1");
/// # Ok::<(), sudokit_solver::ParseError>(())
/// ```
pub fn parse(puzzle: &str) -> Result<Vec<(Coord, Digit)>, ParseError> {
    let len = puzzle.chars().count();
    if len != Coord::COUNT {
        return Err(ParseError::WrongLength { len });
    }
    Ok(Coord::all()
        .zip(puzzle.chars())
        .filter_map(|(coord, c)| Digit::from_char(c).map(|digit| (coord, digit)))
        .collect())
}
