//! Board coordinates.
//!
//! A [`Coord`] identifies one of the 81 cells of the board. Internally it is a
//! row-major index 0-80; externally it is displayed and parsed in the
//! traditional `A1`..`I9` notation where the letter names the row and the
//! digit names the column.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A cell coordinate on the 9×9 board.
///
/// Coordinates are ordered row-major: `A1` is index 0, `A9` is index 8, `I9`
/// is index 80. The type is `Copy` and cheap to pass around; all accessors are
/// `const`.
///
/// # Examples
///
/// ```
/// use sudokit_core::Coord;
///
/// let cell: Coord = "C2".parse()?;
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 1);
/// assert_eq!(cell.box_index(), 0);
/// assert_eq!(cell.to_string(), "C2");
/// # Ok::<(), sudokit_core::ParseCoordError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(u8);

/// Error returned when a string is not a valid `A1`..`I9` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid coordinate, expected a row letter A-I followed by a column digit 1-9")]
pub struct ParseCoordError;

impl Coord {
    /// The number of cells on the board.
    pub const COUNT: usize = 81;

    /// Creates a coordinate from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Creates a coordinate from row and column indices (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row index (0-8, row `A` is 0).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column index (0-8, column `1` is 0).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns the row letter (`'A'`..`'I'`).
    #[must_use]
    pub const fn row_letter(self) -> char {
        (b'A' + self.row()) as char
    }

    /// Returns an iterator over all 81 coordinates in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokit_core::Coord;
    ///
    /// assert_eq!(Coord::all().count(), 81);
    /// assert_eq!(Coord::all().next().unwrap().to_string(), "A1");
    /// ```
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..81).map(Self::new)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col() + 1)
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCoordError);
        };
        if !('A'..='I').contains(&row) || !('1'..='9').contains(&col) {
            return Err(ParseCoordError);
        }
        Ok(Self::from_row_col(row as u8 - b'A', col as u8 - b'1'))
    }
}
