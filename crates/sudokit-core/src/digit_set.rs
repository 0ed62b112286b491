//! Candidate digit sets.
//!
//! [`DigitSet`] is a 9-bit set over a `u16` where bits 0-8 represent digits
//! 1-9. It is the per-cell candidate representation used throughout the
//! solver: cheap to copy, cheap to intersect, and iterated in ascending digit
//! order.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

const MASK: u16 = 0x1ff;

/// A set of digits 1-9 backed by a 9-bit mask.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::FULL;
/// set.remove(Digit::D5);
/// set.remove(Digit::D7);
///
/// assert_eq!(set.len(), 7);
/// assert!(!set.contains(Digit::D5));
///
/// // Iteration is in ascending digit order.
/// let first = set.iter().next();
/// assert_eq!(first, Some(Digit::D1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let was_absent = self.0 & bit == 0;
        self.0 |= bit;
        was_absent
    }

    /// Removes a digit, returning `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let was_present = self.0 & bit != 0;
        self.0 &= !bit;
        was_present
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokit_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D4]);
    /// assert_eq!(set.single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.single(), None);
    /// assert_eq!(DigitSet::EMPTY.single(), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            Some(Digit::from_value(self.0.trailing_zeros() as u8 + 1))
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl Display for DigitSet {
    /// Formats the set as its digits in ascending order, e.g. `159`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
