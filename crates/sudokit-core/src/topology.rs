//! Board topology: units and peers.
//!
//! The 9×9 board has 27 units (9 rows, 9 columns, 9 boxes). Every cell
//! belongs to exactly three of them, and its *peers* are the 20 other cells
//! that share at least one unit with it.
//!
//! Both the unit list and the peer table are built by `const` evaluation, so
//! the topology is a single immutable value shared by every solve call; there
//! is no mutable global state and nothing to initialize at runtime.

use std::fmt::{self, Display};

use crate::coord::Coord;

/// A unit of nine cells: a row, a column, or a 3×3 box.
///
/// # Examples
///
/// ```
/// use sudokit_core::Unit;
///
/// assert_eq!(Unit::ALL.len(), 27);
///
/// let row = Unit::Row { row: 0 };
/// let cells = row.coords();
/// assert_eq!(cells[0].to_string(), "A1");
/// assert_eq!(cells[8].to_string(), "A9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Unit {
    /// Array containing all 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine coordinates of this unit in order.
    #[must_use]
    pub const fn coords(self) -> [Coord; 9] {
        let mut cells = [Coord::new(0); 9];
        let mut i = 0;
        while i < 9 {
            cells[i as usize] = self.coord_at(i);
            i += 1;
        }
        cells
    }

    /// Converts a cell index within the unit (0-8) into a board coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn coord_at(self, i: u8) -> Coord {
        assert!(i < 9);
        match self {
            Self::Row { row } => Coord::from_row_col(row, i),
            Self::Column { col } => Coord::from_row_col(i, col),
            Self::Box { index } => Coord::from_row_col(
                (index / 3) * 3 + i / 3,
                (index % 3) * 3 + i % 3,
            ),
        }
    }

    /// Returns `true` if the unit contains the given coordinate.
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        match self {
            Self::Row { row } => coord.row() == row,
            Self::Column { col } => coord.col() == col,
            Self::Box { index } => coord.box_index() == index,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row } => write!(f, "row {}", (b'A' + row) as char),
            Self::Column { col } => write!(f, "column {}", col + 1),
            Self::Box { index } => write!(f, "box {}", index + 1),
        }
    }
}

/// Peer table: for each cell, the 20 cells sharing a unit with it.
static PEERS: [[Coord; 20]; 81] = build_peers();

#[expect(clippy::cast_possible_truncation)]
const fn build_peers() -> [[Coord; 20]; 81] {
    let mut table = [[Coord::new(0); 20]; 81];
    let mut i = 0;
    while i < 81 {
        let a = Coord::new(i as u8);
        let mut n = 0;
        let mut j = 0;
        while j < 81 {
            if i != j {
                let b = Coord::new(j as u8);
                if a.row() == b.row() || a.col() == b.col() || a.box_index() == b.box_index() {
                    table[i][n] = b;
                    n += 1;
                }
            }
            j += 1;
        }
        assert!(n == 20);
        i += 1;
    }
    table
}

impl Coord {
    /// Returns the three units containing this cell: its row, its column, and
    /// its box.
    #[must_use]
    pub const fn units(self) -> [Unit; 3] {
        [
            Unit::Row { row: self.row() },
            Unit::Column { col: self.col() },
            Unit::Box {
                index: self.box_index(),
            },
        ]
    }

    /// Returns the 20 peers of this cell.
    ///
    /// The peer list never contains the cell itself and is ordered by
    /// ascending coordinate index.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokit_core::Coord;
    ///
    /// let cell: Coord = "C2".parse()?;
    /// assert_eq!(cell.peers().len(), 20);
    /// assert!(!cell.peers().contains(&cell));
    /// # Ok::<(), sudokit_core::ParseCoordError>(())
    /// ```
    #[must_use]
    pub fn peers(self) -> &'static [Coord; 20] {
        &PEERS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_27_units_cover_the_board_thrice() {
        assert_eq!(Unit::ALL.len(), 27);
        for coord in Coord::all() {
            let containing = Unit::ALL.iter().filter(|u| u.contains(coord)).count();
            assert_eq!(containing, 3, "cell {coord}");
        }
    }

    #[test]
    fn test_units_of_cell_contain_it() {
        for coord in Coord::all() {
            for unit in coord.units() {
                assert!(unit.contains(coord), "cell {coord} not in {unit}");
                assert!(unit.coords().contains(&coord));
            }
        }
    }

    #[test]
    fn test_unit_coords_are_distinct() {
        for unit in Unit::ALL {
            let cells = unit.coords();
            for (i, a) in cells.iter().enumerate() {
                for b in &cells[i + 1..] {
                    assert_ne!(a, b, "{unit} repeats {a}");
                }
            }
        }
    }

    #[test]
    fn test_every_cell_has_20_peers_excluding_itself() {
        for coord in Coord::all() {
            let peers = coord.peers();
            assert_eq!(peers.len(), 20);
            assert!(!peers.contains(&coord), "cell {coord} is its own peer");
        }
    }

    #[test]
    fn test_peers_equal_union_of_units_minus_self() {
        for coord in Coord::all() {
            let mut expected: Vec<Coord> = coord
                .units()
                .iter()
                .flat_map(|u| u.coords())
                .filter(|&c| c != coord)
                .collect();
            expected.sort_unstable();
            expected.dedup();
            assert_eq!(coord.peers().as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_peer_relation_is_symmetric() {
        for coord in Coord::all() {
            for &peer in coord.peers() {
                assert!(peer.peers().contains(&coord));
            }
        }
    }

    #[test]
    fn test_known_peers_of_c2() {
        let c2: Coord = "C2".parse().unwrap();
        let peers: Vec<String> = c2.peers().iter().map(ToString::to_string).collect();
        for cell in ["A2", "I2", "C1", "C9", "A1", "B3"] {
            assert!(peers.contains(&cell.to_string()), "missing {cell}");
        }
        assert!(!peers.contains(&"D3".to_string()));
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Row { row: 0 }.to_string(), "row A");
        assert_eq!(Unit::Column { col: 2 }.to_string(), "column 3");
        assert_eq!(Unit::Box { index: 8 }.to_string(), "box 9");
    }
}
