//! Constraint propagation.
//!
//! Two interacting elimination rules run to a fixed point over a
//! [`CandidateGrid`]:
//!
//! - **naked single**: when a cell is down to one candidate, that digit is
//!   eliminated from all 20 peers;
//! - **hidden single**: when a digit has exactly one remaining position in a
//!   unit, it is confirmed there.
//!
//! The original formulation is mutually recursive. Here the work is driven by
//! an explicit FIFO work-list instead, so stack depth stays constant no
//! matter how long a cascade runs. The fixed point of these rules does not
//! depend on processing order.
//!
//! On any [`Contradiction`] the grid must be discarded: partial mutations are
//! not rolled back.

use std::collections::VecDeque;

use sudokit_core::{CandidateGrid, Coord, Digit};

use crate::Contradiction;

/// One pending propagation step.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Fix a cell to a digit by eliminating every other candidate there.
    Confirm(Coord, Digit),
    /// Remove one candidate digit from one cell.
    Eliminate(Coord, Digit),
}

/// Fixes `cell` to `digit` and propagates all consequences.
///
/// Equivalent to eliminating every other candidate at `cell`. If `digit` is
/// not a candidate at `cell`, the cell ends up empty and the call fails.
///
/// # Errors
///
/// Returns a [`Contradiction`] if propagation empties any cell or leaves a
/// digit without a position in some unit.
///
/// # Examples
///
/// ```
/// use sudokit_core::{CandidateGrid, Digit};
/// use sudokit_solver::confirm;
///
/// let mut grid = CandidateGrid::new();
/// let cell = "A1".parse()?;
/// confirm(&mut grid, cell, Digit::D5)?;
///
/// assert_eq!(grid.decided_digit(cell), Some(Digit::D5));
/// // 5 is gone from every peer.
/// assert!(!grid.candidates_at("A2".parse()?).contains(Digit::D5));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn confirm(grid: &mut CandidateGrid, cell: Coord, digit: Digit) -> Result<(), Contradiction> {
    run(grid, Task::Confirm(cell, digit))
}

/// Removes `digit` as a candidate at `cell` and propagates all consequences.
///
/// A no-op if the digit is already absent there.
///
/// # Errors
///
/// Returns a [`Contradiction`] if propagation empties any cell or leaves a
/// digit without a position in some unit.
pub fn eliminate(grid: &mut CandidateGrid, cell: Coord, digit: Digit) -> Result<(), Contradiction> {
    run(grid, Task::Eliminate(cell, digit))
}

fn run(grid: &mut CandidateGrid, initial: Task) -> Result<(), Contradiction> {
    let mut queue = VecDeque::from([initial]);
    while let Some(task) = queue.pop_front() {
        match task {
            Task::Confirm(cell, digit) => {
                for other in grid.candidates_at(cell) {
                    if other != digit {
                        queue.push_back(Task::Eliminate(cell, other));
                    }
                }
            }
            Task::Eliminate(cell, digit) => {
                if !grid.remove_candidate(cell, digit) {
                    continue;
                }
                log::trace!("eliminated {digit} at {cell}");
                let remaining = grid.candidates_at(cell);
                if remaining.is_empty() {
                    return Err(Contradiction::EmptyCell { cell });
                }
                if let Some(sole) = remaining.single() {
                    // Naked single: the last candidate here is banned from
                    // every peer.
                    for &peer in cell.peers() {
                        queue.push_back(Task::Eliminate(peer, sole));
                    }
                }
                for unit in cell.units() {
                    let mut places = unit
                        .coords()
                        .into_iter()
                        .filter(|&c| grid.candidates_at(c).contains(digit));
                    match (places.next(), places.next()) {
                        (None, _) => return Err(Contradiction::Unplaceable { digit, unit }),
                        (Some(only), None) if grid.candidates_at(only).len() > 1 => {
                            // Hidden single: the digit fits nowhere else in
                            // this unit.
                            queue.push_back(Task::Confirm(only, digit));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    Ok(())
}
