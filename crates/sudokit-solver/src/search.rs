//! Backtracking search.
//!
//! When propagation alone does not determine every cell, the solver guesses:
//! it picks the most constrained open cell (smallest candidate set above one,
//! ties broken by coordinate order), tries each of its candidates in
//! ascending order on an **owned clone** of the grid, and recurses. The first
//! completed branch wins; exhausted branches simply report "nothing here" and
//! the parent moves on to its next candidate.
//!
//! Each branch owns its clone outright, so a failed branch can never corrupt
//! a sibling. Recursion depth is bounded by the 81 cells.

use sudokit_core::{CandidateGrid, Coord, SolvedGrid};

use crate::{SolveError, parse::parse, propagate::confirm};

/// Marker for a search cut short by the node budget.
///
/// Distinct from an exhausted branch: budget exhaustion aborts the whole
/// search instead of backtracking.
struct OutOfNodes;

#[derive(Debug, Clone, Copy)]
struct Budget {
    remaining: Option<u64>,
}

impl Budget {
    const UNLIMITED: Self = Self { remaining: None };

    fn spend(&mut self) -> Result<(), OutOfNodes> {
        match &mut self.remaining {
            None => Ok(()),
            Some(0) => Err(OutOfNodes),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
        }
    }
}

/// Configurable solver front end.
///
/// The plain [`solve`](crate::solve) function is the common entry point; use
/// `Solver` when the worst-case exponential blowup of near-empty or
/// adversarial puzzles must be capped with a node budget.
///
/// # Examples
///
/// ```
/// use sudokit_solver::{SolveError, Solver};
///
/// let puzzle = ".".repeat(81);
/// let starved = Solver::with_max_nodes(1).solve(&puzzle);
/// assert_eq!(starved.unwrap_err(), SolveError::BudgetExhausted);
///
/// let solution = Solver::new().solve(&puzzle)?;
/// assert!(solution.is_valid());
/// # Ok::<(), SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    max_nodes: Option<u64>,
}

impl Solver {
    /// Creates a solver with no node budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_nodes: None }
    }

    /// Creates a solver that visits at most `max_nodes` search nodes.
    #[must_use]
    pub const fn with_max_nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }

    /// Solves an 81-character puzzle line.
    ///
    /// The pipeline is: parse the givens, confirm each of them into a fresh
    /// candidate grid (first propagation pass), and if the grid is not
    /// already complete, search. The first solution found is returned; the
    /// solver never looks for further solutions.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Parse`] if the line is malformed,
    /// - [`SolveError::NoSolution`] if the givens contradict each other or
    ///   the search exhausts every branch,
    /// - [`SolveError::BudgetExhausted`] if the node budget runs out first.
    pub fn solve(&self, puzzle: &str) -> Result<SolvedGrid, SolveError> {
        let givens = parse(puzzle)?;
        let mut grid = CandidateGrid::new();
        for (cell, digit) in givens {
            confirm(&mut grid, cell, digit).map_err(|contradiction| {
                log::debug!("givens are contradictory: {contradiction}");
                SolveError::NoSolution
            })?;
        }
        if let Some(solved) = grid.to_solved() {
            return Ok(solved);
        }
        let mut budget = Budget {
            remaining: self.max_nodes,
        };
        match search_with_budget(&grid, &mut budget) {
            Ok(Some(solved)) => Ok(solved),
            Ok(None) => Err(SolveError::NoSolution),
            Err(OutOfNodes) => Err(SolveError::BudgetExhausted),
        }
    }
}

/// Searches for any completion of `grid`, depth-first.
///
/// Returns `None` when every branch dead-ends. Callers keep ownership of
/// `grid`; branching works on clones.
#[must_use]
pub fn search(grid: &CandidateGrid) -> Option<SolvedGrid> {
    let mut budget = Budget::UNLIMITED;
    match search_with_budget(grid, &mut budget) {
        Ok(result) => result,
        // An unlimited budget never runs out.
        Err(OutOfNodes) => unreachable!(),
    }
}

fn search_with_budget(
    grid: &CandidateGrid,
    budget: &mut Budget,
) -> Result<Option<SolvedGrid>, OutOfNodes> {
    budget.spend()?;
    if let Some(solved) = grid.to_solved() {
        return Ok(Some(solved));
    }
    let Some(cell) = most_constrained_cell(grid) else {
        // Complete but invalid; a dead end, not an error.
        return Ok(None);
    };
    for digit in grid.candidates_at(cell) {
        let mut branch = grid.clone();
        if confirm(&mut branch, cell, digit).is_err() {
            continue;
        }
        if let Some(solved) = search_with_budget(&branch, budget)? {
            return Ok(Some(solved));
        }
        log::trace!("branch {cell}={digit} exhausted");
    }
    Ok(None)
}

/// Picks the open cell with the fewest candidates (minimum remaining values).
///
/// Ties are broken by coordinate order. Returns `None` when every cell is
/// decided.
fn most_constrained_cell(grid: &CandidateGrid) -> Option<Coord> {
    Coord::all()
        .map(|c| (c, grid.candidates_at(c).len()))
        .filter(|&(_, len)| len > 1)
        .min_by_key(|&(_, len)| len)
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use sudokit_core::Digit;

    use super::*;

    #[test]
    fn test_mrv_prefers_smaller_sets() {
        let mut grid = CandidateGrid::new();
        let b5: Coord = "B5".parse().unwrap();
        // Leave B5 with two candidates; everything else has nine (or is a
        // peer untouched by direct removal).
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                grid.remove_candidate(b5, digit);
            }
        }
        assert_eq!(most_constrained_cell(&grid), Some(b5));
    }

    #[test]
    fn test_mrv_ties_break_by_coordinate_order() {
        let grid = CandidateGrid::new();
        // All cells tie at nine candidates; A1 wins.
        assert_eq!(
            most_constrained_cell(&grid).map(|c| c.to_string()),
            Some("A1".to_string())
        );
    }

    #[test]
    fn test_search_completes_an_empty_grid() {
        let grid = CandidateGrid::new();
        let solved = search(&grid).expect("an empty grid has completions");
        assert!(solved.is_valid());
    }

    #[test]
    fn test_search_does_not_mutate_the_input() {
        let grid = CandidateGrid::new();
        let snapshot = grid.clone();
        let _ = search(&grid);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_budget_exhaustion_aborts() {
        let result = Solver::with_max_nodes(0).solve(&".".repeat(81));
        assert_eq!(result.unwrap_err(), SolveError::BudgetExhausted);
    }

    #[test]
    fn test_budget_large_enough_still_solves() {
        let solution = Solver::with_max_nodes(1_000_000)
            .solve(&".".repeat(81))
            .unwrap();
        assert!(solution.is_valid());
    }
}
