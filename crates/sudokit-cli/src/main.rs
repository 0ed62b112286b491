//! Command-line front end for the sudokit solver.
//!
//! Accepts a puzzle as an argument, from a file, or line-by-line on stdin,
//! and prints each solution as an 81-character line (or a 9×9 grid with
//! `--pretty`). Failures go to stderr and the exit status reflects whether
//! every puzzle solved.
//!
//! # Usage
//!
//! ```sh
//! sudokit "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
//! sudokit --file puzzles.txt --pretty
//! cat puzzles.txt | sudokit
//! ```
//!
//! Solver progress is logged via `log`; set `RUST_LOG=trace` to watch
//! propagation and search at work.

use std::{
    fs,
    io::{self, BufRead as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use sudokit_core::SolvedGrid;
use sudokit_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as an 81-character line; `.` or any non-digit marks an
    /// unknown cell.
    #[arg(value_name = "PUZZLE", conflicts_with = "file")]
    puzzle: Option<String>,

    /// Read puzzles from a file, one per line. Blank lines are skipped.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print solutions as 9×9 grids with box separators.
    #[arg(long)]
    pretty: bool,

    /// Give up on a puzzle after visiting this many search nodes.
    #[arg(long, value_name = "COUNT")]
    max_nodes: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let solver = match args.max_nodes {
        Some(max_nodes) => Solver::with_max_nodes(max_nodes),
        None => Solver::new(),
    };

    let puzzles = match read_puzzles(&args) {
        Ok(puzzles) => puzzles,
        Err(e) => {
            eprintln!("sudokit: {e}");
            process::exit(2);
        }
    };

    let mut failures = 0_usize;
    for puzzle in &puzzles {
        match solver.solve(puzzle) {
            Ok(solution) => print_solution(&solution, args.pretty),
            Err(e) => {
                eprintln!("sudokit: {puzzle}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        log::debug!("{failures} of {} puzzles failed", puzzles.len());
        process::exit(1);
    }
}

fn read_puzzles(args: &Args) -> io::Result<Vec<String>> {
    let lines: Vec<String> = if let Some(puzzle) = &args.puzzle {
        vec![puzzle.clone()]
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)?
            .lines()
            .map(str::to_owned)
            .collect()
    } else {
        io::stdin().lock().lines().collect::<io::Result<_>>()?
    };
    Ok(lines
        .into_iter()
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect())
}

fn print_solution(solution: &SolvedGrid, pretty: bool) {
    if !pretty {
        println!("{solution}");
        return;
    }
    for (i, row) in solution.rows().enumerate() {
        if i > 0 && i % 3 == 0 {
            println!("------+-------+------");
        }
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!(
            "{} {} {} | {} {} {} | {} {} {}",
            cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6], cells[7], cells[8]
        );
    }
    println!();
}
