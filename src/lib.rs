//! Sliding-tile puzzle solver.
//!
//! Searches the n×n board for a sequence of blank moves reaching the
//! sorted arrangement, by breadth-first, depth-first, or A* search with
//! the Manhattan-distance heuristic.

use clap::{App, Arg};

use lazy_static::lazy_static;
use num::integer::Roots;
use thiserror::Error;

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

pub mod board;
pub mod heuristic;
pub mod report;
pub mod solver;

use board::{PuzzleTree, Tile};
use report::Report;
use solver::SearchOutcome;

type Error = anyhow::Error;

/// A strategy entry point: consumes the rooted tree, returns the outcome.
type Solver = fn(PuzzleTree) -> SearchOutcome;

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Solver> = {
        let mut s: HashMap<&'static str, Solver> = HashMap::new();
        s.insert("bfs", solver::breadth_first);
        s.insert("dfs", solver::depth_first);
        s.insert("ast", solver::a_star);
        s
    };
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("a board of {len} tiles does not form an {n}x{n} square")]
    DimensionMismatch { n: usize, len: usize },

    #[error("tile {tile} is out of range or repeated; the board must hold each of 0..n*n exactly once")]
    InvalidTile { tile: Tile },

    #[error("board tile is not a number")]
    UnreadableTile(#[from] std::num::ParseIntError),

    #[error("unknown search mode '{0}' (expected one of bfs, dfs, ast)")]
    UnknownMode(String),
}

/// Parse a comma-separated flat board into tiles.
pub fn parse_board(text: &str) -> Result<Vec<Tile>, PuzzleError> {
    text.split(',')
        .map(|tile| tile.trim().parse::<Tile>().map_err(PuzzleError::from))
        .collect()
}

/// Command-line driver: pick the strategy, validate the board, run the
/// search, and report.
pub fn run() -> Result<(), Error> {
    let matches = App::new("npuzzle")
        .version("1.0")
        .about("Solve n x n sliding-tile puzzles")
        .arg(
            Arg::with_name("mode")
                .value_name("MODE")
                .help("Search strategy: bfs, dfs or ast")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("board")
                .value_name("BOARD")
                .help("Comma-separated tiles, e.g. 1,2,5,3,4,0,6,7,8")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the result record")
                .takes_value(true)
                .default_value("output.txt"),
        )
        .get_matches();

    let mode = matches.value_of("mode").unwrap().to_lowercase();
    let solve = *SOLVERS
        .get(mode.as_str())
        .ok_or_else(|| PuzzleError::UnknownMode(mode.clone()))?;

    let config = parse_board(matches.value_of("board").unwrap())?;
    let n = config.len().sqrt();
    let tree = PuzzleTree::new(config, n)?;

    let start = Instant::now();
    let outcome = solve(tree);
    let elapsed = start.elapsed();

    match outcome {
        SearchOutcome::Solved(solved) => {
            let record = Report::new(solved, elapsed, report::peak_ram_kb());
            print!("{}", record);
            record.write_to(Path::new(matches.value_of("output").unwrap()))?;
        }
        SearchOutcome::Exhausted { expanded } => {
            println!("No solution found after {} expansions", expanded);
        }
    }

    eprintln!("Program completed in {:.3} second(s)", elapsed.as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_flat_board() {
        assert_eq!(
            parse_board("1,0,2,3,4,5,6,7,8").unwrap(),
            vec![1, 0, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn tolerates_spaces_between_tiles() {
        assert_eq!(parse_board("3, 1, 2, 0").unwrap(), vec![3, 1, 2, 0]);
    }

    #[test]
    fn rejects_non_numeric_tiles() {
        assert!(matches!(
            parse_board("1,x,2"),
            Err(PuzzleError::UnreadableTile(_))
        ));
    }

    #[test]
    fn every_mode_is_registered() {
        for mode in ["bfs", "dfs", "ast"].iter() {
            assert!(SOLVERS.contains_key(mode));
        }
        assert!(SOLVERS.get("idk").is_none());
    }

    #[test]
    fn derives_the_board_dimension() {
        assert_eq!(parse_board("0,1,2,3").unwrap().len().sqrt(), 2);
        assert_eq!(
            parse_board("1,0,2,3,4,5,6,7,8").unwrap().len().sqrt(),
            3
        );
    }
}
