use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use chess_core::{Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::tree::Node;

/// The side to move has no candidate moves: either the game is already
/// over, or the search was run with depth 0 and never expanded the
/// root. Callers treat it as a terminal condition, not a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    NoLegalMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "side to move has no candidate moves"),
        }
    }
}

impl Error for SearchError {}

/// Outcome of one search invocation, diagnostics included.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    /// The chosen move.
    pub mv: Move,
    /// Propagated value of the chosen move (tenths of a pawn, positive
    /// favors the engine side).
    pub value: i32,
    /// Moves generated while building the tree.
    pub boards_examined: u64,
    /// Wall time spent on populate, propagate, and selection.
    pub elapsed: Duration,
}

/// Searches `depth` plies ahead and picks a move for the side to move.
///
/// Builds the full tree, propagates a `(value, move)` pair out of every
/// root child, keeps the candidates tied for the maximum value, and
/// picks one of them uniformly at random from `rng`. Injecting the
/// random source keeps the tie-break seedable in tests.
pub fn run_search<R: Rng>(
    pos: &Position,
    depth: u8,
    rng: &mut R,
) -> Result<SearchReport, SearchError> {
    let start = Instant::now();

    let mut boards_examined = 0u64;
    let mut root = Node::root(pos.clone());
    root.populate(depth, &mut boards_examined);

    // The root's direct children are the actual candidate first moves.
    let mut candidates: Vec<(i32, Move)> = Vec::with_capacity(root.children.len());
    for child in &root.children {
        let (value, mv) = child.propagate();
        if let Some(mv) = mv {
            candidates.push((value, mv));
        }
    }

    // Sort descending by value; the sort is stable, so the tied prefix
    // keeps generation order before the random pick.
    candidates.sort_by(|a, b| b.0.cmp(&a.0));
    let best_value = match candidates.first() {
        Some(&(v, _)) => v,
        None => return Err(SearchError::NoLegalMoves),
    };
    let tied: Vec<Move> = candidates
        .iter()
        .take_while(|&&(v, _)| v == best_value)
        .map(|&(_, mv)| mv)
        .collect();

    match tied.choose(rng) {
        Some(&mv) => Ok(SearchReport {
            mv,
            value: best_value,
            boards_examined,
            elapsed: start.elapsed(),
        }),
        None => Err(SearchError::NoLegalMoves),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
