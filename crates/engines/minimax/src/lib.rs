//! Minimax Chess Engine
//!
//! Brute-force, full-width search to a fixed depth with material-only
//! scoring. The whole game tree is materialized (`tree::Node::populate`),
//! folded bottom-up (`tree::Node::propagate`), and the winning move is
//! drawn uniformly at random from the root moves tied for the best
//! value. No pruning, no caching, no legality beyond movement patterns;
//! a king capture simply dominates every other line through its huge
//! material value.

pub mod search;
pub mod tree;

pub use search::{run_search, SearchError, SearchReport};
pub use tree::Node;
