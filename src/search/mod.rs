//! Placement search.
//!
//! Chooses where to place a mark, using the placement heuristic to rank
//! every empty cell.

pub mod greedy;

pub use greedy::{choose_move, random_move, search, SearchResult};
