//! One-ply greedy placement search.
//!
//! Scores every empty cell with the placement heuristic and keeps the best.
//! Cells are scanned in row-major order and only a strictly better total
//! replaces the current best, so ties go to the first cell scanned. There
//! is no look-ahead.

use rand::Rng;
use tracing::debug;

use crate::board::{Grid, Player, Point};
use crate::eval::{score_placement, MoveScore};

/// Result of a search: the chosen cell and how it scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub point: Point,
    pub score: MoveScore,
    /// Number of empty cells evaluated.
    pub evaluated: usize,
}

/// Picks the best placement for `mover`, or None if the grid is full.
///
/// If no cell could be scored while empty cells remain, falls back to a
/// uniformly random empty cell.
pub fn search(mover: Player, grid: &Grid, rng: &mut impl Rng) -> Option<SearchResult> {
    let empties = grid.empty_points();
    if empties.is_empty() {
        return None;
    }

    let mut best: Option<(Point, MoveScore)> = None;
    for &point in &empties {
        let score = score_placement(mover, point, grid);
        if best.map_or(true, |(_, b)| score.total() > b.total()) {
            best = Some((point, score));
        }
    }

    let (point, score) = match best {
        Some(b) => b,
        None => {
            let point = empties[rng.gen_range(0..empties.len())];
            (point, MoveScore::default())
        }
    };

    debug!(
        player = mover.name(),
        row = point.row,
        col = point.col,
        total = score.total(),
        evaluated = empties.len(),
        "search"
    );
    Some(SearchResult {
        point,
        score,
        evaluated: empties.len(),
    })
}

/// Picks the computer's placement. The computer plays Blue.
pub fn choose_move(grid: &Grid, rng: &mut impl Rng) -> Option<Point> {
    search(Player::Blue, grid, rng).map(|r| r.point)
}

/// Picks a uniformly random empty cell.
pub fn random_move(grid: &Grid, rng: &mut impl Rng) -> Option<Point> {
    let empties = grid.empty_points();
    if empties.is_empty() {
        return None;
    }
    Some(empties[rng.gen_range(0..empties.len())])
}
