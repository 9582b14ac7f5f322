//! Claim scoring.
//!
//! A claim picks the square with the most unshaded corners, shades those
//! corners, and awards one point per corner shaded. Ties go to the square
//! found first by `find_squares`.
//!
//! `claim_best` makes at most one claim (the CLAIM phase of a turn).
//! `sweep_final` claims greedily until nothing scores (end of game). The
//! sweep is greedy, not an optimal cover, and callers depend on its exact
//! choices for scoring.

use tracing::debug;

use crate::board::{Grid, Player};
use crate::geometry::{find_squares, Square};

/// A scored claim: the square taken and the points it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Claim {
    pub square: Square,
    pub points: u32,
}

/// Picks the highest-scoring square from `squares` without modifying the grid.
///
/// Returns None when `squares` is empty or every square is fully shaded.
pub fn select_best(squares: &[Square], grid: &Grid) -> Option<Claim> {
    let mut best: Option<Claim> = None;
    for square in squares {
        let points = square.unshaded_count(grid);
        // Strict comparison keeps the first square on ties.
        if best.map_or(true, |b| points > b.points) {
            best = Some(Claim {
                square: *square,
                points,
            });
        }
    }
    best.filter(|c| c.points > 0)
}

/// Returns the claim `owner` would make on `grid`, if any.
pub fn best_claim(owner: Player, grid: &Grid) -> Option<Claim> {
    select_best(&find_squares(owner, grid), grid)
}

/// Shades the unshaded corners of `claim.square`. Returns the number shaded.
fn apply_claim(claim: &Claim, grid: &mut Grid) -> u32 {
    claim
        .square
        .points()
        .iter()
        .filter(|&&p| grid.shade(p))
        .count() as u32
}

/// Makes the single best claim for `owner`, shading its corners in place.
///
/// Returns None (and leaves the grid untouched) if no square would score.
pub fn claim_best(owner: Player, grid: &mut Grid) -> Option<Claim> {
    let claim = best_claim(owner, grid)?;
    let shaded = apply_claim(&claim, grid);
    debug_assert_eq!(shaded, claim.points);
    debug!(player = owner.name(), square = %claim.square, points = claim.points, "claim");
    Some(claim)
}

/// Result of an end-of-game sweep for one player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sweep {
    pub claims: Vec<Claim>,
    pub points: u32,
}

/// Greedily claims squares for `owner` until none would score.
///
/// Each round re-runs square detection on the updated grid, takes the
/// square with the most unshaded corners, and shades them. Stops when no
/// squares remain or the best one is fully shaded.
pub fn sweep_final(owner: Player, grid: &mut Grid) -> Sweep {
    let mut sweep = Sweep::default();
    loop {
        let squares = find_squares(owner, grid);
        if squares.is_empty() {
            break;
        }
        let Some(claim) = select_best(&squares, grid) else {
            break;
        };
        sweep.points += apply_claim(&claim, grid);
        sweep.claims.push(claim);
    }
    debug!(
        player = owner.name(),
        claims = sweep.claims.len(),
        points = sweep.points,
        "final sweep"
    );
    sweep
}
