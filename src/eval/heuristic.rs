//! Heuristic placement evaluation.
//!
//! Scores a candidate placement from the mover's perspective using four
//! handcrafted features:
//! - claim: the best unshaded count among the mover's squares after placing
//! - block: a flat bonus if the opponent would have a square by taking the cell
//! - positional: a static weight favoring the center of the grid
//! - multi-square: the number of the mover's squares after placing, capped
//!
//! Every feature is non-negative, so every empty cell gets a score >= 0.
//! Existing squares elsewhere on the board count toward claim and block
//! just like new ones.

use crate::board::{Grid, Player, Point, GRID_SIZE};
use crate::geometry::{find_squares, has_square};

/// Multiplier applied to the claim feature.
pub const CLAIM_WEIGHT: i32 = 2;

/// Bonus for occupying a cell that would give the opponent a square.
pub const BLOCK_BONUS: i32 = 5;

/// Cap on the multi-square feature.
pub const MULTI_SQUARE_CAP: i32 = 3;

const CENTER: i32 = (GRID_SIZE / 2) as i32;

const fn build_positional_weights() -> [[i32; GRID_SIZE]; GRID_SIZE] {
    let mut w = [[0i32; GRID_SIZE]; GRID_SIZE];
    let mut i = 0;
    while i < GRID_SIZE {
        let mut j = 0;
        while j < GRID_SIZE {
            let di = (i as i32 - CENTER).abs();
            let dj = (j as i32 - CENTER).abs();
            let chebyshev = if di > dj { di } else { dj };
            w[i][j] = CENTER + 1 - chebyshev;
            j += 1;
        }
        i += 1;
    }
    w
}

/// Positional weights: 4 at the center, falling by one per Chebyshev ring
/// to 1 on the border.
pub const POSITIONAL_WEIGHTS: [[i32; GRID_SIZE]; GRID_SIZE] = build_positional_weights();

#[inline]
pub fn positional_weight(point: Point) -> i32 {
    POSITIONAL_WEIGHTS[point.row as usize][point.col as usize]
}

/// Feature breakdown for one candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveScore {
    pub claim: i32,
    pub block: i32,
    pub positional: i32,
    pub multi_square: i32,
}

impl MoveScore {
    pub fn total(&self) -> i32 {
        self.claim * CLAIM_WEIGHT + self.block + self.positional + self.multi_square
    }
}

/// Scores placing a `mover` mark on the empty cell `point`.
pub fn score_placement(mover: Player, point: Point, grid: &Grid) -> MoveScore {
    let ours = grid.with_mark(point, mover);
    let squares = find_squares(mover, &ours);
    let claim = squares
        .iter()
        .map(|sq| sq.unshaded_count(&ours) as i32)
        .max()
        .unwrap_or(0);

    let theirs = grid.with_mark(point, mover.opponent());
    let block = if has_square(mover.opponent(), &theirs) {
        BLOCK_BONUS
    } else {
        0
    };

    MoveScore {
        claim,
        block,
        positional: positional_weight(point),
        multi_square: (squares.len() as i32).min(MULTI_SQUARE_CAP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: u8, c: u8) -> Point {
        Point::new(r, c)
    }

    #[test]
    fn weights_peak_at_center() {
        assert_eq!(positional_weight(p(3, 3)), 4);
        assert_eq!(positional_weight(p(2, 4)), 3);
        assert_eq!(positional_weight(p(1, 3)), 2);
        assert_eq!(positional_weight(p(0, 0)), 1);
        assert_eq!(positional_weight(p(6, 2)), 1);
        let fours = POSITIONAL_WEIGHTS
            .iter()
            .flatten()
            .filter(|&&w| w == 4)
            .count();
        assert_eq!(fours, 1);
    }

    #[test]
    fn empty_board_scores_only_position() {
        let grid = Grid::empty();
        let s = score_placement(Player::Blue, p(3, 3), &grid);
        assert_eq!(s, MoveScore { claim: 0, block: 0, positional: 4, multi_square: 0 });
        assert_eq!(s.total(), 4);
    }

    #[test]
    fn completing_a_square_scores_claim() {
        let mut grid = Grid::empty();
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            grid.place(p(r, c), Player::Blue);
        }
        let s = score_placement(Player::Blue, p(1, 1), &grid);
        assert_eq!(s.claim, 4);
        assert_eq!(s.multi_square, 1);
        assert_eq!(s.block, 0);
        assert_eq!(s.total(), 4 * 2 + 2 + 1);
    }

    #[test]
    fn blocking_an_opponent_square() {
        let mut grid = Grid::empty();
        for (r, c) in [(5, 5), (5, 6), (6, 5)] {
            grid.place(p(r, c), Player::Red);
        }
        let s = score_placement(Player::Blue, p(6, 6), &grid);
        assert_eq!(s.block, BLOCK_BONUS);
        assert_eq!(s.total(), BLOCK_BONUS + 1);
        assert_eq!(score_placement(Player::Blue, p(0, 0), &grid).block, 0);
    }

    #[test]
    fn multi_square_bonus_is_capped() {
        let mut grid = Grid::empty();
        // Filling the center of a 3x3 blue block yields six squares.
        for r in 0..3u8 {
            for c in 0..3u8 {
                if (r, c) != (1, 1) {
                    grid.place(p(r, c), Player::Blue);
                }
            }
        }
        let s = score_placement(Player::Blue, p(1, 1), &grid);
        assert_eq!(s.multi_square, MULTI_SQUARE_CAP);
    }

    #[test]
    fn shaded_corners_reduce_claim() {
        let mut grid = Grid::empty();
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            grid.place(p(r, c), Player::Blue);
            grid.shade(p(r, c));
        }
        let s = score_placement(Player::Blue, p(1, 1), &grid);
        assert_eq!(s.claim, 1);
    }
}
