//! Square detection.
//!
//! Finds every square a player's marks form on the grid by testing all
//! 4-point subsets. Shading does not remove a mark from consideration:
//! shaded marks still form squares, they just no longer score.
//!
//! Enumeration order is fixed: marks are collected in row-major order and
//! subsets are visited with ascending indices `a < b < c < d`. Claim
//! tie-breaking depends on this order.

pub mod square;

pub use square::{is_square, Square, EPSILON};

use crate::board::{Grid, Player, Point};

/// Returns all squares formed by `owner`'s marks, in enumeration order.
pub fn find_squares(owner: Player, grid: &Grid) -> Vec<Square> {
    squares_among(&grid.points_of(owner))
}

/// Returns all squares among `marks`, visiting 4-subsets in ascending
/// index order.
pub fn squares_among(marks: &[Point]) -> Vec<Square> {
    let n = marks.len();
    let mut squares = Vec::new();
    if n < 4 {
        return squares;
    }

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    let quad = [marks[a], marks[b], marks[c], marks[d]];
                    if is_square(&quad) {
                        squares.push(Square::new(quad));
                    }
                }
            }
        }
    }

    squares
}

/// Returns true if `owner` has at least one square on the grid.
///
/// Stops at the first hit, so it is cheaper than `find_squares` when only
/// existence matters.
pub fn has_square(owner: Player, grid: &Grid) -> bool {
    let marks = grid.points_of(owner);
    let n = marks.len();
    if n < 4 {
        return false;
    }
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    if is_square(&[marks[a], marks[b], marks[c], marks[d]]) {
                        return true;
                    }
                }
            }
        }
    }
    false
}
