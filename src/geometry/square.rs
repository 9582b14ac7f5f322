//! Square testing.
//!
//! Four grid points form a square when their six pairwise distances split
//! into four equal sides and two equal diagonals, with diagonal equal to
//! side times sqrt(2). This accepts tilted squares as well as axis-aligned
//! ones and rejects rectangles and rhombi.

use std::fmt;

use crate::board::{Grid, Point};

/// Tolerance used when comparing floating-point distances.
pub const EPSILON: f64 = 1e-6;

/// Four points forming a square, stored sorted by (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    points: [Point; 4],
}

impl Square {
    /// Builds a square in canonical order from any ordering of its corners.
    /// Does not check the geometry; see [`is_square`].
    pub fn new(mut points: [Point; 4]) -> Self {
        points.sort_unstable();
        Square { points }
    }

    /// The four corners in canonical (row, col) order.
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Number of corners not yet shaded on `grid`.
    pub fn unshaded_count(&self, grid: &Grid) -> u32 {
        self.points
            .iter()
            .filter(|&&p| !grid.get(p).is_shaded())
            .count() as u32
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "({},{})", p.row, p.col)?;
        }
        Ok(())
    }
}

#[inline]
fn distance(a: Point, b: Point) -> f64 {
    let dr = a.row as f64 - b.row as f64;
    let dc = a.col as f64 - b.col as f64;
    (dr * dr + dc * dc).sqrt()
}

/// Returns true if the four points form a square of any orientation.
pub fn is_square(points: &[Point; 4]) -> bool {
    let mut d = [0.0f64; 6];
    let mut k = 0;
    for i in 0..4 {
        for j in (i + 1)..4 {
            d[k] = distance(points[i], points[j]);
            k += 1;
        }
    }
    d.sort_unstable_by(f64::total_cmp);

    // Four sides, then two diagonals.
    let side = d[0];
    if (1..4).any(|i| (d[i] - side).abs() > EPSILON) {
        return false;
    }
    if (d[4] - d[5]).abs() > EPSILON {
        return false;
    }
    (d[4] - side * std::f64::consts::SQRT_2).abs() <= EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn pts(raw: [(u8, u8); 4]) -> [Point; 4] {
        raw.map(|(r, c)| Point::new(r, c))
    }

    #[test]
    fn unit_square() {
        assert!(is_square(&pts([(0, 0), (0, 1), (1, 0), (1, 1)])));
    }

    #[test]
    fn large_axis_aligned_square() {
        assert!(is_square(&pts([(0, 0), (0, 6), (6, 0), (6, 6)])));
        assert!(is_square(&pts([(2, 1), (2, 4), (5, 1), (5, 4)])));
    }

    #[test]
    fn rotated_square() {
        assert!(is_square(&pts([(0, 1), (1, 0), (1, 2), (2, 1)])));
        // Tilted with side sqrt(5).
        assert!(is_square(&pts([(0, 1), (1, 3), (2, 0), (3, 2)])));
    }

    #[test]
    fn rectangle_rejected() {
        assert!(!is_square(&pts([(0, 0), (0, 2), (1, 0), (1, 2)])));
    }

    #[test]
    fn rhombus_rejected() {
        // Equal sides, unequal diagonals.
        assert!(!is_square(&pts([(0, 2), (2, 3), (4, 2), (2, 1)])));
    }

    #[test]
    fn collinear_rejected() {
        assert!(!is_square(&pts([(0, 0), (0, 1), (0, 2), (0, 3)])));
    }

    #[test]
    fn order_does_not_matter() {
        let a = pts([(1, 0), (0, 1), (2, 1), (1, 2)]);
        let b = pts([(2, 1), (1, 2), (0, 1), (1, 0)]);
        assert!(is_square(&a));
        assert!(is_square(&b));
        assert_eq!(Square::new(a), Square::new(b));
    }

    #[test]
    fn canonical_order_is_sorted() {
        let sq = Square::new(pts([(1, 1), (0, 0), (1, 0), (0, 1)]));
        assert_eq!(sq.points(), &pts([(0, 0), (0, 1), (1, 0), (1, 1)]));
        assert_eq!(sq.to_string(), "(0,0) (0,1) (1,0) (1,1)");
    }

    #[test]
    fn unshaded_count_tracks_shading() {
        let mut grid = Grid::empty();
        let sq = Square::new(pts([(0, 0), (0, 1), (1, 0), (1, 1)]));
        for &p in sq.points() {
            grid.place(p, Player::Red);
        }
        assert_eq!(sq.unshaded_count(&grid), 4);
        grid.shade(Point::new(0, 1));
        assert_eq!(sq.unshaded_count(&grid), 3);
    }
}
