//! Grid representation.
//!
//! Holds the 7x7 board as a fixed-size array indexed by `Point::index`,
//! so the grid is trivially copyable and AI simulations never allocate.

use super::cell::{Cell, Player, Point, ALL_POINTS, CELL_COUNT};

/// The playing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub cells: [Cell; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Grid::empty()
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub const fn empty() -> Self {
        Grid {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    #[inline]
    pub fn get(&self, point: Point) -> Cell {
        self.cells[point.index()]
    }

    /// Places an unshaded mark. Returns false if the cell is already occupied.
    pub fn place(&mut self, point: Point, owner: Player) -> bool {
        let idx = point.index();
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Occupied {
            owner,
            shaded: false,
        };
        true
    }

    /// Shades the mark at `point`. Returns true only if the mark was
    /// previously unshaded; empty and already-shaded cells are left alone.
    pub fn shade(&mut self, point: Point) -> bool {
        let idx = point.index();
        match self.cells[idx] {
            Cell::Occupied {
                owner,
                shaded: false,
            } => {
                self.cells[idx] = Cell::Occupied { owner, shaded: true };
                true
            }
            _ => false,
        }
    }

    /// Returns a copy of this grid with `owner` marked at `point`.
    /// The caller guarantees the cell is empty.
    pub fn with_mark(&self, point: Point, owner: Player) -> Grid {
        let mut next = *self;
        next.place(point, owner);
        next
    }

    /// All points owned by `owner`, shaded or not, in row-major order.
    pub fn points_of(&self, owner: Player) -> Vec<Point> {
        ALL_POINTS
            .iter()
            .copied()
            .filter(|&p| self.get(p).owner() == Some(owner))
            .collect()
    }

    /// All empty points in row-major order.
    pub fn empty_points(&self) -> Vec<Point> {
        ALL_POINTS
            .iter()
            .copied()
            .filter(|&p| self.get(p).is_empty())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of shaded marks owned by `owner`.
    pub fn shaded_count(&self, owner: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.owner() == Some(owner) && c.is_shaded())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_marks() {
        let grid = Grid::empty();
        assert!(grid.cells.iter().all(|c| c.is_empty()));
        assert_eq!(grid.empty_points().len(), CELL_COUNT);
        assert!(!grid.is_full());
    }

    #[test]
    fn place_works() {
        let mut grid = Grid::empty();
        assert!(grid.place(Point::new(3, 3), Player::Red));
        assert_eq!(
            grid.get(Point::new(3, 3)),
            Cell::Occupied { owner: Player::Red, shaded: false }
        );
        assert_eq!(grid.points_of(Player::Red), vec![Point::new(3, 3)]);
    }

    #[test]
    fn place_rejects_occupied() {
        let mut grid = Grid::empty();
        assert!(grid.place(Point::new(0, 0), Player::Red));
        assert!(!grid.place(Point::new(0, 0), Player::Blue));
        assert_eq!(grid.get(Point::new(0, 0)).owner(), Some(Player::Red));
    }

    #[test]
    fn shade_is_one_way() {
        let mut grid = Grid::empty();
        let p = Point::new(2, 4);
        assert!(!grid.shade(p), "empty cells cannot be shaded");
        grid.place(p, Player::Blue);
        assert!(grid.shade(p));
        assert!(!grid.shade(p), "second shade is a no-op");
        assert_eq!(grid.get(p), Cell::Occupied { owner: Player::Blue, shaded: true });
        assert_eq!(grid.shaded_count(Player::Blue), 1);
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let grid = Grid::empty();
        let next = grid.with_mark(Point::new(1, 1), Player::Blue);
        assert!(grid.get(Point::new(1, 1)).is_empty());
        assert_eq!(next.get(Point::new(1, 1)).owner(), Some(Player::Blue));
    }

    #[test]
    fn points_of_is_row_major() {
        let mut grid = Grid::empty();
        grid.place(Point::new(4, 0), Player::Red);
        grid.place(Point::new(0, 5), Player::Red);
        grid.place(Point::new(0, 2), Player::Red);
        grid.place(Point::new(1, 1), Player::Blue);
        assert_eq!(
            grid.points_of(Player::Red),
            vec![Point::new(0, 2), Point::new(0, 5), Point::new(4, 0)]
        );
    }

    #[test]
    fn full_grid_detected() {
        let mut grid = Grid::empty();
        for (i, p) in ALL_POINTS.iter().enumerate() {
            let owner = if i % 2 == 0 { Player::Red } else { Player::Blue };
            grid.place(*p, owner);
        }
        assert!(grid.is_full());
        assert!(grid.empty_points().is_empty());
    }
}
