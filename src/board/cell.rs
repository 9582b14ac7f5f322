//! Players, cells, and grid coordinates.
//!
//! A cell is either empty or holds a mark owned by one player. A mark's
//! owner never changes once placed; its shaded flag only ever flips from
//! unshaded to shaded when the mark is counted toward a claim.

use serde::Serialize;

/// Side length of the playing grid.
pub const GRID_SIZE: usize = 7;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// One of the two players. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::Red, Player::Blue];

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Index into per-player arrays such as scores.
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Returns the lowercase protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Blue => "blue",
        }
    }

    /// Returns the capitalized display name.
    pub const fn title(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }

    /// Returns the single-character CPN abbreviation for an unshaded mark.
    pub const fn cpn_char(self) -> char {
        match self {
            Player::Red => 'r',
            Player::Blue => 'b',
        }
    }

    /// Parses a player from its single-character CPN abbreviation.
    pub fn from_cpn_char(c: char) -> Option<Player> {
        match c {
            'r' => Some(Player::Red),
            'b' => Some(Player::Blue),
            _ => None,
        }
    }
}

/// The contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { owner: Player, shaded: bool },
}

impl Cell {
    /// Returns the owning player, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { owner, .. } => Some(owner),
        }
    }

    /// True if the cell holds a mark that already counted toward a claim.
    pub const fn is_shaded(self) -> bool {
        matches!(self, Cell::Occupied { shaded: true, .. })
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the CPN character: `.` empty, lowercase unshaded, uppercase shaded.
    pub fn cpn_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied { owner, shaded } => {
                let c = owner.cpn_char();
                if shaded {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            }
        }
    }

    /// Parses a cell from its CPN character.
    pub fn from_cpn_char(c: char) -> Option<Cell> {
        if c == '.' {
            return Some(Cell::Empty);
        }
        let owner = Player::from_cpn_char(c.to_ascii_lowercase())?;
        Some(Cell::Occupied {
            owner,
            shaded: c.is_ascii_uppercase(),
        })
    }
}

/// A grid coordinate. Ordering is lexicographic by (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    pub const fn new(row: u8, col: u8) -> Self {
        Point { row, col }
    }

    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < GRID_SIZE && (self.col as usize) < GRID_SIZE
    }

    /// Row-major index into the grid's cell array.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Inverse of [`Point::index`].
    #[inline]
    pub const fn from_index(idx: usize) -> Point {
        Point::new((idx / GRID_SIZE) as u8, (idx % GRID_SIZE) as u8)
    }
}

const fn build_all_points() -> [Point; CELL_COUNT] {
    let mut points = [Point::new(0, 0); CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        points[i] = Point::from_index(i);
        i += 1;
    }
    points
}

/// Every grid coordinate in row-major order.
pub const ALL_POINTS: [Point; CELL_COUNT] = build_all_points();
