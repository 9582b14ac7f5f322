//! CPN (Corners Position Notation) encoding and decoding.
//!
//! CPN is a compact single-token notation for a full game position,
//! inspired by chess FEN. It encodes the side to move, phase, scores, and
//! every cell of the grid.
//!
//! Format: `<side><phase>/<red>,<blue>/<row0>/<row1>/.../<row6>`
//!
//! - side: `r` or `b`
//! - phase: `c` (claim), `p` (place), `x` (game over)
//! - cells: `.` empty, `r`/`b` unshaded mark, `R`/`B` shaded mark
//!
//! The initial position is `rc/0,0/......./......./......./......./......./......./.......`.

use crate::board::{Cell, Grid, Player, Point, GRID_SIZE};
use crate::resolve::{GameState, Outcome, Phase};

/// Errors that can occur during CPN parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CpnError {
    #[error("expected {expected} sections separated by '/', got {0}", expected = GRID_SIZE + 2)]
    WrongSectionCount(usize),

    #[error("invalid turn info: '{0}'")]
    InvalidTurnInfo(String),

    #[error("invalid side character: '{0}'")]
    InvalidSide(char),

    #[error("invalid phase character: '{0}'")]
    InvalidPhase(char),

    #[error("invalid scores: '{0}'")]
    InvalidScores(String),

    #[error("row {row} has {len} cells, expected {expected}", expected = GRID_SIZE)]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character '{ch}' in row {row}")]
    InvalidCell { row: usize, ch: char },

    #[error("board is full but the game is not marked over")]
    FullBoardInPlay,

    #[error("game is marked over but the board has empty cells")]
    OverWithEmptyCells,
}

/// Parses the turn info section (e.g. "rc").
fn parse_turn_info(s: &str) -> Result<(Player, Option<Phase>), CpnError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 2 {
        return Err(CpnError::InvalidTurnInfo(s.to_string()));
    }
    let side = Player::from_cpn_char(chars[0]).ok_or(CpnError::InvalidSide(chars[0]))?;
    let phase = match chars[1] {
        'c' => Some(Phase::Claim),
        'p' => Some(Phase::Place),
        'x' => None,
        other => return Err(CpnError::InvalidPhase(other)),
    };
    Ok((side, phase))
}

/// Parses the scores section (e.g. "12,9").
fn parse_scores(s: &str) -> Result<[u32; 2], CpnError> {
    let (red, blue) = s
        .split_once(',')
        .ok_or_else(|| CpnError::InvalidScores(s.to_string()))?;
    let red = red
        .parse()
        .map_err(|_| CpnError::InvalidScores(s.to_string()))?;
    let blue = blue
        .parse()
        .map_err(|_| CpnError::InvalidScores(s.to_string()))?;
    Ok([red, blue])
}

/// Parses one grid row into `grid`.
fn parse_row(row: usize, s: &str, grid: &mut Grid) -> Result<(), CpnError> {
    let len = s.chars().count();
    if len != GRID_SIZE {
        return Err(CpnError::WrongRowLength { row, len });
    }
    for (col, ch) in s.chars().enumerate() {
        let cell = Cell::from_cpn_char(ch).ok_or(CpnError::InvalidCell { row, ch })?;
        grid.cells[Point::new(row as u8, col as u8).index()] = cell;
    }
    Ok(())
}

/// Parses a CPN string into a GameState.
///
/// A position marked over gets its outcome from the scores. The last
/// claimed square is not part of CPN and is always cleared.
pub fn parse_cpn(s: &str) -> Result<GameState, CpnError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != GRID_SIZE + 2 {
        return Err(CpnError::WrongSectionCount(sections.len()));
    }

    let (to_move, phase) = parse_turn_info(sections[0])?;
    let scores = parse_scores(sections[1])?;

    let mut grid = Grid::empty();
    for (row, row_str) in sections[2..].iter().enumerate() {
        parse_row(row, row_str, &mut grid)?;
    }

    let outcome = match phase {
        Some(_) if grid.is_full() => return Err(CpnError::FullBoardInPlay),
        Some(_) => None,
        None if !grid.is_full() => return Err(CpnError::OverWithEmptyCells),
        None => Some(Outcome::decide(scores[0], scores[1])),
    };

    Ok(GameState {
        grid,
        to_move,
        phase: phase.unwrap_or(Phase::Place),
        scores,
        outcome,
        last_claim: None,
    })
}

/// Encodes the grid rows, separated by '/'.
pub fn encode_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
    for row in 0..GRID_SIZE {
        if row > 0 {
            out.push('/');
        }
        for col in 0..GRID_SIZE {
            out.push(grid.get(Point::new(row as u8, col as u8)).cpn_char());
        }
    }
    out
}

/// Encodes a GameState into a CPN string.
pub fn encode_cpn(state: &GameState) -> String {
    let phase = if state.is_over() {
        'x'
    } else {
        match state.phase {
            Phase::Claim => 'c',
            Phase::Place => 'p',
        }
    };
    format!(
        "{}{}/{},{}/{}",
        state.to_move.cpn_char(),
        phase,
        state.scores[0],
        state.scores[1],
        encode_grid(&state.grid)
    )
}
