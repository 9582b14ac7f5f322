//! Turn sequencing.
//!
//! Each turn has a CLAIM phase followed by a PLACE phase:
//! - Claim -> Place, after claiming the best square (mandatory when one
//!   scores) or finding none. Passing is only allowed when nothing scores.
//! - Place -> Claim for the opponent, unless the grid is now full.
//! - Full grid -> final sweep for Red, then Blue -> game over.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use super::claim::{best_claim, claim_best, sweep_final, Claim};
use crate::board::{Grid, Player, Point};
use crate::geometry::Square;

/// The phase within a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Claim,
    Place,
}

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Claim => "claim",
            Phase::Place => "place",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Tie,
}

impl Outcome {
    /// Strictly higher score wins; equal scores tie.
    pub fn decide(red: u32, blue: u32) -> Outcome {
        if red > blue {
            Outcome::Win(Player::Red)
        } else if blue > red {
            Outcome::Win(Player::Blue)
        } else {
            Outcome::Tie
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Outcome::Win(p) => p.name(),
            Outcome::Tie => "tie",
        }
    }
}

/// Rejected turn actions. The state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("game is over")]
    GameOver,

    #[error("expected {expected} phase, currently {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("cell ({}, {}) is off the grid", .0.row, .0.col)]
    OutOfBounds(Point),

    #[error("cell ({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Point),

    #[error("cannot pass while a square can be claimed")]
    ClaimAvailable,
}

/// Points each player earned in the end-of-game sweep, and the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalTally {
    pub red_sweep: u32,
    pub blue_sweep: u32,
    pub red_score: u32,
    pub blue_score: u32,
    pub outcome: Outcome,
}

/// Complete game state between actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub grid: Grid,
    pub to_move: Player,
    pub phase: Phase,
    /// Cumulative scores indexed by `Player::index`.
    pub scores: [u32; 2],
    /// Set once the board is full and the sweep has run.
    pub outcome: Option<Outcome>,
    /// The square claimed most recently this turn, for highlighting.
    pub last_claim: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// Empty grid, Red to move, claim phase, scores at zero.
    pub fn new() -> Self {
        GameState {
            grid: Grid::empty(),
            to_move: Player::Red,
            phase: Phase::Claim,
            scores: [0, 0],
            outcome: None,
            last_claim: None,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// True if the active player could pass the claim phase right now.
    pub fn can_pass(&self) -> bool {
        !self.is_over()
            && self.phase == Phase::Claim
            && best_claim(self.to_move, &self.grid).is_none()
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        if self.phase != expected {
            return Err(TurnError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Runs the claim phase for the active player and moves to placement.
    ///
    /// Returns the claim made, or None if nothing could be scored.
    pub fn claim(&mut self) -> Result<Option<Claim>, TurnError> {
        self.expect_phase(Phase::Claim)?;
        let claim = claim_best(self.to_move, &mut self.grid);
        if let Some(c) = &claim {
            self.scores[self.to_move.index()] += c.points;
            self.last_claim = Some(c.square);
        }
        self.phase = Phase::Place;
        Ok(claim)
    }

    /// Skips the claim phase. Only legal when no square would score.
    pub fn pass(&mut self) -> Result<(), TurnError> {
        self.expect_phase(Phase::Claim)?;
        if best_claim(self.to_move, &self.grid).is_some() {
            return Err(TurnError::ClaimAvailable);
        }
        self.phase = Phase::Place;
        Ok(())
    }

    /// Places a mark for the active player.
    ///
    /// Returns the final tally if this placement filled the grid.
    pub fn place(&mut self, point: Point) -> Result<Option<FinalTally>, TurnError> {
        self.expect_phase(Phase::Place)?;
        if !point.in_bounds() {
            return Err(TurnError::OutOfBounds(point));
        }
        if !self.grid.place(point, self.to_move) {
            return Err(TurnError::Occupied(point));
        }
        debug!(player = self.to_move.name(), row = point.row, col = point.col, "place");
        self.last_claim = None;

        if self.grid.is_full() {
            return Ok(Some(self.finish()));
        }
        self.to_move = self.to_move.opponent();
        self.phase = Phase::Claim;
        Ok(None)
    }

    /// Sweeps Red then Blue and fixes the outcome. Blue's sweep runs on the
    /// grid as Red's sweep left it.
    fn finish(&mut self) -> FinalTally {
        let red = sweep_final(Player::Red, &mut self.grid);
        let blue = sweep_final(Player::Blue, &mut self.grid);
        self.scores[Player::Red.index()] += red.points;
        self.scores[Player::Blue.index()] += blue.points;

        let red_score = self.score(Player::Red);
        let blue_score = self.score(Player::Blue);
        let outcome = Outcome::decide(red_score, blue_score);
        self.outcome = Some(outcome);
        info!(red_score, blue_score, winner = outcome.name(), "game over");

        FinalTally {
            red_sweep: red.points,
            blue_sweep: blue.points,
            red_score,
            blue_score,
            outcome,
        }
    }

    /// One-line human-readable status.
    pub fn status(&self) -> String {
        if self.is_over() {
            return format!(
                "Game Over! Final Scores - Red: {}, Blue: {}",
                self.score(Player::Red),
                self.score(Player::Blue)
            );
        }
        let action = match self.phase {
            Phase::Claim => "Claim Square",
            Phase::Place => "Place Mark",
        };
        format!("{}'s Turn ({})", self.to_move.title(), action)
    }
}
