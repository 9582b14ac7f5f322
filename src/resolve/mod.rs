//! Claim resolution and turn sequencing.
//!
//! Applies claims and the end-of-game sweep to the grid, and drives the
//! claim/place phases of each turn through to game over.

pub mod claim;
pub mod phase;

pub use claim::{best_claim, claim_best, select_best, sweep_final, Claim, Sweep};
pub use phase::{FinalTally, GameState, Outcome, Phase, TurnError};
