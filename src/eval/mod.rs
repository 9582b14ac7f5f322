//! Placement evaluation.
//!
//! Scores a candidate placement from the mover's perspective, considering
//! claimable squares, blocking, and board position.

pub(crate) mod heuristic;

pub use heuristic::{
    positional_weight, score_placement, MoveScore, BLOCK_BONUS, CLAIM_WEIGHT, MULTI_SQUARE_CAP,
    POSITIONAL_WEIGHTS,
};
