//! Corners engine library.
//!
//! Exposes the board representation, square detection, claim scoring and
//! turn sequencing, placement evaluation and search, and protocol modules
//! for use by integration tests and the binary entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod geometry;
pub mod protocol;
pub mod resolve;
pub mod search;
pub mod selfplay;
