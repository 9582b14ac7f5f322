//! CUI protocol handling.
//!
//! This module implements parsing and serialization for the CUI (Corners
//! Universal Interface) protocol, including CPN position encoding, point
//! and square notation, and the command parser for the main loop.

pub mod cpn;
pub mod notation;
pub mod parser;

pub use cpn::{encode_cpn, encode_grid, parse_cpn, CpnError};
pub use notation::{format_point, format_square, parse_point, NotationError};
pub use parser::{parse_command, Command};
