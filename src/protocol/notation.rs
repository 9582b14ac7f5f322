//! Point and square notation.
//!
//! Points are written as a column letter `a`-`g` followed by a row number
//! `1`-`7`, so `a1` is row 0, column 0 and `d4` is the center. Squares are
//! written as their four canonical corners separated by spaces.

use thiserror::Error;

use crate::board::Point;
use crate::geometry::Square;

/// Errors from parsing point notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid point: '{0}'")]
    InvalidPoint(String),
}

/// Formats a point, e.g. `d4`.
pub fn format_point(point: Point) -> String {
    format!("{}{}", (b'a' + point.col) as char, point.row + 1)
}

/// Parses a point such as `d4`. Case-insensitive on the column letter.
///
/// Any letter `a`-`z` and row from 1 up is accepted, so `h1` or `a9` parse to
/// points off the grid. Bounds are checked when the point is played.
pub fn parse_point(s: &str) -> Result<Point, NotationError> {
    let err = || NotationError::InvalidPoint(s.to_string());
    let mut chars = s.trim().chars();
    let col_char = chars.next().ok_or_else(err)?.to_ascii_lowercase();
    if !col_char.is_ascii_lowercase() {
        return Err(err());
    }
    let row = chars
        .as_str()
        .parse::<u8>()
        .ok()
        .and_then(|r| r.checked_sub(1))
        .ok_or_else(err)?;
    Ok(Point::new(row, col_char as u8 - b'a'))
}

/// Formats a square as its four canonical corners, e.g. `a1 b1 a2 b2`.
pub fn format_square(square: &Square) -> String {
    square
        .points()
        .iter()
        .map(|&p| format_point(p))
        .collect::<Vec<_>>()
        .join(" ")
}
