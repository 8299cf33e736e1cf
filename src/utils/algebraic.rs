//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! squares, where `a8` is index 0 and `h1` is index 63.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> BoardResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(BoardError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardError::InvalidSquare(square.to_owned()));
    }

    let column = file - b'a';
    let row = b'8' - rank;
    Square::from_row_column(row, column).ok_or_else(|| BoardError::InvalidSquare(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
