//! Board-to-FEN generator.
//!
//! Writes the placement, side to move and en-passant target of a board.
//! Castling and move clocks are not tracked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Render the position as FEN. Castling rights are not tracked and always
/// print as `-`; clocks print as `0 1`.
pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} - {} 0 1",
        generate_board_field(board),
        side_to_move,
        generate_en_passant_field(board)
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for column in 0..8u8 {
            let piece = Square::from_row_column(row, column).and_then(|sq| board.piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.symbol());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_en_passant_field(board: &Board) -> String {
    let Some(pawn) = board.en_passant() else {
        return "-".to_owned();
    };

    // The target is the square the pawn skipped over.
    pawn.square
        .translate(-pawn.color.pawn_direction(), 0)
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_owned())
}
