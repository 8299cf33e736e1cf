//! Pawn move generation.
//!
//! Candidates are tried in the order single advance, double advance, then the
//! two diagonals. Advances and ordinary captures that land on the farthest row
//! expand into one promotion per promotable kind. A diagonal onto an empty
//! square is an en-passant capture when the board's en-passant pawn stands
//! directly beside the mover on that side.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{promotion_row, PROMOTION_KINDS};
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, out: &mut Vec<ChessMove>) {
    let forward = pawn.color.pawn_direction();

    if let Some(to) = pawn.square.translate(forward, 0) {
        if board.is_empty(to) {
            push_advance_or_promotion(pawn, to, out);

            if pawn.first_move {
                if let Some(two_step) = pawn.square.translate(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(ChessMove::pawn_double_step(*pawn, two_step));
                    }
                }
            }
        }
    }

    for column_delta in diagonal_order(pawn.color) {
        let Some(to) = pawn.square.translate(forward, column_delta) else {
            continue;
        };

        match board.piece_at(to) {
            Some(target) => {
                if target.color != pawn.color {
                    push_advance_or_promotion(pawn, to, out);
                }
            }
            None => {
                let Some(victim) = board.en_passant() else {
                    continue;
                };
                if victim.color != pawn.color
                    && pawn.square.translate(0, column_delta) == Some(victim.square)
                {
                    out.push(ChessMove::en_passant(*pawn, to, victim));
                }
            }
        }
    }
}

/// Column deltas of the two diagonals, in generation order. Black's forward
/// offsets are +7 then +9, White's are -7 then -9.
#[inline]
const fn diagonal_order(color: Color) -> [i8; 2] {
    match color {
        Color::Black => [-1, 1],
        Color::White => [1, -1],
    }
}

fn push_advance_or_promotion(pawn: &Piece, to: Square, out: &mut Vec<ChessMove>) {
    if to.row() == promotion_row(pawn.color) {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::promotion(*pawn, to, kind));
        }
    } else {
        out.push(ChessMove::simple(*pawn, to));
    }
}
