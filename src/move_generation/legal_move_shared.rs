//! Step and ray helpers shared by the per-piece generators.
//!
//! Every destination is reached through `Square::translate`, so a move can
//! never leave the board or wrap from one side edge to the other.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::chess_move::ChessMove;

/// Single-step movers (knight, king): each offset is taken once, onto an
/// empty square or an enemy-occupied one.
pub fn generate_step_moves(
    board: &Board,
    piece: &Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(row_delta, column_delta) in offsets {
        let Some(to) = piece.square.translate(row_delta, column_delta) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => out.push(ChessMove::simple(*piece, to)),
        }
    }
}

/// Sliders (bishop, rook, queen): each ray runs until the edge or the first
/// occupied square, which is included only when it holds an enemy piece.
pub fn generate_slider_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(row_delta, column_delta) in directions {
        let mut cursor = piece.square;
        while let Some(to) = cursor.translate(row_delta, column_delta) {
            match board.piece_at(to) {
                None => out.push(ChessMove::simple(*piece, to)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(ChessMove::simple(*piece, to));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
