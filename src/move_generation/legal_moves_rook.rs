//! Rook move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut Vec<ChessMove>) {
    generate_slider_moves(board, rook, &ROOK_DIRECTIONS, out);
}
