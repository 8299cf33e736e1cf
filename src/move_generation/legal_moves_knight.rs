//! Knight move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut Vec<ChessMove>) {
    generate_step_moves(board, knight, &KNIGHT_OFFSETS, out);
}
