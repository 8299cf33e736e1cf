//! King move generation.
//!
//! Only the eight adjacent squares are produced. Whether a destination is
//! attacked is decided later by applying the move and inspecting the new
//! board's check status.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_king_moves(board: &Board, king: &Piece, out: &mut Vec<ChessMove>) {
    generate_step_moves(board, king, &KING_OFFSETS, out);
}
