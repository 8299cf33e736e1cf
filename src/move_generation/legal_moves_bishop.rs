//! Bishop move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut Vec<ChessMove>) {
    generate_slider_moves(board, bishop, &BISHOP_DIRECTIONS, out);
}
