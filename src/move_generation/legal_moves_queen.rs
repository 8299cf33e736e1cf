//! Queen move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::QUEEN_DIRECTIONS;
use crate::game_state::chess_types::Piece;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_queen_moves(board: &Board, queen: &Piece, out: &mut Vec<ChessMove>) {
    generate_slider_moves(board, queen, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn lone_queen_in_centre_sees_twenty_seven_squares() {
        let board = Board::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("fen");
        let d4 = algebraic_to_square("d4").expect("d4");
        let queen = board.piece_at(d4).expect("queen on d4");
        let mut out = Vec::new();
        generate_queen_moves(&board, &queen, &mut out);
        assert_eq!(out.len(), 27);
    }
}
