//! Per-color move generation.
//!
//! Dispatches each piece to its kind's generator. Pieces are visited in
//! square order and each generator emits in its own offset order; the
//! resulting sequence is the tie-break order used by search.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

impl Piece {
    /// Moves this piece can make on `board`, without king-safety filtering.
    pub fn legal_moves(&self, board: &Board) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(28);
        generate_piece_moves(board, self, &mut out);
        out
    }
}

pub fn generate_piece_moves(board: &Board, piece: &Piece, out: &mut Vec<ChessMove>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, piece, out),
        PieceKind::Knight => generate_knight_moves(board, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, piece, out),
        PieceKind::Rook => generate_rook_moves(board, piece, out),
        PieceKind::Queen => generate_queen_moves(board, piece, out),
        PieceKind::King => generate_king_moves(board, piece, out),
    }
}

pub fn generate_moves_for_color(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for piece in board.pieces_of(color) {
        generate_piece_moves(board, &piece, &mut out);
    }
    out
}
