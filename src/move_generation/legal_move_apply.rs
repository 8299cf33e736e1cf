//! Board transitions.
//!
//! Applies one move to a board and builds the successor snapshot. The source
//! board is never touched. The side to move on the new board is the opposite
//! of the moved piece's color, and the new board recomputes both sides'
//! moves and check status from scratch.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::{ChessMove, MoveKind};

pub fn apply_move(board: &Board, mv: &ChessMove) -> BoardResult<Board> {
    if board.piece_at(mv.from) != Some(mv.piece) {
        return Err(BoardError::NoPieceOnSource(mv.from));
    }

    let mut squares = *board.squares();
    squares[mv.from.index()] = None;

    let en_passant = match mv.kind {
        MoveKind::Simple => {
            squares[mv.to.index()] = Some(mv.piece.moved_to(mv.to));
            None
        }
        MoveKind::PawnDoubleStep => {
            let moved = mv.piece.moved_to(mv.to);
            squares[mv.to.index()] = Some(moved);
            Some(moved)
        }
        MoveKind::EnPassantCapture { captured } => {
            squares[captured.square.index()] = None;
            squares[mv.to.index()] = Some(mv.piece.moved_to(mv.to));
            None
        }
        MoveKind::Promotion { replacement } => {
            squares[mv.to.index()] = Some(replacement);
            None
        }
    };

    Board::assemble(squares, mv.piece.color.opposite(), Some(*mv), en_passant)
}
