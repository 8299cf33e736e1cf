//! Move records.
//!
//! A move is plain data: source, destination, the piece being moved and the
//! variant-specific payload. It does not hold the board it was generated
//! from; `make_move` takes that board explicitly, and game history keeps the
//! origin as a `BoardId` in its arena.

use std::fmt;

use crate::errors::BoardResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Any non-special relocation, capturing whatever sits on the destination.
    Simple,
    /// A pawn's two-row first advance; the pawn becomes en-passant eligible.
    PawnDoubleStep,
    /// Diagonal pawn move onto an empty square, capturing `captured` beside it.
    EnPassantCapture { captured: Piece },
    /// Pawn reaching the last row, replaced by `replacement`.
    Promotion { replacement: Piece },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub kind: MoveKind,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl ChessMove {
    #[inline]
    pub const fn simple(piece: Piece, to: Square) -> Self {
        Self {
            kind: MoveKind::Simple,
            from: piece.square,
            to,
            piece,
        }
    }

    #[inline]
    pub const fn pawn_double_step(piece: Piece, to: Square) -> Self {
        Self {
            kind: MoveKind::PawnDoubleStep,
            from: piece.square,
            to,
            piece,
        }
    }

    #[inline]
    pub const fn en_passant(piece: Piece, to: Square, captured: Piece) -> Self {
        Self {
            kind: MoveKind::EnPassantCapture { captured },
            from: piece.square,
            to,
            piece,
        }
    }

    #[inline]
    pub const fn promotion(piece: Piece, to: Square, kind: PieceKind) -> Self {
        let replacement = Piece::with_first_move(kind, piece.color, to, false);
        Self {
            kind: MoveKind::Promotion { replacement },
            from: piece.square,
            to,
            piece,
        }
    }

    /// Produce the board that results from playing this move on `board`.
    /// `board` is left untouched.
    pub fn make_move(&self, board: &Board) -> BoardResult<Board> {
        apply_move(board, self)
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { replacement } => Some(replacement.kind),
            _ => None,
        }
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassantCapture { .. })
    }

    /// Long algebraic form, e.g. `e2e4` or `a7a8q`.
    pub fn to_long_algebraic(&self) -> String {
        match self.promotion_kind() {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.symbol()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}
