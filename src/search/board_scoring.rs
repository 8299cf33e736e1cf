//! Pluggable board evaluation interfaces and a baseline implementation.
//!
//! Search delegates static scoring to `Evaluator` so heuristics can be
//! swapped without touching the search code. Scores are White-positive:
//! higher favors White, lower favors Black.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};

pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;

    fn name(&self) -> &str {
        "evaluator"
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, board: &Board) -> i32 {
        (**self).evaluate(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Plain material count. Kings carry no value since both are always present.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|piece| {
                let value = Self::piece_value(piece.kind);
                match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                }
            })
            .sum()
    }

    fn name(&self) -> &str {
        "material"
    }
}
