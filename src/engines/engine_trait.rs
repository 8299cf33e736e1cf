//! Player abstraction for searching engines.
//!
//! A player receives a board and answers with the transition it wants to
//! play. Different strategies can sit behind the same trait and be chosen at
//! runtime.

use crate::errors::SearchResult;
use crate::game_state::board::Board;
use crate::moves::chess_move::ChessMove;

/// One played move: where it started, where it led, and how it was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<'a> {
    pub from_board: &'a Board,
    pub to_board: Board,
    pub chess_move: ChessMove,
    pub score: i32,
}

pub trait ArtificialPlayer: Send {
    fn name(&self) -> &str {
        "player"
    }

    /// Choose a move for the side to move on `board`.
    ///
    /// Fails with `SearchError::MatchIsOver` when there is nothing to play.
    fn play<'a>(&mut self, board: &'a Board) -> SearchResult<Transition<'a>>;
}
