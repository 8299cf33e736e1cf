//! Board history arena.
//!
//! Boards played in a game are owned here, addressed by `BoardId`. Each entry
//! remembers the id of the board it was reached from, so a move's origin is
//! an index into this list rather than a live reference held by the move.

use crate::engines::engine_trait::Transition;
use crate::errors::{BoardError, BoardResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardId(usize);

impl BoardId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    board: Board,
    parent: Option<BoardId>,
}

#[derive(Debug, Clone)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    pub fn new(initial: Board) -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: initial,
                parent: None,
            }],
        }
    }

    #[inline]
    pub fn current_id(&self) -> BoardId {
        BoardId(self.entries.len() - 1)
    }

    #[inline]
    pub fn current(&self) -> &Board {
        &self.entries[self.entries.len() - 1].board
    }

    pub fn get(&self, id: BoardId) -> Option<&Board> {
        self.entries.get(id.0).map(|entry| &entry.board)
    }

    /// The board `id` was reached from; `None` for the initial board.
    pub fn parent_of(&self, id: BoardId) -> Option<BoardId> {
        self.entries.get(id.0).and_then(|entry| entry.parent)
    }

    /// The move that led to `id`, together with the id of its origin board.
    pub fn move_into(&self, id: BoardId) -> Option<(BoardId, &ChessMove)> {
        let entry = self.entries.get(id.0)?;
        Some((entry.parent?, entry.board.transition()?))
    }

    /// Append the resulting board of a transition.
    ///
    /// The transition must start from the current board; anything else would
    /// link the new board to the wrong parent.
    pub fn record(&mut self, transition: Transition<'_>) -> BoardResult<BoardId> {
        if transition.from_board != self.current() {
            return Err(BoardError::StaleTransition);
        }
        Ok(self.push(transition.to_board))
    }

    /// Play `mv` on the current board and append the result.
    ///
    /// Fails with `KingLeftInCheck` if the move exposes the mover's own king;
    /// the history is left unchanged.
    pub fn play(&mut self, mv: &ChessMove) -> BoardResult<BoardId> {
        let king = self.current().king_square(mv.piece.color);
        match self.current().apply_if_king_safe(mv)? {
            Some(next) => Ok(self.push(next)),
            None => Err(BoardError::KingLeftInCheck(king)),
        }
    }

    fn push(&mut self, board: Board) -> BoardId {
        let parent = self.current_id();
        self.entries.push(HistoryEntry {
            board,
            parent: Some(parent),
        });
        self.current_id()
    }

    /// Drop the newest board. The initial board is never removed.
    pub fn undo(&mut self) -> Option<Board> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop().map(|entry| entry.board)
    }

    /// Boards held, the initial board included, so this is always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the history holds at least its initial board. Kept
    /// alongside `len` so the type reads like any other collection.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &ChessMove> + '_ {
        self.entries.iter().filter_map(|entry| entry.board.transition())
    }
}
