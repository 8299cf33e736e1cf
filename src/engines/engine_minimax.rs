//! Fixed-depth minimax player.
//!
//! Wraps `search::minimax` behind `ArtificialPlayer` and keeps a running count
//! of the boards it has examined across calls.

use crate::engines::engine_trait::{ArtificialPlayer, Transition};
use crate::errors::{SearchError, SearchResult};
use crate::game_state::board::Board;
use crate::search::board_scoring::Evaluator;
use crate::search::minimax::{minimax, SearchConfig};
use crate::search::search_observer::{SearchObserver, SilentObserver};

pub struct MiniMaxPlayer<E> {
    config: SearchConfig,
    evaluator: E,
    observer: Box<dyn SearchObserver + Send>,
    examined_boards: u64,
}

impl<E: Evaluator> MiniMaxPlayer<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config: SearchConfig::new(config.depth),
            evaluator,
            observer: Box::new(SilentObserver),
            examined_boards: 0,
        }
    }

    pub fn with_observer(mut self, observer: impl SearchObserver + Send + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Leaf boards evaluated over every `play` call so far.
    #[inline]
    pub fn examined_boards(&self) -> u64 {
        self.examined_boards
    }
}

impl<E: Evaluator + Send> ArtificialPlayer for MiniMaxPlayer<E> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn play<'a>(&mut self, board: &'a Board) -> SearchResult<Transition<'a>> {
        let outcome = minimax(board, &self.evaluator, self.config, self.observer.as_mut())?;
        self.examined_boards += outcome.stats.examined_boards;

        let Some(chess_move) = outcome.best.chess_move else {
            return Err(SearchError::MatchIsOver);
        };
        let to_board = chess_move.make_move(board)?;

        Ok(Transition {
            from_board: board,
            to_board,
            chess_move,
            score: outcome.best.score,
        })
    }
}
