//! Search progress hooks.
//!
//! The search core never prints. Callers that want progress reporting pass
//! an observer; `TracingObserver` forwards the hooks to `tracing` events.

use std::time::Duration;

use crate::game_state::chess_types::Color;
use crate::moves::chess_move::ChessMove;
use crate::search::minimax::ScoredMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Leaf positions handed to the evaluator.
    pub examined_boards: u64,
    pub elapsed: Duration,
}

pub trait SearchObserver {
    fn search_started(&mut self, _color: Color, _depth: u8, _evaluator: &str) {}

    /// Called once per root candidate, before it is applied.
    fn root_move_analyzed(&mut self, _mv: &ChessMove) {}

    fn search_finished(&mut self, _best: &ScoredMove, _stats: &SearchStats) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn search_started(&mut self, color: Color, depth: u8, evaluator: &str) {
        tracing::info!(%color, depth, evaluator, "minimax search starting");
    }

    fn root_move_analyzed(&mut self, mv: &ChessMove) {
        tracing::debug!(candidate = %mv, "analyzing root move");
    }

    fn search_finished(&mut self, best: &ScoredMove, stats: &SearchStats) {
        let best_move = best
            .chess_move
            .map(|mv| mv.to_long_algebraic())
            .unwrap_or_else(|| "none".to_owned());
        tracing::info!(
            best_move = %best_move,
            score = best.score,
            examined_boards = stats.examined_boards,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "minimax search finished"
        );
    }
}

/// Records every hook call; handy for asserting on search progress.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub started: Vec<(Color, u8)>,
    pub root_moves: Vec<ChessMove>,
    pub finished: Vec<(ScoredMove, SearchStats)>,
}

impl SearchObserver for RecordingObserver {
    fn search_started(&mut self, color: Color, depth: u8, _evaluator: &str) {
        self.started.push((color, depth));
    }

    fn root_move_analyzed(&mut self, mv: &ChessMove) {
        self.root_moves.push(*mv);
    }

    fn search_finished(&mut self, best: &ScoredMove, stats: &SearchStats) {
        self.finished.push((*best, *stats));
    }
}
