//! Fixed-depth minimax search.
//!
//! White maximizes and Black minimizes, alternating strictly by ply. Every
//! node expands the side to move's moves in generation order, skipping moves
//! that leave the mover's king in check. A node is a leaf when the remaining
//! depth is zero or the match is over; leaves are scored by the evaluator.
//! Among equal scores the first move found is kept.
//!
//! There is no pruning: work grows as (moves per position)^depth, and the
//! depth chosen by the caller is the only bound.

use std::time::Instant;

use crate::errors::{SearchError, SearchResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::Evaluator;
use crate::search::search_observer::{SearchObserver, SearchStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl SearchConfig {
    /// Depth is clamped to at least one ply.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

/// A score and the move that achieves it. Leaves carry no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub score: i32,
    pub chess_move: Option<ChessMove>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: ScoredMove,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Role::Maximizer,
            Color::Black => Role::Minimizer,
        }
    }

    const fn other(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    const fn sentinel(self) -> i32 {
        match self {
            Role::Maximizer => i32::MIN,
            Role::Minimizer => i32::MAX,
        }
    }

    const fn improves(self, candidate: i32, best: i32) -> bool {
        match self {
            Role::Maximizer => candidate > best,
            Role::Minimizer => candidate < best,
        }
    }
}

/// Search `board` to `config.depth` plies and return the best move for the
/// side to move.
///
/// Fails with `SearchError::MatchIsOver` when the side to move has no
/// king-safe move.
pub fn minimax<E: Evaluator + ?Sized>(
    board: &Board,
    evaluator: &E,
    config: SearchConfig,
    observer: &mut dyn SearchObserver,
) -> SearchResult<SearchOutcome> {
    if board.match_is_over()? {
        return Err(SearchError::MatchIsOver);
    }

    let depth = config.depth.max(1);
    observer.search_started(board.side_to_move(), depth, evaluator.name());

    let started = Instant::now();
    let mut search = Minimax {
        evaluator,
        observer: &mut *observer,
        root_depth: depth,
        examined_boards: 0,
    };
    let best = search.expand(board, depth, Role::for_color(board.side_to_move()))?;
    let stats = SearchStats {
        examined_boards: search.examined_boards,
        elapsed: started.elapsed(),
    };

    observer.search_finished(&best, &stats);

    if best.chess_move.is_none() {
        return Err(SearchError::MatchIsOver);
    }
    Ok(SearchOutcome { best, stats })
}

struct Minimax<'a, E: ?Sized> {
    evaluator: &'a E,
    observer: &'a mut dyn SearchObserver,
    root_depth: u8,
    examined_boards: u64,
}

impl<E: Evaluator + ?Sized> Minimax<'_, E> {
    fn expand(&mut self, board: &Board, depth: u8, role: Role) -> SearchResult<ScoredMove> {
        if depth == 0 || board.match_is_over()? {
            self.examined_boards += 1;
            return Ok(ScoredMove {
                score: self.evaluator.evaluate(board),
                chess_move: None,
            });
        }

        let mut best = ScoredMove {
            score: role.sentinel(),
            chess_move: None,
        };

        for mv in board.current_player().legal_moves() {
            if depth == self.root_depth {
                self.observer.root_move_analyzed(mv);
            }

            let Some(next) = board.apply_if_king_safe(mv)? else {
                continue;
            };

            let reply = self.expand(&next, depth - 1, role.other())?;
            if best.chess_move.is_none() || role.improves(reply.score, best.score) {
                best = ScoredMove {
                    score: reply.score,
                    chess_move: Some(*mv),
                };
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::{minimax, SearchConfig};
    use crate::errors::SearchError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::search::board_scoring::{Evaluator, MaterialEvaluator};
    use crate::search::search_observer::{RecordingObserver, SilentObserver};

    /// Scores every position the same, so the first king-safe move wins.
    struct FlatEvaluator;

    impl Evaluator for FlatEvaluator {
        fn evaluate(&self, _board: &Board) -> i32 {
            0
        }
    }

    #[test]
    fn depth_one_picks_first_move_on_ties() {
        let board = Board::new_game(Color::White);
        let outcome = minimax(&board, &FlatEvaluator, SearchConfig::new(1), &mut SilentObserver)
            .expect("search should run");
        assert_eq!(outcome.best.chess_move, Some(board.legal_moves(Color::White)[0]));
        assert_eq!(outcome.stats.examined_boards, 20);
    }

    #[test]
    fn white_takes_the_hanging_queen() {
        let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("fen");
        let outcome = minimax(&board, &MaterialEvaluator, SearchConfig::new(1), &mut SilentObserver)
            .expect("search should run");
        let mv = outcome.best.chess_move.expect("a move");
        assert_eq!(mv.to_long_algebraic(), "d1d5");
        assert_eq!(outcome.best.score, 500);
    }

    #[test]
    fn black_minimizes() {
        let board = Board::from_fen("3rk3/8/8/3Q4/8/8/8/4K3 b - - 0 1").expect("fen");
        let outcome = minimax(&board, &MaterialEvaluator, SearchConfig::new(1), &mut SilentObserver)
            .expect("search should run");
        assert_eq!(
            outcome.best.chess_move.map(|mv| mv.to_long_algebraic()),
            Some("d8d5".to_owned())
        );
        assert_eq!(outcome.best.score, -500);
    }

    #[test]
    fn depth_two_sees_the_recapture() {
        // Taking the defended pawn loses the queen for a pawn.
        let board = Board::from_fen("4k3/2p5/3p4/8/8/8/8/3QK3 w - - 0 1").expect("fen");
        let outcome = minimax(&board, &MaterialEvaluator, SearchConfig::new(2), &mut SilentObserver)
            .expect("search should run");
        let mv = outcome.best.chess_move.expect("a move");
        assert_ne!(mv.to_long_algebraic(), "d1d6");
        assert_eq!(outcome.best.score, 700);
    }

    #[test]
    fn search_never_returns_a_king_exposing_move() {
        // The rook on e2 is pinned by the rook on e8; taking the queen on h2
        // would expose the king, so the best legal gain is the rook on e8.
        let board = Board::from_fen("4r2k/8/8/8/8/8/4R2q/4K3 w - - 0 1").expect("fen");
        let outcome = minimax(&board, &MaterialEvaluator, SearchConfig::new(1), &mut SilentObserver)
            .expect("search should run");
        let mv = outcome.best.chess_move.expect("a move");
        assert_eq!(mv.to_long_algebraic(), "e2e8");
        assert_eq!(mv.piece.kind, PieceKind::Rook);
        assert_eq!(outcome.best.score, -400);
        let next = mv.make_move(&board).expect("apply");
        assert!(!next.player(Color::White).is_king_in_check());
    }

    #[test]
    fn finished_match_is_a_checked_precondition() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fen");
        let err = minimax(&board, &MaterialEvaluator, SearchConfig::new(2), &mut SilentObserver)
            .expect_err("checkmated side cannot search");
        assert_eq!(err, SearchError::MatchIsOver);
    }

    #[test]
    fn observer_sees_every_root_candidate() {
        let board = Board::new_game(Color::White);
        let mut observer = RecordingObserver::default();
        let outcome = minimax(&board, &MaterialEvaluator, SearchConfig::new(2), &mut observer)
            .expect("search should run");
        assert_eq!(observer.started, vec![(Color::White, 2)]);
        assert_eq!(observer.root_moves.len(), 20);
        assert_eq!(observer.finished.len(), 1);
        assert_eq!(observer.finished[0].0, outcome.best);
        assert_eq!(outcome.stats.examined_boards, 400);
    }

    #[test]
    fn zero_depth_is_clamped_to_one_ply() {
        assert_eq!(SearchConfig::new(0).depth, 1);
        assert_eq!(SearchConfig::default().depth, 3);
    }
}
