//! Errors used throughout the engine.
//!
//! `BoardError` covers malformed positions and move application failures.
//! `SearchError` covers caller-contract violations of the search engine and
//! wraps any board error raised while expanding the tree. Nothing in the crate
//! recovers from these internally; they are surfaced to the caller as soon as
//! they are detected.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A board must hold exactly one king per color.
    #[error("board has no {0} king")]
    MissingKing(Color),

    #[error("board has more than one {0} king")]
    MultipleKings(Color),

    /// Two pieces were placed on the same square.
    #[error("square {0} is occupied twice")]
    SquareOccupiedTwice(Square),

    /// A move referenced a source square that does not hold the moving piece.
    #[error("no matching piece on source square {0}")]
    NoPieceOnSource(Square),

    /// The en-passant candidate is not a pawn standing on the board.
    #[error("no en-passant pawn on {0}")]
    InvalidEnPassant(Square),

    /// The move would leave the mover's king, standing on this square, in check.
    #[error("move leaves the king on {0} in check")]
    KingLeftInCheck(Square),

    /// A transition was recorded against a board other than the newest one.
    #[error("transition does not start from the current board")]
    StaleTransition,

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Search was invoked on a position that is already checkmate or stalemate.
    #[error("search requested on a finished match")]
    MatchIsOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type BoardResult<T> = Result<T, BoardError>;
pub type SearchResult<T> = Result<T, SearchError>;
