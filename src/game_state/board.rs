//! Immutable board snapshots.
//!
//! A `Board` is built once and never mutated. Construction partitions the
//! pieces by color, generates the pseudo-legal moves of both sides, locates
//! both kings and records whether each side's king is attacked. Moves that
//! expose the mover's own king are not filtered here; callers ask
//! `apply_if_king_safe`, which is the single king-safety predicate used by
//! checkmate detection, game outcome and search.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::chess_rules::{back_row, pawn_start_row, BACK_RANK, STARTING_POSITION_FEN};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_generator::generate_moves_for_color;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Per-side view of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    king_in_check: bool,
    legal_moves: Vec<ChessMove>,
}

impl Player {
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn is_king_in_check(&self) -> bool {
        self.king_in_check
    }

    /// Pseudo-legal moves: king-exposing moves are still included.
    #[inline]
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    transition: Option<ChessMove>,
    en_passant: Option<Piece>,
    kings: [Square; 2],
    players: [Player; 2],
}

impl Board {
    /// The canonical opening position with `starting_color` to move.
    pub fn new_game(starting_color: Color) -> Self {
        let mut squares = [None; Square::COUNT];
        for color in [Color::Black, Color::White] {
            for column in 0..8u8 {
                for (row, kind) in [
                    (back_row(color), BACK_RANK[usize::from(column)]),
                    (pawn_start_row(color), PieceKind::Pawn),
                ] {
                    if let Some(square) = Square::from_row_column(row, column) {
                        squares[square.index()] = Some(Piece::new(kind, color, square));
                    }
                }
            }
        }

        match Self::assemble(squares, starting_color, None, None) {
            Ok(board) => board,
            Err(err) => unreachable!("starting layout always holds both kings: {err}"),
        }
    }

    /// Rebuild a board from an explicit set of pieces.
    ///
    /// Fails if two pieces share a square, if a color does not have exactly
    /// one king, or if `en_passant` is not a pawn standing on the board.
    pub fn from_pieces(
        pieces: impl IntoIterator<Item = Piece>,
        side_to_move: Color,
        transition: Option<ChessMove>,
        en_passant: Option<Piece>,
    ) -> BoardResult<Self> {
        let mut squares = [None; Square::COUNT];
        for piece in pieces {
            let slot = &mut squares[piece.square.index()];
            if slot.is_some() {
                return Err(BoardError::SquareOccupiedTwice(piece.square));
            }
            *slot = Some(piece);
        }

        if let Some(pawn) = en_passant {
            if pawn.kind != PieceKind::Pawn || squares[pawn.square.index()] != Some(pawn) {
                return Err(BoardError::InvalidEnPassant(pawn.square));
            }
        }

        Self::assemble(squares, side_to_move, transition, en_passant)
    }

    pub fn from_fen(fen: &str) -> BoardResult<Self> {
        parse_fen(fen)
    }

    pub fn starting_position() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(board) => board,
            Err(err) => unreachable!("starting FEN should always parse: {err}"),
        }
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Shared constructor. `squares` must already be consistent: each piece
    /// sits at the index of its own square.
    pub(crate) fn assemble(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        transition: Option<ChessMove>,
        en_passant: Option<Piece>,
    ) -> BoardResult<Self> {
        let kings = [
            locate_king(&squares, Color::White)?,
            locate_king(&squares, Color::Black)?,
        ];

        let mut board = Self {
            squares,
            side_to_move,
            transition,
            en_passant,
            kings,
            players: [empty_player(Color::White), empty_player(Color::Black)],
        };

        let white_moves = generate_moves_for_color(&board, Color::White);
        let black_moves = generate_moves_for_color(&board, Color::Black);

        let white_in_check = is_targeted(&black_moves, kings[Color::White.index()]);
        let black_in_check = is_targeted(&white_moves, kings[Color::Black.index()]);

        board.players = [
            Player {
                color: Color::White,
                king_in_check: white_in_check,
                legal_moves: white_moves,
            },
            Player {
                color: Color::Black,
                king_in_check: black_in_check,
                legal_moves: black_moves,
            },
        ];

        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub(crate) fn squares(&self) -> &[Option<Piece>; Square::COUNT] {
        &self.squares
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// All pieces in square order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The move that produced this board; `None` for an initial position.
    #[inline]
    pub fn transition(&self) -> Option<&ChessMove> {
        self.transition.as_ref()
    }

    /// The pawn that may be captured en passant on this turn.
    #[inline]
    pub fn en_passant(&self) -> Option<Piece> {
        self.en_passant
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move)
    }

    #[inline]
    pub fn opponent_player(&self) -> &Player {
        self.player(self.side_to_move.opposite())
    }

    #[inline]
    pub fn legal_moves(&self, color: Color) -> &[ChessMove] {
        self.player(color).legal_moves()
    }

    /// Moves of both colors, White first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &ChessMove> + '_ {
        self.players.iter().flat_map(|player| player.legal_moves.iter())
    }

    /// Apply `mv` and return the resulting board, unless the move leaves the
    /// mover's own king in check.
    pub fn apply_if_king_safe(&self, mv: &ChessMove) -> BoardResult<Option<Board>> {
        let next = mv.make_move(self)?;
        if next.player(mv.piece.color).is_king_in_check() {
            return Ok(None);
        }
        Ok(Some(next))
    }

    /// Moves of `color` that do not leave its king in check, in generation order.
    pub fn king_safe_moves(&self, color: Color) -> BoardResult<Vec<ChessMove>> {
        let mut safe = Vec::new();
        for mv in self.legal_moves(color) {
            if self.apply_if_king_safe(mv)?.is_some() {
                safe.push(*mv);
            }
        }
        Ok(safe)
    }

    fn has_king_safe_move(&self, color: Color) -> BoardResult<bool> {
        for mv in self.legal_moves(color) {
            if self.apply_if_king_safe(mv)?.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `false` only when `color` is in check and every one of its moves keeps
    /// the king in check. A king that is not in check is trivially `true`.
    pub fn is_checkmate_avoidable(&self, color: Color) -> BoardResult<bool> {
        if !self.player(color).is_king_in_check() {
            return Ok(true);
        }
        self.has_king_safe_move(color)
    }

    /// Checkmate or stalemate for the side to move, if either applies.
    pub fn outcome(&self) -> BoardResult<Option<GameOutcome>> {
        let color = self.side_to_move;
        if self.has_king_safe_move(color)? {
            return Ok(None);
        }
        if self.current_player().is_king_in_check() {
            Ok(Some(GameOutcome::Checkmate {
                winner: color.opposite(),
            }))
        } else {
            Ok(Some(GameOutcome::Stalemate))
        }
    }

    pub fn match_is_over(&self) -> BoardResult<bool> {
        Ok(self.outcome()?.is_some())
    }
}

impl PartialEq for Board {
    /// Position equality; the producing move is history, not position.
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.en_passant == other.en_passant
    }
}

impl Eq for Board {}

fn empty_player(color: Color) -> Player {
    Player {
        color,
        king_in_check: false,
        legal_moves: Vec::new(),
    }
}

fn locate_king(squares: &[Option<Piece>; Square::COUNT], color: Color) -> BoardResult<Square> {
    let mut kings = squares
        .iter()
        .flatten()
        .filter(|piece| piece.kind == PieceKind::King && piece.color == color);
    let king = kings.next().ok_or(BoardError::MissingKing(color))?;
    if kings.next().is_some() {
        return Err(BoardError::MultipleKings(color));
    }
    Ok(king.square)
}

fn is_targeted(moves: &[ChessMove], square: Square) -> bool {
    moves.iter().any(|mv| mv.to == square)
}
