//! Core value types shared by the board, move generation and search layers.
//!
//! Squares are indexed `0..64` with `0 == a8`, `7 == h8` and `63 == h1`, so
//! row 0 is the eighth rank. Black pawns advance toward higher indices and
//! White pawns toward lower ones.

use std::fmt;

use crate::errors::BoardError;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter for the kind.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A board square, `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Self(row * 8 + column))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Step by a (row, column) delta. Returns `None` when the destination is
    /// off the board, including any step that would wrap across a side edge.
    #[inline]
    pub const fn translate(self, row_delta: i8, column_delta: i8) -> Option<Self> {
        let row = self.row() as i8 + row_delta;
        let column = self.column() as i8 + column_delta;
        if row < 0 || row > 7 || column < 0 || column > 7 {
            return None;
        }
        Some(Self((row * 8 + column) as u8))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.column());
        let rank = char::from(b'8' - self.row());
        write!(f, "{file}{rank}")
    }
}

impl TryFrom<u8> for Square {
    type Error = BoardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or_else(|| BoardError::InvalidSquare(index.to_string()))
    }
}

/// A piece value. Pieces never change in place: a moved piece is a new value
/// with an updated square and a cleared `first_move` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub first_move: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            first_move: true,
        }
    }

    #[inline]
    pub const fn with_first_move(
        kind: PieceKind,
        color: Color,
        square: Square,
        first_move: bool,
    ) -> Self {
        Self {
            kind,
            color,
            square,
            first_move,
        }
    }

    /// The same piece relocated to `square`, marked as having moved.
    #[inline]
    pub const fn moved_to(self, square: Square) -> Self {
        Self {
            square,
            first_move: false,
            ..self
        }
    }

    /// FEN letter, uppercase for White.
    pub const fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.square)
    }
}
