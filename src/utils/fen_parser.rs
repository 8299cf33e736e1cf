//! FEN-to-Board parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. The castling field
//! is validated and otherwise ignored. The en-passant target is mapped to the
//! pawn that just advanced two rows. A piece is treated as never having moved
//! when it stands on its home square.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_home_square;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> BoardResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    // Clocks are optional and unused, but must be numeric when present.
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid move clock '{clock}'")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let pieces = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    validate_castling(castling_part)?;
    let en_passant = parse_en_passant(en_passant_part, side_to_move, &pieces)?;

    Board::from_pieces(pieces, side_to_move, None, en_passant)
}

fn invalid(reason: &str) -> BoardError {
    BoardError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> BoardResult<Vec<Piece>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::with_capacity(32);
    for (row, rank_str) in (0u8..).zip(ranks) {
        let mut column = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                column += empty_count as u8;
                if column > 8 {
                    return Err(invalid("rank has too many files"));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let square = Square::from_row_column(row, column)
                .ok_or_else(|| invalid("rank has too many files"))?;

            pieces.push(Piece::with_first_move(
                kind,
                color,
                square,
                is_home_square(kind, color, square),
            ));
            column += 1;
        }

        if column != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(pieces)
}

fn parse_side_to_move(side_part: &str) -> BoardResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field '{side_part}'"))),
    }
}

fn validate_castling(castling_part: &str) -> BoardResult<()> {
    if castling_part == "-" {
        return Ok(());
    }
    match castling_part.chars().find(|ch| !"KQkq".contains(*ch)) {
        Some(ch) => Err(invalid(&format!("invalid castling character '{ch}'"))),
        None => Ok(()),
    }
}

/// The target square lies behind the pawn that double-stepped, so the pawn
/// sits one row further along its owner's direction of travel.
fn parse_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
    pieces: &[Piece],
) -> BoardResult<Option<Piece>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let owner = side_to_move.opposite();
    let pawn_square = target
        .translate(owner.pawn_direction(), 0)
        .ok_or_else(|| invalid(&format!("en-passant target '{en_passant_part}' on edge")))?;

    pieces
        .iter()
        .find(|piece| {
            piece.square == pawn_square && piece.kind == PieceKind::Pawn && piece.color == owner
        })
        .copied()
        .map(Some)
        .ok_or(BoardError::InvalidEnPassant(pawn_square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
