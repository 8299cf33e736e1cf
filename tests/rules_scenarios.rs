use rookie_chess::game_state::board::{Board, GameOutcome};
use rookie_chess::game_state::chess_types::{Color, PieceKind};
use rookie_chess::moves::chess_move::ChessMove;
use rookie_chess::utils::algebraic::algebraic_to_square;

fn find_move(board: &Board, uci: &str) -> ChessMove {
    *board
        .current_player()
        .legal_moves()
        .iter()
        .find(|mv| mv.to_long_algebraic() == uci)
        .unwrap_or_else(|| panic!("{uci} should be generated"))
}

fn has_move(board: &Board, uci: &str) -> bool {
    board
        .current_player()
        .legal_moves()
        .iter()
        .any(|mv| mv.to_long_algebraic() == uci)
}

fn play(board: &Board, uci: &str) -> Board {
    find_move(board, uci).make_move(board).expect("move should apply")
}

#[test]
fn en_passant_is_available_right_after_the_double_step() {
    let board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen");
    let board = play(&board, "d7d5");

    let capture = find_move(&board, "e5d6");
    assert!(capture.is_en_passant());

    let after = capture.make_move(&board).expect("apply");
    let d5 = algebraic_to_square("d5").expect("d5");
    let d6 = algebraic_to_square("d6").expect("d6");
    assert!(after.piece_at(d5).is_none());
    assert_eq!(after.piece_at(d6).map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(after.pieces_of(Color::Black).count(), 1);
}

#[test]
fn en_passant_is_offered_to_both_flanking_pawns() {
    let board = Board::from_fen("4k3/3p4/8/2P1P3/8/8/8/4K3 b - - 0 1").expect("fen");
    let board = play(&board, "d7d5");

    let from_left = find_move(&board, "c5d6");
    let from_right = find_move(&board, "e5d6");
    assert!(from_left.is_en_passant());
    assert!(from_right.is_en_passant());

    let d5 = algebraic_to_square("d5").expect("d5");
    for capture in [from_left, from_right] {
        let after = capture.make_move(&board).expect("apply");
        assert!(after.piece_at(d5).is_none());
        assert_eq!(after.pieces_of(Color::Black).count(), 1);
    }
}

#[test]
fn en_passant_expires_after_one_move() {
    let board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen");
    let board = play(&board, "d7d5");
    let board = play(&board, "e1e2");
    let board = play(&board, "e8e7");

    assert!(board.en_passant().is_none());
    assert!(!has_move(&board, "e5d6"));
}

#[test]
fn en_passant_needs_an_adjacent_pawn() {
    let board = Board::from_fen("4k3/3p4/8/1P6/8/8/8/4K3 b - - 0 1").expect("fen");
    let board = play(&board, "d7d5");

    let pawn_moves: Vec<String> = board
        .current_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.piece.kind == PieceKind::Pawn)
        .map(|mv| mv.to_long_algebraic())
        .collect();
    assert_eq!(pawn_moves, vec!["b5b6".to_owned()]);
}

#[test]
fn promotion_offers_four_pieces_per_destination() {
    let board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
    let kinds: Vec<PieceKind> = board
        .current_player()
        .legal_moves()
        .iter()
        .filter(|mv| mv.piece.kind == PieceKind::Pawn)
        .filter_map(|mv| mv.promotion_kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight
        ]
    );

    let after = play(&board, "b7b8n");
    let b8 = algebraic_to_square("b8").expect("b8");
    let knight = after.piece_at(b8).expect("promoted piece");
    assert_eq!(knight.kind, PieceKind::Knight);
    assert_eq!(knight.color, Color::White);
}

#[test]
fn back_rank_mate_ends_the_match() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fen");
    assert!(!board.match_is_over().expect("outcome"));

    let mated = play(&board, "a1a8");
    assert!(mated.current_player().is_king_in_check());
    assert!(!mated.is_checkmate_avoidable(Color::Black).expect("checkmate test"));
    assert!(mated.match_is_over().expect("outcome"));
    assert_eq!(
        mated.outcome().expect("outcome"),
        Some(GameOutcome::Checkmate {
            winner: Color::White
        })
    );
    assert!(mated.king_safe_moves(Color::Black).expect("moves").is_empty());
}

#[test]
fn check_that_can_be_blocked_is_not_mate() {
    let board = Board::from_fen("6k1/5ppp/4b3/8/8/8/8/R5K1 w - - 0 1").expect("fen");
    let checked = play(&board, "a1a8");
    assert!(checked.current_player().is_king_in_check());
    assert!(checked.is_checkmate_avoidable(Color::Black).expect("checkmate test"));
    assert!(!checked.match_is_over().expect("outcome"));
}

#[test]
fn starting_position_round_trips_through_fen() {
    let board = Board::new_game(Color::White);
    let fen = board.to_fen();
    assert!(fen.starts_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"));
    assert_eq!(Board::from_fen(&fen).expect("fen"), board);
}
