use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rookie_chess::game_state::board::Board;
use rookie_chess::game_state::chess_types::{Color, PieceKind};
use rookie_chess::moves::chess_move::ChessMove;

fn assert_geometry(mv: &ChessMove) {
    let dr = (mv.to.row() as i32 - mv.from.row() as i32).abs();
    let dc = (mv.to.column() as i32 - mv.from.column() as i32).abs();
    assert!(dr + dc > 0, "{mv} does not move");
    match mv.piece.kind {
        PieceKind::Knight => assert!((dr, dc) == (1, 2) || (dr, dc) == (2, 1), "{mv}"),
        PieceKind::King => assert!(dr <= 1 && dc <= 1, "{mv}"),
        PieceKind::Pawn => assert!(dr <= 2 && dc <= 1, "{mv}"),
        PieceKind::Rook => assert!(dr == 0 || dc == 0, "{mv}"),
        PieceKind::Bishop => assert_eq!(dr, dc, "{mv}"),
        PieceKind::Queen => assert!(dr == 0 || dc == 0 || dr == dc, "{mv}"),
    }
}

fn assert_board_invariants(board: &Board) {
    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|p| p.kind == PieceKind::King)
            .count();
        assert_eq!(kings, 1, "{color} king count");
    }
    for piece in board.pieces() {
        assert_eq!(board.piece_at(piece.square), Some(piece));
    }
}

#[test]
fn seeded_random_games_respect_the_rules() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new_game(Color::White);
        let mut piece_count = board.pieces().count();

        for _ in 0..80 {
            for mv in board.all_legal_moves() {
                assert_geometry(mv);
            }

            let safe = board
                .king_safe_moves(board.side_to_move())
                .expect("generation should not fail");
            let Some(mv) = safe.choose(&mut rng) else {
                assert!(board.match_is_over().expect("outcome"));
                break;
            };

            let mover = board.side_to_move();
            let next = mv.make_move(&board).expect("safe move applies");
            assert!(!next.player(mover).is_king_in_check(), "seed {seed}: {mv}");
            assert_eq!(next.side_to_move(), mover.opposite());
            assert_board_invariants(&next);

            let count = next.pieces().count();
            assert!(count <= piece_count);
            piece_count = count;
            board = next;
        }
    }
}
