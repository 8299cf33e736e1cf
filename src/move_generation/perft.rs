//! Perft node counting.
//!
//! Walks every king-safe move sequence to a fixed depth and tallies the leaf
//! moves. Counts for the standard test positions are well known, so this is
//! the main correctness check for move generation and application.

use crate::errors::BoardResult;
use crate::game_state::board::Board;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, before: &Board, mv: &ChessMove, after: &Board) {
        self.nodes += 1;
        if mv.is_en_passant() {
            self.en_passant += 1;
            self.captures += 1;
        } else if before.piece_at(mv.to).is_some() {
            self.captures += 1;
        }
        if mv.promotion_kind().is_some() {
            self.promotions += 1;
        }
        if after.current_player().is_king_in_check() {
            self.checks += 1;
        }
    }
}

pub fn perft(board: &Board, depth: u8) -> BoardResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(board, depth, &mut total)?;
    Ok(total)
}

/// Leaf node count per root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> BoardResult<Vec<(ChessMove, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in board.current_player().legal_moves() {
        let Some(next) = board.apply_if_king_safe(mv)? else {
            continue;
        };
        let nodes = perft(&next, depth - 1)?.nodes;
        out.push((*mv, nodes));
    }
    Ok(out)
}

fn perft_recurse(board: &Board, depth: u8, counts: &mut PerftCounts) -> BoardResult<()> {
    for mv in board.current_player().legal_moves() {
        let Some(next) = board.apply_if_king_safe(mv)? else {
            continue;
        };
        if depth == 1 {
            counts.record_leaf(board, mv, &next);
        } else {
            perft_recurse(&next, depth - 1, counts)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let board = Board::new_game(Color::White);
        let counts = perft(&board, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn startpos_node_counts() {
        let board = Board::new_game(Color::White);
        let expected = [20, 400, 8902];
        for (depth, nodes) in expected.into_iter().enumerate() {
            let counts = perft(&board, depth as u8 + 1).expect("perft should run");
            assert_eq!(counts.nodes, nodes, "depth {}", depth + 1);
        }
    }

    #[test]
    fn startpos_depth_three_leaf_metrics() {
        let board = Board::new_game(Color::White);
        let counts = perft(&board, 3).expect("perft should run");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 12);
    }

    #[test]
    fn position_three_node_counts() {
        let board = Board::from_fen(POSITION_3).expect("fen");
        assert_eq!(perft(&board, 1).expect("perft").nodes, 14);
        let counts = perft(&board, 2).expect("perft");
        assert_eq!(counts.nodes, 191);
        assert_eq!(counts.captures, 14);
        assert_eq!(counts.checks, 10);
        assert_eq!(perft(&board, 3).expect("perft").nodes, 2812);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::new_game(Color::White);
        let divided = perft_divide(&board, 2).expect("divide");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        let total: usize = divided.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, 400);
    }
}
