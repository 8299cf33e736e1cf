//! Minimax baseline runner.
//!
//! Usage:
//! `cargo run --release --bin minimax_baseline`
//! `cargo run --release --bin minimax_baseline -- --depth 2`
//!
//! Set `RUST_LOG=rookie_chess=debug` to see every root candidate.

use rookie_chess::game_state::board::Board;
use rookie_chess::search::board_scoring::MaterialEvaluator;
use rookie_chess::search::minimax::{minimax, SearchConfig};
use rookie_chess::search::search_observer::TracingObserver;
use tracing_subscriber::EnvFilter;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn run_case(name: &str, fen: &str, depth: u8) -> Result<(), String> {
    let board = Board::from_fen(fen).map_err(|e| e.to_string())?;
    let outcome = minimax(
        &board,
        &MaterialEvaluator,
        SearchConfig::new(depth),
        &mut TracingObserver,
    )
    .map_err(|e| format!("{name}: {e}"))?;

    let elapsed_ms = outcome.stats.elapsed.as_millis();
    let boards_per_sec = if elapsed_ms == 0 {
        outcome.stats.examined_boards as u128 * 1000
    } else {
        outcome.stats.examined_boards as u128 * 1000 / elapsed_ms
    };
    let best_move = outcome
        .best
        .chess_move
        .map(|mv| mv.to_long_algebraic())
        .unwrap_or_else(|| "none".to_owned());
    println!(
        "{name}: depth={depth} boards={} elapsed_ms={elapsed_ms} boards_per_sec={boards_per_sec} best_score={} best_move={best_move}",
        outcome.stats.examined_boards, outcome.best.score,
    );
    Ok(())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let depth = parse_arg_u8("--depth", 3);
    let suite = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        ("hanging_queen", "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1"),
        ("recapture", "4k3/2p5/3p4/8/8/8/8/3QK3 w - - 0 1"),
        ("end_kpk", "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1"),
    ];
    println!("minimax baseline run: depth={depth}");
    for (name, fen) in suite {
        run_case(name, fen, depth)?;
    }
    Ok(())
}
