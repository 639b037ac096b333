//! Engine-vs-engine self play from the initial position.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white negamax --black minimax --depth 3`

use std::io::Write;

use clap::{Parser, ValueEnum};

use ply_chess::engines::engine_minimax::MinimaxEngine;
use ply_chess::engines::engine_negamax::NegamaxEngine;
use ply_chess::engines::engine_random::RandomEngine;
use ply_chess::engines::engine_trait::{Engine, GoParams};
use ply_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use ply_chess::utils::render_game_state::{render_game_state, render_move_log};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Random,
    Minimax,
    Negamax,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine playing the light pieces
    #[arg(long, value_enum, default_value_t = EngineKind::Negamax)]
    white: EngineKind,

    /// Engine playing the dark pieces
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    black: EngineKind,

    /// Search depth in plies for both search engines
    #[arg(long, default_value_t = 2)]
    depth: u8,

    /// Stop the game as a draw after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Seed for root shuffling and random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_engine(kind: EngineKind, depth: u8, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        EngineKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
        EngineKind::Minimax => Box::new(MinimaxEngine::new(depth)),
        EngineKind::Negamax => Box::new(NegamaxEngine::new(depth, seed)),
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    let white = build_engine(args.white, args.depth, args.seed);
    let black = build_engine(args.black, args.depth, args.seed.map(|s| s.wrapping_add(1)));

    let result = play_engine_match(
        white,
        black,
        MatchConfig {
            max_plies: args.max_plies,
            seed: args.seed.unwrap_or(0),
            go_params: GoParams::default(),
        },
    )?;

    println!("{}", render_game_state(&result.final_state));
    println!("{}", render_move_log(&result.final_state));
    println!("{}", result.report());
    Ok(())
}
