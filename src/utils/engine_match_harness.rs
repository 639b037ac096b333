//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other from the initial
//! position. When an engine reports no move while legal moves exist, a
//! seeded random legal move is played in its place.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use crate::engines::engine_random::choose_random_move;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Seeds the fallback move picker.
    pub seed: u64,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    /// Plies where the engine gave no move and a random one was played.
    pub fallback_moves: u32,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_avg_ms={:.3} black_avg_ms={:.3} fallbacks={}",
            self.outcome,
            self.played_moves.len(),
            avg_ns_per_move_ms(self.white_total_time_ns, self.white_move_count),
            avg_ns_per_move_ms(self.black_total_time_ns, self.black_move_count),
            self.fallback_moves
        )
    }
}

/// Play a single engine-vs-engine match from the initial position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_state(GameState::new_game(), engine_white, engine_black, config)
}

/// Play a single match from a caller-provided state.
pub fn play_engine_match_from_state(
    mut state: GameState,
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();
    log::info!(
        "match start: {} (white) vs {} (black), max_plies={}",
        engine_white.name(),
        engine_black.name(),
        config.max_plies
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut fallback_moves = 0u32;

    // Terminal positions are detected before the ply limit, so a mate on the
    // last allowed ply is still scored as a mate.
    let outcome = loop {
        let legal_moves = generate_legal_moves(&mut state);
        if legal_moves.is_empty() {
            break terminal_outcome(&state);
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = state.side_to_move;
        let engine = match mover {
            Color::Light => &mut engine_white,
            Color::Dark => &mut engine_black,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        for line in &out.info_lines {
            log::debug!("{}: {}", engine.name(), line);
        }

        match mover {
            Color::Light => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = match out.best_move {
            Some(mv) => mv,
            None => {
                log::warn!(
                    "{} returned no move with {} legal moves; playing a random one",
                    engine.name(),
                    legal_moves.len()
                );
                fallback_moves += 1;
                choose_random_move(&legal_moves, &mut rng)
                    .ok_or("no legal move to fall back on")?
            }
        };
        // Re-resolve so the flags come from the generator, not the engine.
        let chosen = legal_moves
            .iter()
            .copied()
            .find(|mv| *mv == chosen)
            .ok_or_else(|| format!("{} returned illegal move {}", engine.name(), chosen))?;

        played_moves.push(chosen.to_string());
        apply_move(&mut state, chosen);
    };

    let result = MatchResult {
        outcome,
        final_state: state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
        fallback_moves,
    };
    log::info!("match over: {}", result.report());
    Ok(result)
}

/// Outcome of a position where the side to move has no legal move.
fn terminal_outcome(state: &GameState) -> MatchOutcome {
    if !in_check(state) {
        return MatchOutcome::DrawStalemate;
    }
    match state.side_to_move {
        Color::Light => MatchOutcome::DarkWinCheckmate,
        Color::Dark => MatchOutcome::LightWinCheckmate,
    }
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
