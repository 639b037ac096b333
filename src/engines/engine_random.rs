//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as an opponent for smoke tests
//! and as the fallback when a search engine reports no move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::ChessMove;

/// Uniform pick among `legal_moves`; `None` when the list is empty.
pub fn choose_random_move<R: Rng + ?Sized>(legal_moves: &[ChessMove], rng: &mut R) -> Option<ChessMove> {
    legal_moves.choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut probe = game_state.clone();
        let legal_moves = generate_legal_moves(&mut probe);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine ignores requested_depth {}",
                depth
            ));
        }

        out.best_move = choose_random_move(&legal_moves, &mut self.rng);
        Ok(out)
    }
}
