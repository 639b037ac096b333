//! Alpha-beta negamax engine with the positional scorer.
//!
//! Each move is searched on a [`SearchWorker`] thread against a private copy
//! of the position.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::search_types::{Difficulty, SearchAlgorithm, SearchConfig};
use crate::search::search_worker::SearchWorker;

pub struct NegamaxEngine {
    config: SearchConfig,
}

impl NegamaxEngine {
    pub fn new(depth: u8, shuffle_seed: Option<u64>) -> Self {
        Self {
            config: SearchConfig {
                depth: depth.max(1),
                algorithm: SearchAlgorithm::Negamax,
                shuffle_seed,
            },
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth(), None)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Easy)
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "negamax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut work_state = game_state.clone();
        let legal_moves = generate_legal_moves(&mut work_state);

        let mut config = self.config;
        if let Some(depth) = params.depth {
            config.depth = depth.max(1);
        }

        let outcome = SearchWorker::spawn(work_state, legal_moves, config)
            .and_then(SearchWorker::wait)
            .map_err(|e| e.to_string())?;

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            config.depth, outcome.score, outcome.nodes
        ));
        Ok(out)
    }
}
