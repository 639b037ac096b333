//! Unpruned minimax over material only. Slow but easy to reason about, kept
//! as the reference opponent for the negamax engine.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::find_minimax_move;
use crate::search::search_types::Difficulty;

pub struct MinimaxEngine {
    depth: u8,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::Easy.depth())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut work_state = game_state.clone();
        let legal_moves = generate_legal_moves(&mut work_state);
        let depth = params.depth.unwrap_or(self.depth);

        let outcome =
            find_minimax_move(&mut work_state, &legal_moves, depth, &MaterialScorer, None);

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, outcome.score, outcome.nodes
        ));
        Ok(out)
    }
}
