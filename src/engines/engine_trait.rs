//! Engine abstraction used by the match harness and the self-play binary.
//!
//! Defines common input parameters and output payloads so different search
//! strategies can be swapped behind a single trait object.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this move only.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `best_move` is `None` only when the side to move has no legal moves.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
