//! Shared search configuration and result types.

use crate::game_state::chess_rules::{CHECKMATE_SCORE, STALEMATE_SCORE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::in_check;
use crate::moves::chess_move::ChessMove;

/// Window bound strictly outside every reachable score, so a root whose every
/// move is mated still records one.
pub const SCORE_INFINITY: i32 = CHECKMATE_SCORE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    /// Unpruned minimax over the material-only scorer.
    Minimax,
    /// Negamax with alpha-beta, move ordering and a shuffled root, over the
    /// positional scorer.
    Negamax,
}

/// Preset strengths offered to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub algorithm: SearchAlgorithm,
    /// Seeds the root shuffle; `None` draws from the thread RNG.
    pub shuffle_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Difficulty::Easy.depth(),
            algorithm: SearchAlgorithm::Negamax,
            shuffle_seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Principal move; `None` only when the root had no legal moves.
    pub best_move: Option<ChessMove>,
    /// Minimax: light-positive. Negamax: relative to the side to move.
    pub score: i32,
    pub nodes: u64,
}

/// Light-positive score of a node without legal moves.
pub fn terminal_score(game_state: &GameState) -> i32 {
    if in_check(game_state) {
        -game_state.side_to_move.sign() * CHECKMATE_SCORE
    } else {
        STALEMATE_SCORE
    }
}
