//! Single entry point that runs the configured search algorithm.

use std::sync::atomic::AtomicBool;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{MaterialScorer, PositionalScorer};
use crate::search::minimax::find_minimax_move;
use crate::search::negamax::find_negamax_move;
use crate::search::search_types::{SearchAlgorithm, SearchConfig, SearchOutcome};

/// Picks a move for the side to move of `game_state` among `legal_moves`.
///
/// Minimax runs over [`MaterialScorer`], negamax over [`PositionalScorer`].
/// Raising `stop` aborts either search; the outcome is then to be discarded.
pub fn find_move(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    config: &SearchConfig,
    stop: Option<&AtomicBool>,
) -> SearchOutcome {
    log::debug!(
        "search {:?} depth {} over {} root moves",
        config.algorithm,
        config.depth,
        legal_moves.len()
    );

    match config.algorithm {
        SearchAlgorithm::Minimax => {
            find_minimax_move(game_state, legal_moves, config.depth, &MaterialScorer, stop)
        }
        SearchAlgorithm::Negamax => {
            let scorer = PositionalScorer;
            match config.shuffle_seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    find_negamax_move(game_state, legal_moves, config.depth, &scorer, &mut rng, stop)
                }
                None => find_negamax_move(
                    game_state,
                    legal_moves,
                    config.depth,
                    &scorer,
                    &mut rand::rng(),
                    stop,
                ),
            }
        }
    }
}
