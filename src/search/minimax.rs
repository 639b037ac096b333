//! Plain minimax over a fixed-depth tree, no pruning.
//!
//! Light maximizes and dark minimizes a light-positive score. Each level
//! returns `(score, best move at this level)`; the root's move is the answer.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::search_types::{terminal_score, SearchOutcome, SCORE_INFINITY};

struct MinimaxContext<'a, S: BoardScorer> {
    scorer: &'a S,
    stop: Option<&'a AtomicBool>,
    nodes: u64,
}

impl<S: BoardScorer> MinimaxContext<'_, S> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Searches `legal_moves` (the legal moves of `game_state`) to `depth` plies.
/// The position is mutated during the search and restored before returning.
///
/// Setting `stop` aborts the search at the next node; the partial outcome is
/// then meaningless and callers are expected to discard it.
pub fn find_minimax_move<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    scorer: &S,
    stop: Option<&AtomicBool>,
) -> SearchOutcome {
    let mut ctx = MinimaxContext {
        scorer,
        stop,
        nodes: 0,
    };
    let (score, best_move) = minimax(game_state, legal_moves, depth.max(1), &mut ctx);
    log::debug!(
        "minimax depth {} score {} nodes {} best {:?}",
        depth,
        score,
        ctx.nodes,
        best_move.map(|m| m.to_string())
    );
    SearchOutcome {
        best_move,
        score,
        nodes: ctx.nodes,
    }
}

fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    ctx: &mut MinimaxContext<'_, S>,
) -> (i32, Option<ChessMove>) {
    ctx.nodes += 1;

    if depth == 0 {
        return (ctx.scorer.score(game_state), None);
    }
    if legal_moves.is_empty() {
        return (terminal_score(game_state), None);
    }

    let maximizing = game_state.is_light_to_move();
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    let mut best_move = None;

    for &mv in legal_moves {
        if ctx.should_stop() {
            break;
        }

        apply_move(game_state, mv);
        let replies = generate_legal_moves(game_state);
        let (score, _) = minimax(game_state, &replies, depth - 1, ctx);
        undo_move(game_state);

        // Strict comparison keeps the first of equally scored moves.
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;

    use super::find_minimax_move;
    use crate::game_state::chess_rules::CHECKMATE_SCORE;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::from_diagram;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn takes_the_hanging_queen() {
        let mut game = from_diagram(
            [
                "k.......", "........", "........", "...q....", "........", "........",
                "........", "...R..K.",
            ],
            Color::Light,
        );
        let before = game.clone();
        let legal = generate_legal_moves(&mut game);
        let outcome = find_minimax_move(&mut game, &legal, 1, &MaterialScorer, None);

        let best = outcome.best_move.expect("a move should be found");
        assert_eq!(best.to, Square::new(3, 3));
        assert_eq!(outcome.score, 500);
        assert!(game.same_position(&before));
        assert!(game.move_log.is_empty());
    }

    #[test]
    fn dark_minimizes() {
        let mut game = from_diagram(
            [
                ".......k", "........", "........", "...Q....", "........", "........",
                ".......K", "...r....",
            ],
            Color::Dark,
        );
        let legal = generate_legal_moves(&mut game);
        let outcome = find_minimax_move(&mut game, &legal, 1, &MaterialScorer, None);
        assert_eq!(outcome.best_move.map(|m| m.to), Some(Square::new(3, 3)));
        assert_eq!(outcome.score, -500);
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let mut game = from_diagram(
            [
                "......k.", ".....ppp", "........", "........", "........", "........",
                "........", "R......K",
            ],
            Color::Light,
        );
        let legal = generate_legal_moves(&mut game);
        let outcome = find_minimax_move(&mut game, &legal, 2, &MaterialScorer, None);
        assert_eq!(outcome.best_move.map(|m| m.to), Some(Square::new(0, 0)));
        assert_eq!(outcome.score, CHECKMATE_SCORE);
    }

    #[test]
    fn no_legal_moves_means_no_move() {
        let mut game = from_diagram(
            [
                "k.......", "..Q.....", ".K......", "........", "........", "........",
                "........", "........",
            ],
            Color::Dark,
        );
        let legal = generate_legal_moves(&mut game);
        assert!(legal.is_empty());
        let outcome = find_minimax_move(&mut game, &legal, 2, &MaterialScorer, None);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn raised_stop_flag_aborts_before_expanding() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let legal = generate_legal_moves(&mut game);
        let stop = AtomicBool::new(true);
        let outcome = find_minimax_move(&mut game, &legal, 3, &MaterialScorer, Some(&stop));
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.nodes, 1);
        assert!(game.same_position(&before));
    }
}
