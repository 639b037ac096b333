//! Negamax with alpha-beta pruning.
//!
//! Scores are relative to the side to move at each node: `color` is +1 when
//! light moves and -1 when dark moves, and the absolute scorer output is
//! multiplied by it at the leaves. Candidates are ordered by
//! [`order_moves`] before expansion, and the root list is shuffled first so
//! equal-valued moves vary between games.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;
use crate::search::search_types::{terminal_score, SearchOutcome, SCORE_INFINITY};

struct NegamaxContext<'a, S: BoardScorer> {
    scorer: &'a S,
    stop: Option<&'a AtomicBool>,
    nodes: u64,
}

impl<S: BoardScorer> NegamaxContext<'_, S> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Searches `legal_moves` (the legal moves of `game_state`) to `depth` plies.
///
/// The returned score is from the point of view of the side to move. Setting
/// `stop` aborts the search at the next node; the partial outcome is then
/// meaningless and callers are expected to discard it.
pub fn find_negamax_move<S, R>(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    scorer: &S,
    rng: &mut R,
    stop: Option<&AtomicBool>,
) -> SearchOutcome
where
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let mut root_moves = legal_moves.to_vec();
    root_moves.shuffle(rng);

    let mut ctx = NegamaxContext {
        scorer,
        stop,
        nodes: 0,
    };
    let color = game_state.side_to_move.sign();
    let (score, best_move) = negamax(
        game_state,
        &mut root_moves,
        depth.max(1),
        -SCORE_INFINITY,
        SCORE_INFINITY,
        color,
        &mut ctx,
    );

    log::debug!(
        "negamax depth {} score {} nodes {} best {:?}",
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

fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &mut [ChessMove],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    color: i32,
    ctx: &mut NegamaxContext<'_, S>,
) -> (i32, Option<ChessMove>) {
    ctx.nodes += 1;

    if depth == 0 {
        return (color * ctx.scorer.score(game_state), None);
    }
    if moves.is_empty() {
        return (color * terminal_score(game_state), None);
    }

    order_moves(game_state, moves);

    let mut max_score = -SCORE_INFINITY;
    let mut best_move = None;

    for &mv in moves.iter() {
        if ctx.should_stop() {
            break;
        }

        apply_move(game_state, mv);
        let mut replies = generate_legal_moves(game_state);
        let (child, _) = negamax(
            game_state,
            &mut replies,
            depth - 1,
            -beta,
            -alpha,
            -color,
            ctx,
        );
        undo_move(game_state);

        let score = -child;
        if score > max_score {
            max_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(max_score);
        if alpha >= beta {
            break;
        }
    }

    (max_score, best_move)
}
