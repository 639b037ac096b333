//! Perft: exhaustive legal-move tree counts for generator validation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count at `depth` plies. The position is restored on return.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        apply_move(game_state, mv);
        nodes += perft(game_state, depth - 1);
        undo_move(game_state);
    }
    nodes
}

/// Leaf count plus per-category tallies of the moves reaching the leaves.
/// Costs one extra legal-move generation per leaf for the mate tally.
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, mv);
        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(mv.is_capture());
            total.en_passant += u64::from(mv.is_en_passant);
            total.castles += u64::from(mv.is_castle);
            total.promotions += u64::from(mv.is_promotion);
            if in_check(game_state) {
                total.checks += 1;
                if generate_legal_moves(game_state).is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        undo_move(game_state);
    }
    total
}
