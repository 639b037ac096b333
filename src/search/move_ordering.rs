//! Greedy move-ordering heuristic for alpha-beta.
//!
//! Only affects the order candidates are searched in, never legality or
//! scores.

use std::cmp::Reverse;

use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::square_under_attack;
use crate::moves::chess_move::ChessMove;

/// Captured material minus a tenth of the mover's value when the destination
/// is currently covered by the opponent.
pub fn move_value(game_state: &GameState, mv: &ChessMove) -> i32 {
    let capture_value = mv.piece_captured.map_or(0, |piece| piece_value(piece.kind));
    let threatened_penalty = if square_under_attack(game_state, mv.to) {
        piece_value(mv.piece_moved.kind) / 10
    } else {
        0
    };
    capture_value - threatened_penalty
}

/// Sorts by descending `move_value`. The sort is stable, so equal-valued
/// moves keep their incoming (possibly shuffled) order.
pub fn order_moves(game_state: &GameState, moves: &mut [ChessMove]) {
    moves.sort_by_cached_key(|mv| Reverse(move_value(game_state, mv)));
}

#[cfg(test)]
mod tests {
    use super::{move_value, order_moves};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::from_diagram;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn captures_rank_first_and_guarded_squares_are_penalized() {
        let mut game = from_diagram(
            [
                "....k...", "........", "..p.....", "...r....", "........", "........",
                "........", "...QK...",
            ],
            Color::Light,
        );
        let mut moves = generate_legal_moves(&mut game);
        order_moves(&game, &mut moves);

        // Qxd5 wins a rook, docked a tenth of the queen for the c6 pawn guard.
        assert_eq!(moves[0].to, Square::new(3, 3));
        assert_eq!(move_value(&game, &moves[0]), 500 - 90);

        // d3 sits on the rook's file: a tenth of the queen is docked.
        let d3 = moves
            .iter()
            .find(|m| m.from == Square::new(7, 3) && m.to == Square::new(5, 3))
            .expect("Qd3 should be legal");
        assert_eq!(move_value(&game, d3), -90);
    }
}
