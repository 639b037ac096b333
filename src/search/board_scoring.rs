//! Pluggable board evaluation.
//!
//! Scorers return an absolute score: positive favors light, negative favors
//! dark, independent of the side to move. Negamax multiplies by its color.

use crate::game_state::chess_rules::{piece_value, CHECKMATE_SCORE, STALEMATE_SCORE};
use crate::game_state::chess_types::*;
use crate::tables::piece_square_tables::positional_value;

pub trait BoardScorer: Send + Sync {
    /// Light-positive score of `game_state`.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material balance only. No terminal handling and no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        occupied(game_state)
            .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
            .sum()
    }
}

/// Material plus piece-square bonuses, with terminal overrides read from the
/// checkmate/stalemate flags set by the last legal-move generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if game_state.checkmate {
            // The side to move is the one mated.
            return -game_state.side_to_move.sign() * CHECKMATE_SCORE;
        }
        if game_state.stalemate {
            return STALEMATE_SCORE;
        }

        occupied(game_state)
            .map(|(square, piece)| {
                piece.color.sign()
                    * (piece_value(piece.kind) + positional_value(piece.color, piece.kind, square))
            })
            .sum()
    }
}

fn occupied(game_state: &GameState) -> impl Iterator<Item = (Square, Piece)> + '_ {
    Square::all().filter_map(|square| game_state.piece_at(square).map(|piece| (square, piece)))
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer, PositionalScorer};
    use crate::game_state::chess_rules::CHECKMATE_SCORE;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::from_diagram;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::moves::chess_move::find_legal_move;

    #[test]
    fn initial_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(MaterialScorer.score(&game), 0);
        assert_eq!(PositionalScorer.score(&game), 0);
    }

    #[test]
    fn material_counts_extra_queen() {
        let game = from_diagram(
            [
                "....k...", "........", "........", "........", "........", "........",
                "........", "...QK...",
            ],
            Color::Light,
        );
        assert_eq!(MaterialScorer.score(&game), 900);
        // Queen on d1 carries a -0.5 bonus; both kings sit on neutral squares.
        assert_eq!(PositionalScorer.score(&game), 900 - 5);
    }

    #[test]
    fn checkmate_favors_the_side_that_delivered_it() {
        let mut game = GameState::new_game();
        for (from, to) in [((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))] {
            let legal = generate_legal_moves(&mut game);
            let mv = find_legal_move(
                &legal,
                Square::new(from.0, from.1),
                Square::new(to.0, to.1),
            )
            .expect("scripted move should be legal");
            apply_move(&mut game, mv);
        }
        generate_legal_moves(&mut game);
        assert!(game.checkmate);
        assert_eq!(PositionalScorer.score(&game), -CHECKMATE_SCORE);
        // The material scorer ignores terminal flags.
        assert_eq!(MaterialScorer.score(&game), 0);
    }
}
