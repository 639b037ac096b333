use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(game_state, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::from_diagram;

    #[test]
    fn rook_stops_at_first_blocker_and_captures_enemies_only() {
        let game = from_diagram(
            [
                "....k...", "........", "...p....", "........", "........", "........",
                "...R.N..", "....K...",
            ],
            Color::Light,
        );
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(6, 3), Color::Light, &mut out);

        // Up to and including the d6 pawn, left to the edge, one step right, one down.
        assert_eq!(out.len(), 4 + 3 + 1 + 1);
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
        assert!(!out.iter().any(|m| m.to == Square::new(6, 5)));
    }
}
