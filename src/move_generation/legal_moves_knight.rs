use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_offset_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_offset_moves(game_state, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_knight_has_two_jumps() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&game, Square::new(7, 1), Color::Light, &mut out);
        let mut targets: Vec<Square> = out.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![Square::new(5, 0), Square::new(5, 2)]);
    }
}
