use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Union of rook and bishop lines.
pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(game_state, from, color, out);
    generate_bishop_moves(game_state, from, color, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::from_diagram;

    #[test]
    fn centralized_queen_on_open_board_reaches_27_squares() {
        let game = from_diagram(
            [
                "k.......", "........", "........", "........", "...Q....", "........",
                "........", ".......K",
            ],
            Color::Light,
        );
        let mut out = Vec::new();
        generate_queen_moves(&game, Square::new(4, 3), Color::Light, &mut out);
        assert_eq!(out.len(), 27);
    }
}
