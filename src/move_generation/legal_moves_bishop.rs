use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(game_state, from, color, &BISHOP_DIRECTIONS, out);
}
