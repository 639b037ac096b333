use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_offset_moves, KING_OFFSETS};
use crate::moves::chess_move::ChessMove;

/// Single-step king moves. Castling is produced separately by
/// `legal_move_castling` so it never enters the attack sweep.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_offset_moves(game_state, from, color, &KING_OFFSETS, out);
}
