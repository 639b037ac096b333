use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::holds_enemy;
use crate::moves::chess_move::ChessMove;

/// Pushes, double pushes from the start row, diagonal captures, and the
/// en-passant capture when it is this pawn's side to move.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(pawn) = game_state.piece_at(from) else {
        return;
    };
    let color = pawn.color;
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.is_empty(one_step) {
            out.push(ChessMove::new(from, one_step, game_state));

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if game_state.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step, game_state));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if holds_enemy(game_state, to, color) {
            out.push(ChessMove::new(from, to, game_state));
        } else if game_state.side_to_move == color && game_state.en_passant_square == Some(to) {
            out.push(ChessMove::en_passant(from, to, game_state));
        }
    }
}

/// Squares a pawn on `from` attacks, whether or not they are occupied.
pub fn pawn_attack_squares(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}
