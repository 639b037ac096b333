//! Attack and check detection.
//!
//! Attacks are found by sweeping every attacker piece's pseudo-legal moves and
//! looking for one that lands on the queried square. Pawns are the exception:
//! their pushes never attack, so their two diagonal squares are used instead,
//! occupied or not. This is O(board) per query and is called once per
//! candidate during legality filtering.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_piece_moves;
use crate::move_generation::legal_moves_pawn::pawn_attack_squares;

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Color) -> bool {
    let mut scratch = Vec::with_capacity(32);

    for from in Square::all() {
        let Some(piece) = game_state.piece_at(from) else {
            continue;
        };
        if piece.color != attacker {
            continue;
        }

        if piece.kind == PieceKind::Pawn {
            if pawn_attack_squares(attacker, from).any(|sq| sq == square) {
                return true;
            }
            continue;
        }

        scratch.clear();
        generate_piece_moves(game_state, from, piece, &mut scratch);
        if scratch.iter().any(|mv| mv.to == square) {
            return true;
        }
    }

    false
}

/// Whether the side to move's opponent attacks `square`.
///
/// Enemy pawns count only through their capture diagonals, never through the
/// square they could push to. Castling transit checks go through here, so a
/// pawn standing in front of a transit square does not block castling, while
/// one whose diagonal reaches it does, even when that square is empty.
#[inline]
pub fn square_under_attack(game_state: &GameState, square: Square) -> bool {
    is_square_attacked(game_state, square, game_state.side_to_move.opposite())
}

/// Whether the side to move's king is attacked.
#[inline]
pub fn in_check(game_state: &GameState) -> bool {
    square_under_attack(game_state, game_state.king_square(game_state.side_to_move))
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}
