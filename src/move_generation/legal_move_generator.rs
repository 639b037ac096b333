//! Full legal move generation pipeline.
//!
//! Dispatches pseudo-legal generation per occupied square, appends castling
//! candidates, then filters by make / test / unmake: a candidate is legal when,
//! after applying it, the mover's king is not attacked. Pins and check evasion
//! fall out of that filter without dedicated logic.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_castling::generate_castling_moves;
use crate::move_generation::legal_move_checks::{in_check, is_king_in_check};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Pseudo-legal moves for one piece standing on `from`.
pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece.color, out),
        PieceKind::King => generate_king_moves(game_state, from, piece.color, out),
    }
}

/// Moves obeying piece movement rules for the side to move, possibly leaving
/// its own king in check. Castling is not included.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for from in Square::all() {
        if let Some(piece) = game_state.piece_at(from) {
            if piece.color == game_state.side_to_move {
                generate_piece_moves(game_state, from, piece, &mut out);
            }
        }
    }
    out
}

/// Fully legal moves for the side to move.
///
/// Recomputes `checkmate` / `stalemate` on `game_state` as a side effect. The
/// position is otherwise left exactly as it was found.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let mut candidates = generate_pseudo_legal_moves(game_state);
    generate_castling_moves(game_state, &mut candidates);

    let mover = game_state.side_to_move;
    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        apply_move(game_state, mv);
        let exposes_king = is_king_in_check(game_state, mover);
        undo_move(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    if legal.is_empty() {
        let checked = in_check(game_state);
        game_state.checkmate = checked;
        game_state.stalemate = !checked;
    } else {
        game_state.checkmate = false;
        game_state.stalemate = false;
    }

    legal
}
