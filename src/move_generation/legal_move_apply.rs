//! Incremental make/unmake.
//!
//! `apply_move` mutates the position in place and pushes the prior castling
//! rights and en-passant target onto their logs alongside the move itself;
//! `undo_move` pops all three and reverses every effect exactly.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Applies `mv` to `game_state`.
///
/// Precondition: `mv` came from `generate_legal_moves` on this exact position.
/// Nothing is validated here; any other move leaves the position undefined.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) {
    let mover = mv.piece_moved.color;
    debug_assert_eq!(game_state.piece_at(mv.from), Some(mv.piece_moved));

    game_state.castling_rights_log.push(game_state.castling_rights);
    game_state.en_passant_log.push(game_state.en_passant_square);

    game_state.clear_square(mv.from);
    game_state.board[mv.to.row as usize][mv.to.col as usize] = Some(mv.piece_placed());

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.to;
    }

    if mv.is_en_passant {
        game_state.clear_square(mv.en_passant_victim_square());
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.clear_square(rook_from);
        game_state.board[rook_to.row as usize][rook_to.col as usize] = rook;
    }

    game_state.en_passant_square =
        if mv.piece_moved.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

    update_castling_rights(&mut game_state.castling_rights, &mv);

    game_state.side_to_move = mover.opposite();
    game_state.move_log.push(mv);
}

/// Reverts the most recent `apply_move`, returning the move it undid.
/// Returns `None` and leaves the position untouched when nothing was applied.
/// Clears the checkmate/stalemate flags, which describe the abandoned position.
pub fn undo_move(game_state: &mut GameState) -> Option<ChessMove> {
    let mv = game_state.move_log.pop()?;
    let mover = mv.piece_moved.color;

    game_state.board[mv.from.row as usize][mv.from.col as usize] = Some(mv.piece_moved);
    if mv.is_en_passant {
        game_state.clear_square(mv.to);
        let victim = mv.en_passant_victim_square();
        game_state.board[victim.row as usize][victim.col as usize] = mv.piece_captured;
    } else {
        game_state.board[mv.to.row as usize][mv.to.col as usize] = mv.piece_captured;
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.from;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.clear_square(rook_to);
        game_state.board[rook_from.row as usize][rook_from.col as usize] = rook;
    }

    if let Some(prev) = game_state.en_passant_log.pop() {
        game_state.en_passant_square = prev;
    }
    if let Some(prev) = game_state.castling_rights_log.pop() {
        game_state.castling_rights = prev;
    }

    game_state.side_to_move = mover;
    game_state.checkmate = false;
    game_state.stalemate = false;

    Some(mv)
}

/// Rook origin and destination for a castling move.
fn castle_rook_squares(mv: &ChessMove) -> (Square, Square) {
    let row = mv.to.row;
    if mv.to.col > mv.from.col {
        (Square::new(row, KINGSIDE_ROOK_COL), Square::new(row, mv.to.col - 1))
    } else {
        (Square::new(row, QUEENSIDE_ROOK_COL), Square::new(row, mv.to.col + 1))
    }
}

/// Rights are revoked by a king move, a rook leaving its home corner, or a
/// rook captured on its home corner. Never restored here.
fn update_castling_rights(rights: &mut CastlingRights, mv: &ChessMove) {
    let mover = mv.piece_moved.color;
    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_all(mover),
        PieceKind::Rook => revoke_for_corner(rights, mover, mv.from),
        _ => {}
    }

    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook {
            revoke_for_corner(rights, captured.color, mv.to);
        }
    }
}

fn revoke_for_corner(rights: &mut CastlingRights, color: Color, square: Square) {
    if square.row != color.back_row() {
        return;
    }
    match square.col {
        QUEENSIDE_ROOK_COL => rights.revoke_queenside(color),
        KINGSIDE_ROOK_COL => rights.revoke_kingside(color),
        _ => {}
    }
}
