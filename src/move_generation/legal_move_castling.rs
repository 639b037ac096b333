use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::square_under_attack;
use crate::moves::chess_move::ChessMove;

/// Castling candidates for the side to move. Each wing needs its right still
/// held, a king that is not in check, a home rook, empty squares between
/// them, and no attacked square on the king's path.
pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let rights = game_state.castling_rights;
    if !rights.kingside(side) && !rights.queenside(side) {
        return;
    }

    let king_from = game_state.king_square(side);
    if king_from != Square::new(side.back_row(), KING_START_COL) {
        return;
    }

    // Cannot castle out of check.
    if square_under_attack(game_state, king_from) {
        return;
    }

    if rights.kingside(side) {
        generate_kingside(game_state, king_from, side, out);
    }
    if rights.queenside(side) {
        generate_queenside(game_state, king_from, side, out);
    }
}

fn generate_kingside(game_state: &GameState, king_from: Square, side: Color, out: &mut Vec<ChessMove>) {
    let row = king_from.row;
    let path = [Square::new(row, king_from.col + 1), Square::new(row, king_from.col + 2)];
    if !has_home_rook(game_state, Square::new(row, KINGSIDE_ROOK_COL), side) {
        return;
    }
    if path.iter().all(|sq| game_state.is_empty(*sq))
        && path.iter().all(|sq| !square_under_attack(game_state, *sq))
    {
        out.push(ChessMove::castle(king_from, path[1], game_state));
    }
}

fn generate_queenside(game_state: &GameState, king_from: Square, side: Color, out: &mut Vec<ChessMove>) {
    let row = king_from.row;
    let between = [
        Square::new(row, king_from.col - 1),
        Square::new(row, king_from.col - 2),
        Square::new(row, king_from.col - 3),
    ];
    if !has_home_rook(game_state, Square::new(row, QUEENSIDE_ROOK_COL), side) {
        return;
    }
    // The b-file square must be empty but may be attacked.
    if between.iter().all(|sq| game_state.is_empty(*sq))
        && between[..2].iter().all(|sq| !square_under_attack(game_state, *sq))
    {
        out.push(ChessMove::castle(king_from, between[1], game_state));
    }
}

#[inline]
fn has_home_rook(game_state: &GameState, square: Square, side: Color) -> bool {
    game_state.piece_at(square) == Some(Piece::new(side, PieceKind::Rook))
}
