use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True when `square` holds a piece of the opposite color to `color`.
#[inline]
pub fn holds_enemy(game_state: &GameState, square: Square, color: Color) -> bool {
    matches!(game_state.piece_at(square), Some(piece) if piece.color != color)
}

/// Fixed-offset movers (knight, king): every on-board target not holding a
/// friendly piece.
pub fn generate_offset_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(ChessMove::new(from, to, game_state)),
        }
    }
}

/// Sliding movers: walk each direction until the edge or the first occupied
/// square, which is included only when it holds an enemy piece.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::new(from, to, game_state)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(ChessMove::new(from, to, game_state));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
