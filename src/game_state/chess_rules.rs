//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard back-rank arrangement, the
//! material values used by scoring and move ordering, and terminal scores.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Score of a delivered mate; larger than any reachable material sum.
pub const CHECKMATE_SCORE: i32 = 100_000;
pub const STALEMATE_SCORE: i32 = 0;

/// Material value in centipawns. The king value is a sentinel, kings are
/// never captured in legal play.
#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 330,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}
