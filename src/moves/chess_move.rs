//! Immutable move value.
//!
//! A `ChessMove` records its squares, the piece that moved and the piece it
//! captured (both read from the position at construction), plus three flags:
//! promotion is derived, en passant and castling are set by the generator
//! because the board alone cannot tell them apart from ordinary moves.
//!
//! Identity is coordinate-only: two moves with the same start and end squares
//! compare equal regardless of flags. At most one variant is ever legal from a
//! given position, so lookup in a legal-move list is unambiguous.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::utils::algebraic::file_char;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl ChessMove {
    /// Ordinary move or capture. `from` must hold a piece.
    #[inline]
    pub fn new(from: Square, to: Square, game_state: &GameState) -> Self {
        Self::build(from, to, game_state, false, false)
    }

    /// En-passant capture; the captured pawn is not on `to`.
    #[inline]
    pub fn en_passant(from: Square, to: Square, game_state: &GameState) -> Self {
        Self::build(from, to, game_state, true, false)
    }

    /// King's two-square castling step; the rook is relocated by apply.
    #[inline]
    pub fn castle(from: Square, to: Square, game_state: &GameState) -> Self {
        Self::build(from, to, game_state, false, true)
    }

    fn build(
        from: Square,
        to: Square,
        game_state: &GameState,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let piece_moved = game_state
            .piece_at(from)
            .unwrap_or_else(|| panic!("no piece on move origin {from}"));
        let piece_captured = if is_en_passant {
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            game_state.piece_at(to)
        };
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && to.row == piece_moved.color.opposite().back_row();

        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant,
            is_castle,
        }
    }

    /// Coordinate-derived identity `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.from.row as u16 * 1000
            + self.from.col as u16 * 100
            + self.to.row as u16 * 10
            + self.to.col as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Piece standing on `to` after the move. Promotions always queen.
    #[inline]
    pub fn piece_placed(&self) -> Piece {
        if self.is_promotion {
            Piece::new(self.piece_moved.color, PieceKind::Queen)
        } else {
            self.piece_moved
        }
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::new(self.from.row, self.to.col)
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return if self.to.col > self.from.col {
                write!(f, "O-O")
            } else {
                write!(f, "O-O-O")
            };
        }

        match self.piece_moved.kind.letter() {
            Some(letter) => {
                write!(f, "{letter}")?;
                if self.is_capture() {
                    write!(f, "x")?;
                }
            }
            None => {
                if self.is_capture() {
                    write!(f, "{}x", file_char(self.from.col))?;
                }
            }
        }
        write!(f, "{}", self.to)?;
        if self.is_promotion {
            write!(f, "=Q")?;
        }
        Ok(())
    }
}

/// Resolves a from/to selection against a generated legal-move list.
pub fn find_legal_move(legal_moves: &[ChessMove], from: Square, to: Square) -> Option<ChessMove> {
    legal_moves
        .iter()
        .find(|mv| mv.from == from && mv.to == to)
        .copied()
}
