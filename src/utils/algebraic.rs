//! Square naming in algebraic coordinates (`a1`..`h8`).
//!
//! Row 0 is rank 8 and column 0 is file `a`.

use std::fmt;

use crate::game_state::chess_types::Square;

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn rank_char(row: u8) -> char {
    char::from(b'8' - row)
}

pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(file_char(square.col));
    out.push(rank_char(square.row));
    out
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_char(self.col), rank_char(self.row))
    }
}
