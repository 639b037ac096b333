//! Core mutable board state.
//!
//! `GameState` is the single source of truth for a game: the 8x8 grid, side
//! to move, cached king squares, castling rights, en-passant target, the
//! checkmate/stalemate flags, and the three stacks (`move_log`,
//! `castling_rights_log`, `en_passant_log`) that let `undo_move` restore every
//! applied move in reverse order.

use crate::game_state::chess_rules::{BACK_RANK, KING_START_COL};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Outcome view derived from the terminal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][col], row 0 is the dark back rank.
    pub board: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,
    // [color.index()]
    pub king_squares: [Square; 2],
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Set by `generate_legal_moves`, cleared by `undo_move`.
    pub checkmate: bool,
    pub stalemate: bool,

    // --- Undo stacks, pushed and popped in lock-step ---
    pub move_log: Vec<ChessMove>,
    pub castling_rights_log: Vec<CastlingRights>,
    pub en_passant_log: Vec<Option<Square>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::Light,
            king_squares: [
                Square::new(Color::Light.back_row(), KING_START_COL),
                Square::new(Color::Dark.back_row(), KING_START_COL),
            ],
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            checkmate: false,
            stalemate: false,
            move_log: Vec::new(),
            castling_rights_log: Vec::new(),
            en_passant_log: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, light to move, no castling rights. Hosts and tests place
    /// pieces with [`GameState::put_piece`]; a playable position must end up
    /// with exactly one king per color.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial arrangement with full castling rights.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for color in [Color::Light, Color::Dark] {
            let back_row = color.back_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                game_state.put_piece(Square::new(back_row, col as u8), Piece::new(color, *kind));
            }
            for col in 0..8 {
                game_state.put_piece(
                    Square::new(color.pawn_start_row(), col),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        game_state.castling_rights = CastlingRights::ALL;
        game_state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Places `piece`, replacing any occupant. Placing a king moves that
    /// color's cached king square.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.row as usize][square.col as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = square;
        }
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    #[inline]
    pub fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant_square = square;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn is_light_to_move(&self) -> bool {
        self.side_to_move == Color::Light
    }

    /// Number of half-moves applied since construction.
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last()
    }

    /// Terminal view as of the last `generate_legal_moves` call.
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Compares the position proper: grid, side to move, king squares,
    /// castling rights and en-passant target. Logs and flags are ignored.
    pub fn same_position(&self, other: &GameState) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.king_squares == other.king_squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_square == other.en_passant_square
    }
}

/// Test-only board diagrams: eight strings from row 0 (rank 8) to row 7,
/// uppercase for light, lowercase for dark, `.` for empty.
#[cfg(test)]
pub(crate) fn from_diagram(rows: [&str; 8], side_to_move: Color) -> GameState {
    let mut game_state = GameState::new_empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "diagram row {row} must have 8 squares");
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch.to_ascii_lowercase() {
                '.' => continue,
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unexpected diagram character '{other}'"),
            };
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            game_state.put_piece(Square::new(row as u8, col as u8), Piece::new(color, kind));
        }
    }
    game_state.side_to_move = side_to_move;
    game_state
}

#[cfg(test)]
mod tests {
    use super::{from_diagram, GameState, GameStatus};
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_has_standard_layout() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_at(Square::new(7, 4)),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game.piece_at(Square::new(0, 3)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game.king_square(Color::Dark), Square::new(0, 4));
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.en_passant_square, None);
        assert!(game.is_light_to_move());

        let occupied = Square::all().filter(|sq| !game.is_empty(*sq)).count();
        assert_eq!(occupied, 32);
    }

    #[test]
    fn put_piece_tracks_king_square() {
        let mut game = GameState::new_empty();
        game.put_piece(Square::new(3, 3), Piece::new(Color::Dark, PieceKind::King));
        assert_eq!(game.king_square(Color::Dark), Square::new(3, 3));
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn diagram_matches_new_game() {
        let game = from_diagram(
            [
                "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "RNBQKBNR",
            ],
            Color::Light,
        );
        let mut expected = GameState::new_game();
        expected.castling_rights = CastlingRights::NONE;
        assert!(game.same_position(&expected));
    }
}
