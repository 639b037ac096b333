//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! self-play binary.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::rank_char;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        out.push(rank_char(row));
        out.push(' ');

        for col in 0..8u8 {
            match game_state.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char(row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Numbered move pairs, e.g. `1. e4 e5 2. Nf3`.
pub fn render_move_log(game_state: &GameState) -> String {
    game_state
        .move_log
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [light, dark] => format!("{}. {} {}", i + 1, light, dark),
            [light] => format!("{}. {}", i + 1, light),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_game_state, render_move_log};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::moves::chess_move::find_legal_move;

    #[test]
    fn initial_board_layout() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn move_log_pairs_are_numbered() {
        let mut game = GameState::new_game();
        assert_eq!(render_move_log(&game), "");
        for (from, to) in [((6, 4), (4, 4)), ((1, 4), (3, 4)), ((7, 6), (5, 5))] {
            let legal = generate_legal_moves(&mut game);
            let mv = find_legal_move(&legal, Square::new(from.0, from.1), Square::new(to.0, to.1))
                .expect("scripted move should be legal");
            apply_move(&mut game, mv);
        }
        assert_eq!(render_move_log(&game), "1. e4 e5 2. Nf3");
    }
}
