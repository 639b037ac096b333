//! Crate root module declarations for the ply chess engine.
//!
//! Exposes the board model, legal move generation, search and engines, plus
//! utility helpers so binaries, benches, and hosts can import stable module
//! paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod find_move;
    pub mod minimax;
    pub mod move_ordering;
    pub mod negamax;
    pub mod search_types;
    pub mod search_worker;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod render_game_state;
}
