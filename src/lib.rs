//! Crate root module declarations for the mailbox board engine.
//!
//! This file exposes the board model (padded 120-cell grid, moves, history),
//! pseudo-legal move generation, the selection/turn controller, and the
//! parsing and rendering helpers so the CLI, tests and benchmarks can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_history;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod perft;
}

pub mod controller {
    pub mod game_config;
    pub mod game_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_log;
    pub mod random_position;
    pub mod render_game_state;
}
