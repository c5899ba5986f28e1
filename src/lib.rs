//! Crate root module declarations for the Plum Draughts engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, live-game orchestration, and utility helpers) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_state;
}

pub mod moves {
    pub mod directions;
    pub mod move_description;
}

pub mod move_generation {
    pub mod capture_sequences;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod simple_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod play {
    pub mod collaborators;
    pub mod turn_orchestrator;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod notation;
    pub mod render_game_state;
}
