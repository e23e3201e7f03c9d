//! Crate root module declarations for the Plum Checkers engine.
//!
//! This file exposes the top-level subsystems (board state, legal action
//! generation, search, engines and the match harness) so benches, tests and
//! external front ends can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
}

pub mod move_generation {
    pub mod legal_action_apply;
    pub mod legal_action_checks;
    pub mod legal_action_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
}
