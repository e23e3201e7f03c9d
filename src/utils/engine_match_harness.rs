//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a starting
//! board. A side keeps acting while it is mid-capture with a jump left; a side
//! that has nothing to do on its own turn loses.

use std::time::Instant;

use crate::checkers_errors::EngineError;
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_action_generator::next_to_act;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWin,
    WhiteWin,
    DrawMaxActions,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_actions: u32,
    pub search_params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_actions: 400,
            search_params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub black_action_count: u32,
    pub white_action_count: u32,
    pub black_total_time_ns: u128,
    pub white_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} black_actions={} white_actions={} black_ms={:.3} white_ms={:.3}",
            self.outcome,
            self.black_action_count,
            self.white_action_count,
            self.black_total_time_ns as f64 / 1e6,
            self.white_total_time_ns as f64 / 1e6
        )
    }
}

/// Play one game from the opening position, black acting first.
pub fn play_engine_match(
    engine_black: &mut dyn Engine,
    engine_white: &mut dyn Engine,
    config: MatchConfig,
) -> Result<MatchResult, EngineError> {
    play_engine_match_from_board(
        Board::new_game(),
        Color::Black,
        engine_black,
        engine_white,
        config,
    )
}

/// Play one game from a caller-provided board with `to_act` moving first.
pub fn play_engine_match_from_board(
    start: Board,
    to_act: Color,
    engine_black: &mut dyn Engine,
    engine_white: &mut dyn Engine,
    config: MatchConfig,
) -> Result<MatchResult, EngineError> {
    engine_black.new_game();
    engine_white.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxActions,
        final_board: start,
        black_action_count: 0,
        white_action_count: 0,
        black_total_time_ns: 0,
        white_total_time_ns: 0,
    };
    let mut color = to_act;

    for _ in 0..config.max_actions {
        let legal = result.final_board.get_actions(color);
        if legal.is_empty() {
            result.outcome = match color {
                Color::Black => MatchOutcome::WhiteWin,
                Color::White => MatchOutcome::BlackWin,
            };
            log::info!("{}", result.report());
            return Ok(result);
        }

        let started = Instant::now();
        let board = &result.final_board;
        let out = match color {
            Color::Black => engine_black.choose_action(board, color, &config.search_params)?,
            Color::White => engine_white.choose_action(board, color, &config.search_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        let next = match out.best_board {
            Some(board) if legal.contains(&board) => board,
            _ => {
                let engine = match color {
                    Color::Black => engine_black.name(),
                    Color::White => engine_white.name(),
                };
                return Err(EngineError::IllegalSuccessor {
                    engine: engine.to_owned(),
                });
            }
        };

        match color {
            Color::Black => {
                result.black_action_count += 1;
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::White => {
                result.white_action_count += 1;
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        result.final_board = next;
        color = next_to_act(&result.final_board, color);
    }

    log::info!("{}", result.report());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;

    struct PassingEngine;

    impl Engine for PassingEngine {
        fn name(&self) -> &str {
            "Passing"
        }

        fn choose_action(
            &mut self,
            _board: &Board,
            _color: Color,
            _params: &SearchParams,
        ) -> Result<EngineOutput, EngineError> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn random_self_play_keeps_board_consistent() {
        for seed in 0..3 {
            let mut black = RandomEngine::with_seed(seed);
            let mut white = RandomEngine::with_seed(seed + 100);
            let result = play_engine_match(&mut black, &mut white, MatchConfig::default())
                .expect("match should complete");

            let board = &result.final_board;
            assert!(board.check_invariants().is_ok());
            assert_eq!(
                (result.black_action_count + result.white_action_count) as usize,
                board.get_history().len() - 1
            );
            match result.outcome {
                MatchOutcome::BlackWin => assert!(board.get_white_actions().is_empty()),
                MatchOutcome::WhiteWin => assert!(board.get_black_actions().is_empty()),
                MatchOutcome::DrawMaxActions => {}
            }
        }
    }

    #[test]
    fn blocked_side_loses_immediately() {
        // Black 5 is boxed in by 10, and 15 covers the jump.
        let start = Board::from_squares(&[5], &[10, 15], &[]).expect("valid position");
        let mut black = RandomEngine::with_seed(1);
        let mut white = RandomEngine::with_seed(2);
        let result = play_engine_match_from_board(
            start,
            Color::Black,
            &mut black,
            &mut white,
            MatchConfig::default(),
        )
        .expect("match should complete");
        assert_eq!(result.outcome, MatchOutcome::WhiteWin);
        assert_eq!(result.black_action_count, 0);
    }

    #[test]
    fn action_cap_ends_in_draw() {
        let mut black = MinimaxEngine::with_seed(1, 3);
        let mut white = RandomEngine::with_seed(4);
        let config = MatchConfig {
            max_actions: 6,
            search_params: SearchParams { depth: Some(1) },
        };
        let result =
            play_engine_match(&mut black, &mut white, config).expect("match should complete");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxActions);
        assert_eq!(result.black_action_count + result.white_action_count, 6);
    }

    #[test]
    fn engine_without_answer_is_rejected() {
        let mut black = PassingEngine;
        let mut white = RandomEngine::with_seed(0);
        let err = play_engine_match(&mut black, &mut white, MatchConfig::default())
            .expect_err("passing engine should be rejected");
        assert_eq!(
            err,
            EngineError::IllegalSuccessor {
                engine: "Passing".to_owned()
            }
        );
    }
}
