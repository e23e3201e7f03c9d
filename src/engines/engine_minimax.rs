//! Minimax engine with an owned, explicitly seedable tie-break generator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::checkers_errors::{EngineError, SearchError};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::search::minimax::MinMax;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

pub struct MinimaxEngine {
    default_depth: u8,
    rng: StdRng,
}

impl MinimaxEngine {
    /// Engine whose tie-breaks are seeded from the thread-local generator.
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Engine with reproducible tie-breaks.
    pub fn with_seed(default_depth: u8, seed: u64) -> Self {
        Self {
            default_depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
    }

    fn choose_action(
        &mut self,
        board: &Board,
        color: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let depth = params.depth.unwrap_or(self.default_depth);
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string minimax_engine color {color:?} depth {depth}"));

        match MinMax::new(color, depth).best_move_with_rng(board, &mut self.rng) {
            Ok(next) => {
                out.info_lines.push(format!(
                    "info string minimax_engine action {:?}",
                    next.last_action()
                ));
                out.best_board = Some(next);
                Ok(out)
            }
            Err(SearchError::NoLegalAction(_)) => {
                out.info_lines
                    .push("info string minimax_engine no legal action".to_owned());
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_engines_agree() {
        let board = Board::new_game();
        let params = SearchParams { depth: Some(1) };
        let mut a = MinimaxEngine::with_seed(4, 11);
        let mut b = MinimaxEngine::with_seed(4, 11);
        for _ in 0..3 {
            let left = a
                .choose_action(&board, Color::Black, &params)
                .expect("search should run");
            let right = b
                .choose_action(&board, Color::Black, &params)
                .expect("search should run");
            assert_eq!(left.best_board, right.best_board);
            assert!(left.best_board.is_some());
        }
    }

    #[test]
    fn spent_turn_reports_no_board() {
        let mut board = Board::new_game();
        board
            .player_move(17, crate::game_state::checkers_types::NW)
            .expect("opening move should be legal");
        let mut engine = MinimaxEngine::with_seed(2, 0);
        let out = engine
            .choose_action(&board, Color::Black, &SearchParams::default())
            .expect("engine should not fail");
        assert!(out.best_board.is_none());
        assert!(out.info_lines.iter().any(|line| line.contains("no legal action")));
    }
}
