//! Uniform random-action engine.
//!
//! Picks any legal successor with equal probability. Used as a weak baseline
//! opponent and for harness tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::checkers_errors::EngineError;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_action(
        &mut self,
        board: &Board,
        color: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let successors = board.get_actions(color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_actions {}",
            successors.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_board = successors.choose(&mut self.rng).cloned();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_picks_a_legal_successor() {
        let board = Board::new_game();
        let legal = board.get_white_actions();
        let mut engine = RandomEngine::with_seed(5);
        for _ in 0..10 {
            let out = engine
                .choose_action(&board, Color::White, &SearchParams::default())
                .expect("random engine should not fail");
            let picked = out.best_board.expect("white can move");
            assert!(legal.contains(&picked));
        }
    }
}
