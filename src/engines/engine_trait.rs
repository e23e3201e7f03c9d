//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different action
//! selection strategies can be driven through a single trait interface.

use crate::checkers_errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search depth; engines fall back to their own default when unset.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen successor board, `None` when `color` had nothing to do.
    pub best_board: Option<Board>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_action(
        &mut self,
        board: &Board,
        color: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError>;
}
