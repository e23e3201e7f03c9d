//! Pluggable static evaluation.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so alternate heuristics can
//! be swapped without touching tree code. Scores are always from black's
//! perspective: positive favors black.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> f32;
}

/// Piece difference plus a small bonus per king.
#[derive(Debug, Clone, Copy)]
pub struct MaterialScorer {
    pub king_weight: f32,
}

impl MaterialScorer {
    pub const DEFAULT_KING_WEIGHT: f32 = 0.25;
}

impl Default for MaterialScorer {
    fn default() -> Self {
        Self {
            king_weight: Self::DEFAULT_KING_WEIGHT,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> f32 {
        let piece_diff =
            board.count_pieces(Color::Black) as f32 - board.count_pieces(Color::White) as f32;
        let kings_diff =
            board.count_kings(Color::Black) as f32 - board.count_kings(Color::White) as f32;
        piece_diff + self.king_weight * kings_diff
    }
}

/// Score with the default material weights.
#[inline]
pub fn evaluate(board: &Board) -> f32 {
    MaterialScorer::default().score(board)
}
