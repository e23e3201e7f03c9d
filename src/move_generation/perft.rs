//! Successor-count walk.
//!
//! Counts the boards reachable in exactly `depth` actions. A color keeps
//! acting while it is mid-chain with a further jump available, so each jump
//! of a multi-capture is one level of depth.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{ActionKind, Color};
use crate::move_generation::legal_action_generator::{next_to_act, successors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub takes: usize,
    pub promotions: usize,
}

pub fn perft(board: &Board, color: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for next in successors(board, color) {
        perft_recurse(&next, color, depth, 1, &mut counts);
    }
    counts
}

fn perft_recurse(
    board: &Board,
    acted: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;
        let last = board.last_action();
        if last.kind == ActionKind::Take {
            counts.takes += 1;
        }
        if last.promoted {
            counts.promotions += 1;
        }
        return;
    }

    let color = next_to_act(board, acted);
    for next in successors(board, color) {
        perft_recurse(&next, color, search_depth, current_depth + 1, counts);
    }
}
