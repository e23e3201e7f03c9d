//! Successor enumeration.
//!
//! Every legal action of one color is applied to its own copy of the board.
//! Copies include the full history, so branches never share state.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::*;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_action_apply::{player_move, player_take};
use crate::move_generation::legal_action_checks::{movers, square_info, takers};

/// All boards reachable by one action of `color`. Empty when `color` has
/// already spent its turn or has nothing legal to do.
pub fn successors(board: &Board, color: Color) -> Vec<Board> {
    if board.turn_state(color) == TurnState::Spent {
        return Vec::new();
    }

    let all_actors = movers(board, color).all() | takers(board, color).all();
    let mut boards = Vec::with_capacity(all_actors.count_ones() as usize * 2);

    for square in squares_of(all_actors & ON_BOARD) {
        let info = square_info(board, square);

        for direction in ALL_DIRECTIONS {
            if info.can_move(direction) {
                let mut next = board.clone();
                if player_move(&mut next, square, direction, Some(&info)).is_ok() {
                    boards.push(next);
                }
            }
        }
        for direction in ALL_DIRECTIONS {
            if info.can_take(direction) {
                let mut next = board.clone();
                if player_take(&mut next, square, direction, Some(&info)).is_ok() {
                    boards.push(next);
                }
            }
        }
    }

    boards
}

/// True when `color` is mid-capture on `board` and has a further jump to make.
pub fn continues_turn(board: &Board, color: Color) -> bool {
    matches!(board.turn_state(color), TurnState::Chain(_)) && takers(board, color).any_action
}

/// Color expected to act after `color` produced `board`.
pub fn next_to_act(board: &Board, color: Color) -> Color {
    if continues_turn(board, color) {
        color
    } else {
        color.opposite()
    }
}
