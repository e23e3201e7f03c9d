//! The only board mutators.
//!
//! A requested action is checked against the square's resolved legality
//! flags, then occupancy is updated, promotion decided and the resulting
//! [`Action`] appended to history in one step.

use crate::checkers_errors::ActionError;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::*;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_action_checks::square_info;

fn validate(square: Square, direction: Direction) -> Result<(), ActionError> {
    if square >= BOARD_SIZE {
        return Err(ActionError::SquareOutOfRange(square));
    }
    if !ALL_DIRECTIONS.contains(&direction) {
        return Err(ActionError::InvalidDirection(direction));
    }
    Ok(())
}

/// Resolve the snapshot to act on. A precomputed one must agree with the
/// board's occupancy at `square`.
fn resolve_info(board: &Board, square: Square, info: Option<&SquareInfo>) -> Option<SquareInfo> {
    let Some(info) = info else {
        return Some(square_info(board, square));
    };
    let mask = bit_mask(square);
    let matches = info.is_black == (board.black & mask != 0)
        && info.is_white == (board.white & mask != 0)
        && info.is_king == (board.kings & mask != 0);
    matches.then_some(*info)
}

/// Apply a simple move from `square` toward `direction`.
///
/// `info` may carry a snapshot already resolved for this exact board; when it
/// is `None` the snapshot is computed here.
pub(crate) fn player_move(
    board: &mut Board,
    square: Square,
    direction: Direction,
    info: Option<&SquareInfo>,
) -> Result<Action, ActionError> {
    validate(square, direction)?;
    let info = resolve_info(board, square, info);

    let color = match info.and_then(|info| info.color().filter(|_| info.can_move(direction))) {
        Some(color) => color,
        _ => {
            log::debug!("rejected move from {square} toward {direction}");
            return Err(ActionError::IllegalMove { square, direction });
        }
    };

    let dst = offset_square(square, direction, 1)
        .ok_or(ActionError::IllegalMove { square, direction })?;
    let was_king = board.kings & bit_mask(square) != 0;
    Ok(write_action(board, color, ActionKind::Move, square, dst, was_king))
}

/// Apply a single capture from `square`, jumping the neighbour toward `direction`.
pub(crate) fn player_take(
    board: &mut Board,
    square: Square,
    direction: Direction,
    info: Option<&SquareInfo>,
) -> Result<Action, ActionError> {
    validate(square, direction)?;
    let info = resolve_info(board, square, info);

    let color = match info.and_then(|info| info.color().filter(|_| info.can_take(direction))) {
        Some(color) => color,
        _ => {
            log::debug!("rejected take from {square} toward {direction}");
            return Err(ActionError::IllegalTake { square, direction });
        }
    };

    let dst = offset_square(square, direction, 2)
        .ok_or(ActionError::IllegalTake { square, direction })?;
    let was_king = board.kings & bit_mask(square) != 0;
    Ok(write_action(board, color, ActionKind::Take, square, dst, was_king))
}

fn write_action(
    board: &mut Board,
    color: Color,
    kind: ActionKind,
    src: Square,
    dst: Square,
    was_king: bool,
) -> Action {
    let src_mask = bit_mask(src);
    let dst_mask = bit_mask(dst);
    let promoted = !was_king && promotion_row(color) & dst_mask != 0;

    let (own, enemy) = match color {
        Color::Black => (&mut board.black, &mut board.white),
        Color::White => (&mut board.white, &mut board.black),
    };
    *own = (*own & !src_mask) | dst_mask;

    if kind == ActionKind::Take {
        let captured_mask = bit_mask((src + dst) / 2);
        *enemy &= !captured_mask;
        board.kings &= !captured_mask;
    }

    if was_king {
        board.kings = (board.kings & !src_mask) | dst_mask;
    } else if promoted {
        board.kings |= dst_mask;
    }

    let action = Action {
        color: Some(color),
        kind,
        src,
        dst,
        promoted,
    };
    log::trace!("{action:?}");
    board.history.push(action);
    action
}
