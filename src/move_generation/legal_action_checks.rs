//! Mover/taker derivation.
//!
//! Each query recomputes, for one color, the per-diagonal sets of pieces that
//! may move or capture this ply. Men act along their two forward diagonals
//! only, kings along all four. Captures are mandatory and turn/chain state is
//! read from [`Board::turn_state`].

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::*;
use crate::game_state::checkers_types::*;

/// Diagonals a man of `color` may use.
#[inline]
pub const fn forward_directions(color: Color) -> [Direction; 2] {
    match color {
        Color::Black => [NW, NE],
        Color::White => [SW, SE],
    }
}

#[inline]
pub fn is_forward(color: Color, direction: Direction) -> bool {
    forward_directions(color).contains(&direction)
}

/// Pieces of `color` allowed to act toward `direction`, before any target check.
#[inline]
fn eligible_pieces(board: &Board, color: Color, direction: Direction) -> Position {
    let own = board.pieces_of(color);
    if is_forward(color, direction) {
        own
    } else {
        own & board.kings
    }
}

/// Pieces of `color` that can capture, per diagonal.
pub fn takers(board: &Board, color: Color) -> Actors {
    let mut found = Actors::default();

    let chain_square = match board.turn_state(color) {
        TurnState::Spent => return found,
        TurnState::Chain(square) => Some(square),
        TurnState::Open => None,
    };

    // No stealing the turn while the opponent is still jumping. For the
    // opponent its own take reads as Chain or Spent, so this recursion stops.
    let last = board.last_action();
    let opponent = color.opposite();
    if last.is_by(opponent) && last.kind == ActionKind::Take && takers(board, opponent).any_action {
        return found;
    }

    let open = board.open_squares();
    let enemy = board.pieces_of(opponent);
    for direction in ALL_DIRECTIONS {
        let landing_beyond_enemy = shift_toward(open, direction) & enemy;
        let mut actors = shift_toward(landing_beyond_enemy, direction)
            & eligible_pieces(board, color, direction);
        if let Some(square) = chain_square {
            actors &= bit_mask(square);
        }
        found.set_direction(direction, actors);
    }

    found.refresh_any_action();
    found
}

/// Pieces of `color` that can make a simple move, per diagonal.
///
/// Empty after any action of `color` (its turn is over, or it is mid-chain and
/// may only capture) and whenever `color` has a capture available. An
/// opponent still mid-chain blocks only captures, not simple moves.
pub fn movers(board: &Board, color: Color) -> Actors {
    let mut movers = Actors::default();

    if board.last_action().is_by(color) {
        return movers;
    }
    if takers(board, color).any_action {
        return movers;
    }

    let open = board.open_squares();
    for direction in ALL_DIRECTIONS {
        movers.set_direction(
            direction,
            shift_toward(open, direction) & eligible_pieces(board, color, direction),
        );
    }

    movers.refresh_any_action();
    movers
}

/// Color, king flag and legal action flags of one square.
pub fn square_info(board: &Board, square: Square) -> SquareInfo {
    let mut info = SquareInfo::default();
    if !is_playable(square) {
        return info;
    }

    let mask = bit_mask(square);
    info.is_black = board.black & mask != 0;
    info.is_white = board.white & mask != 0;
    info.is_king = board.kings & mask != 0;

    let Some(color) = info.color() else {
        return info;
    };

    let movers = movers(board, color);
    let takers = takers(board, color);
    info.move_nw = movers.nw & mask != 0;
    info.move_ne = movers.ne & mask != 0;
    info.move_sw = movers.sw & mask != 0;
    info.move_se = movers.se & mask != 0;
    info.take_nw = takers.nw & mask != 0;
    info.take_ne = takers.ne & mask != 0;
    info.take_sw = takers.sw & mask != 0;
    info.take_se = takers.se & mask != 0;
    info
}
