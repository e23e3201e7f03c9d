//! Canonical checkers-rule constants and bit helpers.
//!
//! Squares are laid out with padding bits so that every diagonal neighbour of
//! a playable square sits at a constant offset (NW +4, NE +5, SW -5, SE -4):
//!
//! ```text
//!    .  37  .  38  .  39  .  40    <- black promotion row
//!   32  .  33  .  34  .  35  .
//!    .  28  .  29  .  30  .  31
//!   23  .  24  .  25  .  26  .
//!    .  19  .  20  .  21  .  22
//!   14  .  15  .  16  .  17  .
//!    .  10  .  11  .  12  .  13
//!    5  .   6  .   7  .   8  .     <- white promotion row
//! ```
//!
//! Indices 0..=4, 9, 18, 27, 36 and 41..=45 are placeholders and never hold a
//! piece. Shifted sets are always intersected with [`ON_BOARD`] so that steps
//! off an edge are discarded rather than wrapped.

use crate::game_state::checkers_types::{Color, Direction, Square};

/// 46-bit occupancy set stored in the low bits of a `u64`.
pub type Position = u64;

/// Number of addressable square indices.
pub const BOARD_SIZE: usize = 46;

/// Black promotion squares.
pub const TOP_ROW: Position = 0x1E0_0000_0000;
/// White promotion squares.
pub const BOT_ROW: Position = 0x000_0000_01E0;

/// Every square a piece can occupy.
pub const ON_BOARD: Position = 0x1EF_F7FB_FDE0;

pub const BLACK_START: Position = 0x000_0003_FDE0;
pub const WHITE_START: Position = 0x1EF_F000_0000;
pub const EMPTY_BOARD: Position = 0;

#[inline]
pub const fn bit_mask(square: Square) -> Position {
    1 << square
}

#[inline]
pub const fn is_playable(square: Square) -> bool {
    square < BOARD_SIZE && ON_BOARD & bit_mask(square) != 0
}

/// Promotion row for pieces of the given color.
#[inline]
pub const fn promotion_row(color: Color) -> Position {
    match color {
        Color::Black => TOP_ROW,
        Color::White => BOT_ROW,
    }
}

/// Squares `s` such that `s + direction` is in `targets`, restricted to the board.
#[inline]
pub const fn shift_toward(targets: Position, direction: Direction) -> Position {
    let shifted = if direction >= 0 {
        targets >> direction
    } else {
        targets << -direction
    };
    shifted & ON_BOARD
}

/// Iterate the square indices set in `bits`, lowest first.
pub fn squares_of(mut bits: Position) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bits == 0 {
            None
        } else {
            let square = bits.trailing_zeros() as Square;
            bits &= bits - 1;
            Some(square)
        }
    })
}
