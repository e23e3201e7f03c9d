//! Checkers board state.
//!
//! `Board` holds three occupancy sets (black pieces, white pieces and the
//! kings subset of both) plus an append-only action history. There is no
//! explicit side-to-move field: whose turn it is, and whether a capture chain
//! is running, are derived from the last history entry by [`Board::turn_state`].
//! History is seeded with [`Action::SENTINEL`] on construction, so it is never
//! empty.

use crate::checkers_errors::{ActionError, BoardError, SearchError};
use crate::game_state::checkers_rules::*;
use crate::game_state::checkers_types::*;
use crate::move_generation::{legal_action_apply, legal_action_checks, legal_action_generator};
use crate::search::minimax::MinMax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) black: Position,
    pub(crate) white: Position,
    pub(crate) kings: Position,
    pub(crate) history: Vec<Action>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
            kings: EMPTY_BOARD,
            history: vec![Action::SENTINEL],
        }
    }
}

impl Board {
    /// Standard opening position.
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// Build a board from raw occupancy sets with a fresh history.
    pub fn from_positions(
        black: Position,
        white: Position,
        kings: Position,
    ) -> Result<Self, BoardError> {
        let board = Self {
            black,
            white,
            kings,
            history: vec![Action::SENTINEL],
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Build a board from square lists, for setting up positions by hand.
    pub fn from_squares(
        black: &[Square],
        white: &[Square],
        kings: &[Square],
    ) -> Result<Self, BoardError> {
        let to_position = |squares: &[Square]| -> Result<Position, BoardError> {
            squares.iter().try_fold(EMPTY_BOARD, |acc, &sq| {
                if is_playable(sq) {
                    Ok(acc | bit_mask(sq))
                } else {
                    Err(BoardError::OffBoardSquares(if sq < 64 { bit_mask(sq) } else { 0 }))
                }
            })
        };
        Self::from_positions(to_position(black)?, to_position(white)?, to_position(kings)?)
    }

    /// Verify the occupancy invariants: colors disjoint, kings inside pieces,
    /// everything on playable squares.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        let stray = (self.black | self.white | self.kings) & !ON_BOARD;
        if stray != 0 {
            return Err(BoardError::OffBoardSquares(stray));
        }
        let overlap = self.black & self.white;
        if overlap != 0 {
            return Err(BoardError::OverlappingColors(overlap));
        }
        let orphan_kings = self.kings & !(self.black | self.white);
        if orphan_kings != 0 {
            return Err(BoardError::KingWithoutPiece(orphan_kings));
        }
        Ok(())
    }

    // --- Read accessors ---

    #[inline]
    pub fn get_black(&self) -> Position {
        self.black
    }

    #[inline]
    pub fn get_white(&self) -> Position {
        self.white
    }

    #[inline]
    pub fn get_kings(&self) -> Position {
        self.kings
    }

    #[inline]
    pub fn get_history(&self) -> &[Action] {
        &self.history
    }

    #[inline]
    pub fn pieces_of(&self, color: Color) -> Position {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    #[inline]
    pub fn count_pieces(&self, color: Color) -> u32 {
        self.pieces_of(color).count_ones()
    }

    #[inline]
    pub fn count_kings(&self, color: Color) -> u32 {
        (self.pieces_of(color) & self.kings).count_ones()
    }

    /// Empty playable squares.
    #[inline]
    pub fn open_squares(&self) -> Position {
        !self.black & !self.white & ON_BOARD
    }

    #[inline]
    pub fn last_action(&self) -> &Action {
        self.history.last().unwrap_or(&Action::SENTINEL)
    }

    /// Turn status of `color`, a pure function of the last history entry.
    pub fn turn_state(&self, color: Color) -> TurnState {
        let last = self.last_action();
        if last.ends_turn_of(color) {
            TurnState::Spent
        } else if let Some(square) = last.chain_square_of(color) {
            TurnState::Chain(square)
        } else {
            TurnState::Open
        }
    }

    // --- Rules queries ---

    pub fn get_square_info(&self, square: Square) -> SquareInfo {
        legal_action_checks::square_info(self, square)
    }

    pub fn get_movers(&self, color: Color) -> Actors {
        legal_action_checks::movers(self, color)
    }

    pub fn get_takers(&self, color: Color) -> Actors {
        legal_action_checks::takers(self, color)
    }

    // --- Mutators ---

    /// Apply a simple move. On error the board is unchanged.
    pub fn player_move(
        &mut self,
        square: Square,
        direction: Direction,
    ) -> Result<Action, ActionError> {
        legal_action_apply::player_move(self, square, direction, None)
    }

    /// Apply a single capture. On error the board is unchanged.
    pub fn player_take(
        &mut self,
        square: Square,
        direction: Direction,
    ) -> Result<Action, ActionError> {
        legal_action_apply::player_take(self, square, direction, None)
    }

    /// Re-apply a recorded action to this board.
    pub fn replay(&mut self, action: &Action) -> Result<Action, ActionError> {
        let direction = action
            .direction()
            .ok_or(ActionError::InvalidDirection(action.dst as i32 - action.src as i32))?;
        match action.kind {
            ActionKind::Take => self.player_take(action.src, direction),
            _ => self.player_move(action.src, direction),
        }
    }

    // --- Successors ---

    pub fn get_black_actions(&self) -> Vec<Board> {
        legal_action_generator::successors(self, Color::Black)
    }

    pub fn get_white_actions(&self) -> Vec<Board> {
        legal_action_generator::successors(self, Color::White)
    }

    pub fn get_actions(&self, color: Color) -> Vec<Board> {
        legal_action_generator::successors(self, color)
    }

    // --- Engine ---

    /// Search `depth` levels for black and return the chosen successor.
    pub fn ai_black_action(&self, depth: u8) -> Result<Board, SearchError> {
        MinMax::new(Color::Black, depth).best_move(self)
    }

    /// Search `depth` levels for white and return the chosen successor.
    pub fn ai_white_action(&self, depth: u8) -> Result<Board, SearchError> {
        MinMax::new(Color::White, depth).best_move(self)
    }
}
