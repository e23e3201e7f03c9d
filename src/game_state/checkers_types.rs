//! Core value types shared by the board, move generation and search layers.

pub use crate::game_state::board::Board;
pub use crate::game_state::checkers_rules::Position;

/// Side owning a piece or an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board square index (`0..=45`). Only squares inside `ON_BOARD` hold pieces.
pub type Square = usize;

/// Signed square offset of one diagonal step.
pub type Direction = i32;

pub const NW: Direction = 4;
pub const NE: Direction = 5;
pub const SW: Direction = -5;
pub const SE: Direction = -4;

/// All four diagonals in the order used for enumeration.
pub const ALL_DIRECTIONS: [Direction; 4] = [NW, NE, SW, SE];

/// Offset a square by `steps` diagonal steps, `None` if it leaves the index range.
#[inline]
pub fn offset_square(square: Square, direction: Direction, steps: i32) -> Option<Square> {
    let target = square as i64 + i64::from(direction) * i64::from(steps);
    if (0..crate::game_state::checkers_rules::BOARD_SIZE as i64).contains(&target) {
        Some(target as Square)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Placeholder kind of the history seed; never produced by a real action.
    Sentinel,
    Move,
    Take,
}

/// One recorded action. Immutable once it is in a board history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub color: Option<Color>,
    pub kind: ActionKind,
    pub src: Square,
    pub dst: Square,
    pub promoted: bool,
}

impl Action {
    /// History seed: no color, no kind.
    pub const SENTINEL: Action = Action {
        color: None,
        kind: ActionKind::Sentinel,
        src: 0,
        dst: 0,
        promoted: false,
    };

    #[inline]
    pub fn is_by(&self, color: Color) -> bool {
        self.color == Some(color)
    }

    /// True when this action finished `color`'s turn: a move or any promotion.
    #[inline]
    pub fn ends_turn_of(&self, color: Color) -> bool {
        self.is_by(color) && (self.kind == ActionKind::Move || self.promoted)
    }

    /// Landing square of an unfinished capture chain by `color`.
    #[inline]
    pub fn chain_square_of(&self, color: Color) -> Option<Square> {
        if self.is_by(color) && self.kind == ActionKind::Take && !self.promoted {
            Some(self.dst)
        } else {
            None
        }
    }

    /// Direction of the diagonal travelled, `None` for the sentinel.
    pub fn direction(&self) -> Option<Direction> {
        let delta = self.dst as i32 - self.src as i32;
        let step = match self.kind {
            ActionKind::Sentinel => return None,
            ActionKind::Move => delta,
            ActionKind::Take => delta / 2,
        };
        ALL_DIRECTIONS.into_iter().find(|&d| d == step)
    }

    /// Midpoint square jumped over by a take.
    pub fn captured_square(&self) -> Option<Square> {
        match self.kind {
            ActionKind::Take => Some((self.src + self.dst) / 2),
            _ => None,
        }
    }
}

/// Derived turn status of one color, computed from the last history entry only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The color may act normally.
    Open,
    /// The color already moved or promoted; nothing more this ply.
    Spent,
    /// The color is mid-capture; only the piece on this square may take again.
    Chain(Square),
}

/// Resolved snapshot of one square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareInfo {
    pub is_black: bool,
    pub is_white: bool,
    pub is_king: bool,
    pub move_nw: bool,
    pub move_ne: bool,
    pub move_sw: bool,
    pub move_se: bool,
    pub take_nw: bool,
    pub take_ne: bool,
    pub take_sw: bool,
    pub take_se: bool,
}

impl SquareInfo {
    pub fn color(&self) -> Option<Color> {
        if self.is_black {
            Some(Color::Black)
        } else if self.is_white {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        match direction {
            NW => self.move_nw,
            NE => self.move_ne,
            SW => self.move_sw,
            SE => self.move_se,
            _ => false,
        }
    }

    pub fn can_take(&self, direction: Direction) -> bool {
        match direction {
            NW => self.take_nw,
            NE => self.take_ne,
            SW => self.take_sw,
            SE => self.take_se,
            _ => false,
        }
    }

    pub fn has_any_action(&self) -> bool {
        ALL_DIRECTIONS
            .into_iter()
            .any(|d| self.can_move(d) || self.can_take(d))
    }
}

/// Per-diagonal sets of pieces able to act this ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actors {
    pub nw: Position,
    pub ne: Position,
    pub sw: Position,
    pub se: Position,
    pub any_action: bool,
}

impl Actors {
    pub(crate) fn set_direction(&mut self, direction: Direction, actors: Position) {
        match direction {
            NW => self.nw = actors,
            NE => self.ne = actors,
            SW => self.sw = actors,
            SE => self.se = actors,
            _ => {}
        }
    }

    #[inline]
    pub fn all(&self) -> Position {
        self.nw | self.ne | self.sw | self.se
    }

    pub(crate) fn refresh_any_action(&mut self) {
        self.any_action = self.all() != 0;
    }
}
