//! Fixed-depth minimax over an owned tree of board states.
//!
//! The tree is rebuilt on every call and never shared between searches:
//!
//! 1. **Expand**: the current node gets the successors of the color being
//!    searched for, then each of those children also gets the successors of
//!    the opposite color, and expansion recurses into every child with the
//!    counter decremented. Which side can actually act on a given board is
//!    decided by that board's history, so a child whose turn is spent simply
//!    gets no children from that side while a mid-chain child keeps jumping.
//! 2. **Propagate**: leaves keep their static score; inner nodes take the max
//!    or min of their children, alternating by tree level and starting with
//!    max when searching for black.
//! 3. **Select**: one root child whose propagated score matches the root's is
//!    picked uniformly at random.
//!
//! A node without children is a leaf whether the depth ran out or the side
//! had nothing to do.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::checkers_errors::SearchError;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

/// Largest score gap still treated as a tie at the root.
pub const EVAL_TIE_TOLERANCE: f32 = 1e-4;

const MAX_SENTINEL: f32 = 1e6;

#[derive(Debug, Clone)]
pub struct Node {
    state: Board,
    eval: f32,
    children: Vec<Node>,
}

impl Node {
    fn new<S: BoardScorer + ?Sized>(state: Board, scorer: &S) -> Self {
        let eval = scorer.score(&state);
        Self {
            state,
            eval,
            children: Vec::new(),
        }
    }

    fn find_children<S: BoardScorer + ?Sized>(&mut self, color: Color, scorer: &S) {
        let boards = self.state.get_actions(color);
        self.children.reserve(boards.len());
        self.children
            .extend(boards.into_iter().map(|board| Node::new(board, scorer)));
    }

    #[inline]
    pub fn state(&self) -> &Board {
        &self.state
    }

    #[inline]
    pub fn eval(&self) -> f32 {
        self.eval
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

#[derive(Debug, Clone)]
pub struct MinMax<S: BoardScorer = MaterialScorer> {
    playing_for: Color,
    search_depth: u8,
    scorer: S,
}

impl MinMax<MaterialScorer> {
    pub fn new(playing_for: Color, search_depth: u8) -> Self {
        Self::with_scorer(playing_for, search_depth, MaterialScorer::default())
    }
}

impl<S: BoardScorer> MinMax<S> {
    pub fn with_scorer(playing_for: Color, search_depth: u8, scorer: S) -> Self {
        Self {
            playing_for,
            search_depth,
            scorer,
        }
    }

    #[inline]
    pub fn playing_for(&self) -> Color {
        self.playing_for
    }

    #[inline]
    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    /// Pick the next board using the thread-local generator for tie-breaks.
    pub fn best_move(&self, state: &Board) -> Result<Board, SearchError> {
        self.best_move_with_rng(state, &mut rand::rng())
    }

    /// Pick the next board, breaking ties among equally scored children with `rng`.
    pub fn best_move_with_rng<R: Rng + ?Sized>(
        &self,
        state: &Board,
        rng: &mut R,
    ) -> Result<Board, SearchError> {
        let root = self.build_tree(state);

        let candidates: Vec<&Node> = root
            .children
            .iter()
            .filter(|child| (child.eval - root.eval).abs() <= EVAL_TIE_TOLERANCE)
            .collect();

        log::debug!(
            "minimax {:?} depth {}: {} nodes, root eval {}, {} of {} children tied",
            self.playing_for,
            self.search_depth,
            root.node_count(),
            root.eval,
            candidates.len(),
            root.children.len()
        );

        candidates
            .choose(rng)
            .map(|node| node.state.clone())
            .ok_or(SearchError::NoLegalAction(self.playing_for))
    }

    /// Expand and propagate a fresh tree rooted at `state`.
    pub fn build_tree(&self, state: &Board) -> Node {
        let mut root = Node::new(state.clone(), &self.scorer);
        self.expand(&mut root, self.search_depth);
        Self::propagate(&mut root, self.playing_for == Color::Black);
        root
    }

    fn expand(&self, current: &mut Node, counter: u8) {
        if counter == 0 {
            return;
        }

        current.find_children(self.playing_for, &self.scorer);
        for child in current.children.iter_mut() {
            child.find_children(self.playing_for.opposite(), &self.scorer);
            self.expand(child, counter - 1);
        }
    }

    fn propagate(current: &mut Node, maxing: bool) -> f32 {
        if current.children.is_empty() {
            return current.eval;
        }

        if maxing {
            current.eval = -MAX_SENTINEL;
            for child in current.children.iter_mut() {
                let value = Self::propagate(child, false);
                if value > current.eval {
                    current.eval = value;
                }
            }
        } else {
            current.eval = MAX_SENTINEL;
            for child in current.children.iter_mut() {
                let value = Self::propagate(child, true);
                if value < current.eval {
                    current.eval = value;
                }
            }
        }

        current.eval
    }
}
