//! An explicit game tree implementing `GameState`, for exact search checks.

#![allow(dead_code)]

use minimax_core::{GameState, Occupant, Side};

/// A node scores `value` when evaluated; it is terminal when it has no
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: f64,
    pub children: Vec<Node>,
}

pub fn leaf(value: f64) -> Node {
    Node {
        value,
        children: Vec::new(),
    }
}

/// Interior node whose horizon value is 0.
pub fn branch(children: Vec<Node>) -> Node {
    Node {
        value: 0.0,
        children,
    }
}

pub fn branch_valued(value: f64, children: Vec<Node>) -> Node {
    Node { value, children }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TreeError {
    #[error("no child {0} at this node")]
    NoSuchChild(usize),
    #[error("move {0} is poisoned")]
    Poisoned(usize),
    #[error("nothing to undo")]
    EmptyPath,
    #[error("undo refused")]
    UndoRefused,
}

/// Walks a [`Node`] tree; moves are child indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeGame {
    pub root: Node,
    pub path: Vec<usize>,
    pub first_to_move: Side,
    /// Path (from the root) whose final move the rules engine rejects.
    pub poisoned: Option<Vec<usize>>,
    /// Once the poisoned move has been tried, every undo fails too.
    pub jam_undo_after_poison: bool,
    pub poison_hit: bool,
    pub applied: u64,
}

impl TreeGame {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            path: Vec::new(),
            first_to_move: Side::White,
            poisoned: None,
            jam_undo_after_poison: false,
            poison_hit: false,
            applied: 0,
        }
    }

    pub fn black_to_move(mut self) -> Self {
        self.first_to_move = Side::Black;
        self
    }

    pub fn poison(mut self, path: Vec<usize>) -> Self {
        self.poisoned = Some(path);
        self
    }

    pub fn jam_undo(mut self) -> Self {
        self.jam_undo_after_poison = true;
        self
    }

    pub fn current(&self) -> &Node {
        self.path
            .iter()
            .fold(&self.root, |node, &i| &node.children[i])
    }
}

impl GameState for TreeGame {
    type Move = usize;
    type Error = TreeError;

    fn legal_moves(&self) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn make_move(&mut self, mv: &usize) -> Result<(), TreeError> {
        if *mv >= self.current().children.len() {
            return Err(TreeError::NoSuchChild(*mv));
        }
        if let Some(poisoned) = &self.poisoned {
            let mut next = self.path.clone();
            next.push(*mv);
            if &next == poisoned {
                self.poison_hit = true;
                return Err(TreeError::Poisoned(*mv));
            }
        }
        self.path.push(*mv);
        self.applied += 1;
        Ok(())
    }

    fn unmake_move(&mut self) -> Result<(), TreeError> {
        if self.jam_undo_after_poison && self.poison_hit {
            return Err(TreeError::UndoRefused);
        }
        self.path.pop().map(|_| ()).ok_or(TreeError::EmptyPath)
    }

    fn is_terminal(&self) -> bool {
        self.current().children.is_empty()
    }

    fn side_to_move(&self) -> Side {
        if self.path.len() % 2 == 0 {
            self.first_to_move
        } else {
            self.first_to_move.other()
        }
    }

    fn occupants(&self) -> impl Iterator<Item = Occupant> + '_ {
        std::iter::empty()
    }
}

/// Scores the node the game currently sits on.
pub fn node_value(game: &TreeGame) -> f64 {
    game.current().value
}
