use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

use crate::data::Dir;
use crate::state::PuzzleState;

/// One player step. Pushes are written in uppercase (`R`), steps in lowercase (`r`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }

    /// The move leading from `old` to the adjacent `new`.
    ///
    /// Derived from the player position delta, only meant for printing.
    pub fn between(old: &PuzzleState, new: &PuzzleState) -> Option<Move> {
        let dir = old.player().dir_to(new.player())?;
        let is_push = old.cell(new.player()).map_or(false, |cell| cell.is_box());
        Some(Move::new(dir, is_push))
    }

    pub fn to_char(self) -> char {
        let c = self.dir.to_char();
        if self.is_push {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A solution or the moves made so far in a game.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    /// `None` if two consecutive states are not one move apart.
    pub fn from_path(states: &[PuzzleState]) -> Option<Moves> {
        states
            .windows(2)
            .map(|pair| Move::between(&pair[0], &pair[1]))
            .collect::<Option<Vec<_>>>()
            .map(Moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|mov| mov.is_push).count()
    }

    pub fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }
}

impl Deref for Moves {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.0
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|mov| mov.to_char()).collect();
        f.write_str(&s)
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Moves({})", self)
    }
}
