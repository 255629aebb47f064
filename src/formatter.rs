use std::fmt::{self, Debug, Display, Formatter};

use crate::config::{CellChars, Format};
use crate::data::{Cell, Pos};
use crate::state::PuzzleState;

pub struct StateFormatter<'a> {
    state: &'a PuzzleState,
    chars: CellChars,
}

impl<'a> StateFormatter<'a> {
    pub fn new(state: &'a PuzzleState, chars: CellChars) -> Self {
        Self { state, chars }
    }

    fn char_at(&self, pos: Pos) -> char {
        let cell = self.state.board()[pos];
        if pos == self.state.player() {
            return match (cell, self.chars.player_on_goal) {
                (Cell::Goal, Some(c)) => c,
                _ => self.chars.player,
            };
        }
        match cell {
            Cell::Empty => self.chars.empty,
            Cell::Wall => self.chars.wall,
            Cell::Box => self.chars.box_,
            Cell::BoxOnGoal => self.chars.box_on_goal,
            Cell::Goal => self.chars.goal,
        }
    }
}

impl<'a> Display for StateFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.state.board();
        for y in 0..board.height() {
            for x in 0..board.width() {
                write!(f, "{}", self.char_at(Pos::new(x as i32, y as i32)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Debug for StateFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PuzzleState {
    pub fn xsb(&self) -> StateFormatter<'_> {
        StateFormatter::new(self, CellChars::xsb())
    }

    pub fn format(&self, format: Format) -> StateFormatter<'_> {
        StateFormatter::new(self, format.chars())
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
