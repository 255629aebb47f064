use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::{CellChars, Format};
use crate::data::{Cell, Pos};
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    RowWidth(usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
    Empty,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::RowWidth(r) => write!(f, "Row {} has a different width than the first row", r),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::Empty => write!(f, "Empty level"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for PuzzleState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, Format::Xsb)
    }
}

pub fn parse(level: &str, format: Format) -> Result<PuzzleState, ParserErr> {
    parse_with_chars(level, &format.chars())
}

pub fn parse_with_chars(level: &str, chars: &CellChars) -> Result<PuzzleState, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches(|c| c == '\n' || c == '\r');
    if level.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut cells = Vec::new();
    let mut player = None;
    let mut width = None;
    let mut height = 0;

    for (r, line) in level.lines().enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let line_width = line.chars().count();
        if line_width > MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        match width {
            None => width = Some(line_width),
            Some(w) if w != line_width => return Err(ParserErr::RowWidth(r)),
            Some(_) => {}
        }

        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(c as i32, r as i32);
            let cell = if cur_char == chars.wall {
                Cell::Wall
            } else if cur_char == chars.empty || chars.empty_aliases.contains(&cur_char) {
                Cell::Empty
            } else if cur_char == chars.box_ {
                Cell::Box
            } else if cur_char == chars.box_on_goal {
                Cell::BoxOnGoal
            } else if cur_char == chars.goal {
                Cell::Goal
            } else if cur_char == chars.player || Some(cur_char) == chars.player_on_goal {
                if player.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player = Some(pos);
                if cur_char == chars.player {
                    Cell::Empty
                } else {
                    Cell::Goal
                }
            } else {
                return Err(ParserErr::Pos(r, c));
            };
            cells.push(cell);
        }
        height += 1;
    }

    let player = player.ok_or(ParserErr::NoPlayer)?;
    let width = width.ok_or(ParserErr::Empty)?;
    let board = Vec2d::from_vec(cells, width, height).ok_or(ParserErr::Empty)?;

    let state = PuzzleState::new(board, player);
    let goal_cnt = state.goals().count();
    if state.box_count() != goal_cnt {
        warn!(
            "Level has {} boxes but {} goals",
            state.box_count(),
            goal_cnt
        );
    }
    Ok(state)
}
