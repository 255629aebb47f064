use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

/// Coordinates on the board, `x` is the column, `y` is the row.
///
/// Ordered by `x` first, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Direction of a single step from `self` to an adjacent `other`.
    pub fn dir_to(self, other: Pos) -> Option<Dir> {
        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Some(Dir::Up),
            (1, 0) => Some(Dir::Right),
            (0, 1) => Some(Dir::Down),
            (-1, 0) => Some(Dir::Left),
            _ => None,
        }
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        self + dir.delta()
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse().delta()
    }
}

/// The four player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

/// The order in which successors are generated - only affects tie-breaking.
pub const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl Dir {
    /// Unit delta, `y` grows downwards.
    pub fn delta(self) -> Pos {
        match self {
            Dir::Up => Pos::new(0, -1),
            Dir::Right => Pos::new(1, 0),
            Dir::Down => Pos::new(0, 1),
            Dir::Left => Pos::new(-1, 0),
        }
    }

    /// Lowercase initial as used in move strings.
    pub fn to_char(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Right => 'r',
            Dir::Down => 'd',
            Dir::Left => 'l',
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Contents of one board cell. The player is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Box,
    BoxOnGoal,
    Goal,
}

impl Cell {
    pub fn is_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnGoal
    }

    pub fn is_goal(self) -> bool {
        self == Cell::Goal || self == Cell::BoxOnGoal
    }

    /// Empty or goal - a box can be pushed here and the player can step here.
    pub fn is_free(self) -> bool {
        self == Cell::Empty || self == Cell::Goal
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// What happened to boxes when an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    Step,
    PushOntoEmpty,
    PushOntoGoal,
}

impl MoveClass {
    pub fn is_push(self) -> bool {
        self != MoveClass::Step
    }
}
