use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

use crate::data::{Cell, Dir, MoveClass, Pos, DIRECTIONS};
use crate::vec2d::Vec2d;

pub type Board = Vec2d<Cell>;

/// The whole game state - the board including boxes and the player position.
///
/// The cell under the player is always `Empty` or `Goal`.
/// Boxes are only ever moved by `apply`, never created or destroyed.
#[derive(Clone, PartialEq, Eq)]
pub struct PuzzleState {
    board: Board,
    player: Pos,
}

impl PuzzleState {
    pub fn new(board: Board, player: Pos) -> Self {
        PuzzleState { board, player }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.board.get(pos).cloned()
    }

    /// Outside of the board counts as wall.
    fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos).map_or(true, |cell| cell == Cell::Wall)
    }

    pub fn boxes(&self) -> impl Iterator<Item = Pos> + '_ {
        self.board
            .positions()
            .filter(move |&pos| self.board[pos].is_box())
    }

    pub fn goals(&self) -> impl Iterator<Item = Pos> + '_ {
        self.board
            .positions()
            .filter(move |&pos| self.board[pos].is_goal())
    }

    /// Boxes both on and off goals.
    pub fn box_count(&self) -> usize {
        self.board.cells().iter().filter(|cell| cell.is_box()).count()
    }

    pub fn is_legal(&self, dir: Dir) -> bool {
        let dest = self.player + dir;
        match self.cell(dest) {
            Some(cell) if cell.is_free() => true,
            Some(cell) if cell.is_box() => self.cell(dest + dir).map_or(false, Cell::is_free),
            _ => false,
        }
    }

    /// Panics if the action is not legal.
    pub fn apply(&mut self, dir: Dir) -> MoveClass {
        assert!(self.is_legal(dir), "Illegal action {:?} from {:?}", dir, self.player);

        let dest = self.player + dir;
        self.player = dest;

        let pushed = self.board[dest];
        if !pushed.is_box() {
            return MoveClass::Step;
        }
        self.board[dest] = if pushed == Cell::BoxOnGoal {
            Cell::Goal
        } else {
            Cell::Empty
        };

        let push_dest = dest + dir;
        match self.board[push_dest] {
            Cell::Goal => {
                self.board[push_dest] = Cell::BoxOnGoal;
                MoveClass::PushOntoGoal
            }
            Cell::Empty => {
                self.board[push_dest] = Cell::Box;
                MoveClass::PushOntoEmpty
            }
            _ => unreachable!(),
        }
    }

    /// Copy of this state with `dir` applied.
    pub fn child(&self, dir: Dir) -> (PuzzleState, MoveClass) {
        let mut child = self.clone();
        let class = child.apply(dir);
        (child, class)
    }

    /// No box is off goal.
    pub fn is_goal(&self) -> bool {
        !self.board.cells().iter().any(|&cell| cell == Cell::Box)
    }

    /// Incomplete but never wrong: only detects boxes stuck in a corner outside of a goal.
    pub fn is_obviously_deadlocked(&self) -> bool {
        self.board.positions().any(|pos| {
            if self.board[pos] != Cell::Box {
                return false;
            }
            let left = self.is_wall(pos + Dir::Left);
            let right = self.is_wall(pos + Dir::Right);
            let up = self.is_wall(pos + Dir::Up);
            let down = self.is_wall(pos + Dir::Down);
            (left || right) && (up || down)
        })
    }

    pub fn successors(&self) -> Vec<PuzzleState> {
        let mut ret = Vec::with_capacity(4);
        for &dir in &DIRECTIONS {
            if !self.is_legal(dir) {
                continue;
            }
            let (child, _) = self.child(dir);
            if !child.is_obviously_deadlocked() {
                ret.push(child);
            }
        }
        ret
    }

    /// Consistent with `Eq`, combines per-cell hashes so it doesn't depend on iteration order.
    pub fn content_hash(&self) -> u64 {
        let mut ret = fnv_hash(&self.player);
        for (i, cell) in self.board.cells().iter().enumerate() {
            ret ^= fnv_hash(&(i, cell));
        }
        ret
    }
}

fn fnv_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = FnvHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}
