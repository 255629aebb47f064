use std::collections::VecDeque;

use crate::data::{Cell, Pos, DIRECTIONS};
use crate::state::Board;
use crate::vec2d::Vec2d;

fn is_floor(board: &Board, pos: Pos) -> bool {
    board.get(pos).map_or(false, |&cell| cell != Cell::Wall)
}

/// Which cells a lone box can be pushed between.
///
/// A box on `pos` can be pushed to `pos + dir` if both `pos - dir` (where the player stands)
/// and `pos + dir` are not walls. Other boxes and whether the player can actually
/// get behind the box are ignored so distances in this graph never overestimate.
#[derive(Debug, Clone)]
pub struct PushGraph {
    cells: Vec<Pos>,
    edges: Vec2d<Vec<Pos>>,
    reverse_edges: Vec2d<Vec<Pos>>,
}

impl PushGraph {
    pub fn new(board: &Board) -> Self {
        let cells: Vec<_> = board
            .positions()
            .filter(|&pos| is_floor(board, pos))
            .collect();

        let mut edges: Vec2d<Vec<Pos>> = board.scratchpad();
        let mut reverse_edges: Vec2d<Vec<Pos>> = board.scratchpad();
        for &box_pos in &cells {
            for &dir in &DIRECTIONS {
                let player_pos = box_pos - dir;
                let push_dest = box_pos + dir;
                if is_floor(board, player_pos) && is_floor(board, push_dest) {
                    edges[box_pos].push(push_dest);
                    reverse_edges[push_dest].push(box_pos);
                }
            }
        }

        PushGraph {
            cells,
            edges,
            reverse_edges,
        }
    }

    /// All non-wall cells.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn pushes_from(&self, pos: Pos) -> &[Pos] {
        &self.edges[pos]
    }

    pub fn pushes_to(&self, pos: Pos) -> &[Pos] {
        &self.reverse_edges[pos]
    }

    /// Number of pushes needed to get a box from each cell to `goal`, BFS over reversed edges.
    pub fn dists_to(&self, goal: Pos) -> Vec2d<Option<u16>> {
        let mut dists: Vec2d<Option<u16>> = self.edges.scratchpad();
        dists[goal] = Some(0);

        let mut to_visit = VecDeque::new();
        to_visit.push_back((goal, 0));
        while let Some((cur, dist)) = to_visit.pop_front() {
            for &prev in self.pushes_to(cur) {
                if dists[prev].is_none() {
                    dists[prev] = Some(dist + 1);
                    to_visit.push_back((prev, dist + 1));
                }
            }
        }

        dists
    }
}

/// Push distance fields, one per goal. Depends only on walls and goals, not on boxes.
#[derive(Debug, Clone)]
pub struct PushDists {
    width: usize,
    height: usize,
    goals: Vec<Pos>,
    dists: Vec<Vec2d<Option<u16>>>,
}

impl PushDists {
    #[inline(never)] // this is called only once and this way it's easier to see in callgrind
    pub fn new(board: &Board) -> Self {
        let graph = PushGraph::new(board);
        let goals: Vec<_> = graph
            .cells()
            .iter()
            .cloned()
            .filter(|&pos| board[pos].is_goal())
            .collect();
        let dists = goals.iter().map(|&goal| graph.dists_to(goal)).collect();

        debug!(
            "Push distances computed: {} cells, {} goals",
            graph.cells().len(),
            goals.len()
        );

        PushDists {
            width: board.width(),
            height: board.height(),
            goals,
            dists,
        }
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    /// Only valid for boards with the same walls and goals as the one used to compute this.
    pub fn fits(&self, board: &Board) -> bool {
        self.width == board.width() && self.height == board.height()
    }

    pub fn dist(&self, from: Pos, goal_index: usize) -> Option<u16> {
        self.dists[goal_index][from]
    }

    pub fn closest_goal_dist(&self, from: Pos) -> Option<u16> {
        (0..self.goals.len())
            .filter_map(|i| self.dist(from, i))
            .min()
    }
}
