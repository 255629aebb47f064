use crate::config::HeuristicKind;
use crate::data::{Cell, Pos};
use crate::state::PuzzleState;

use super::assignment::min_cost_assignment;
use super::push_graph::PushDists;

/// Estimates how many moves are left.
///
/// Must return 0 for goal states and never overestimate, otherwise the solution might not be optimal.
/// `None` means the state provably can't be solved.
pub trait Heuristic {
    fn estimate(&mut self, state: &PuzzleState) -> Option<u32>;
}

impl HeuristicKind {
    pub fn create(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Simple => Box::new(SimpleHeuristic),
            HeuristicKind::MinCost => Box::new(MinCostHeuristic::new()),
        }
    }
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn estimate(&mut self, state: &PuzzleState) -> Option<u32> {
        (**self).estimate(state)
    }
}

/// Player to closest box plus closest box to closest goal, all Manhattan distances.
///
/// The player only has to get next to the box, so the first part is one less than the distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleHeuristic;

impl Heuristic for SimpleHeuristic {
    fn estimate(&mut self, state: &PuzzleState) -> Option<u32> {
        if state.is_goal() {
            return Some(0);
        }

        let goals: Vec<Pos> = state.goals().collect();
        let mut player_to_box = u32::max_value();
        let mut box_to_goal = u32::max_value();
        for box_pos in state.boxes() {
            if state.board()[box_pos] != Cell::Box {
                continue;
            }
            player_to_box = player_to_box.min(state.player().dist(box_pos));
            for &goal in &goals {
                box_to_goal = box_to_goal.min(box_pos.dist(goal));
            }
        }

        if box_to_goal == u32::max_value() {
            // boxes but no goals
            return None;
        }
        Some(player_to_box.saturating_sub(1) + box_to_goal)
    }
}

/// Lower bound from the cheapest assignment of boxes to distinct goals
/// using push distances that respect walls, plus the player's way to the closest box.
///
/// Push distances are computed on the first call and reused,
/// one instance must only be used with one level.
#[derive(Debug, Default)]
pub struct MinCostHeuristic {
    push_dists: Option<PushDists>,
    last_boxes: Vec<Pos>,
    last_assignment: Option<u32>,
    assignments_computed: usize,
}

impl MinCostHeuristic {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the box set changed and the assignment had to be solved.
    pub fn assignments_computed(&self) -> usize {
        self.assignments_computed
    }

    /// Minimum total pushes to get every box onto a distinct goal, `None` if impossible.
    pub fn assignment_bound(&mut self, state: &PuzzleState) -> Option<u32> {
        let push_dists = self.push_dists.get_or_insert_with(|| {
            debug!("Precomputing push distances");
            PushDists::new(state.board())
        });
        debug_assert!(
            push_dists.fits(state.board()),
            "Heuristic reused for a different level"
        );

        let boxes: Vec<Pos> = state.boxes().collect();
        if self.assignments_computed == 0 || boxes != self.last_boxes {
            let costs: Vec<Vec<Option<u32>>> = boxes
                .iter()
                .map(|&box_pos| {
                    (0..push_dists.goals().len())
                        .map(|goal| push_dists.dist(box_pos, goal).map(u32::from))
                        .collect()
                })
                .collect();
            self.last_assignment = min_cost_assignment(&costs);
            self.last_boxes = boxes;
            self.assignments_computed += 1;
        }
        self.last_assignment
    }
}

impl Heuristic for MinCostHeuristic {
    fn estimate(&mut self, state: &PuzzleState) -> Option<u32> {
        if state.is_goal() {
            return Some(0);
        }

        let pushes = self.assignment_bound(state)?;
        let player_to_box = state
            .boxes()
            .map(|box_pos| state.player().dist(box_pos))
            .min()
            .map_or(0, |dist| dist.saturating_sub(1));
        Some(pushes + player_to_box)
    }
}
