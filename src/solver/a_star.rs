use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use prettytable::{format, Cell as TableCell, Row, Table};
use separator::Separatable;

use crate::state::PuzzleState;

#[cfg(feature = "graph")]
use super::graph::Graph;
use super::heuristic::Heuristic;
use super::store::{StateId, StateStore};

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Returns true when the node is the first at its depth.
    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<usize>, node: &SearchNode) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"]
                .iter()
                .map(|title| TableCell::new(title))
                .collect(),
        ));

        let at = |counts: &[usize], depth: usize| counts.get(depth).cloned().unwrap_or(0);
        // created is always the longest, a state is created before it's reached
        for depth in 0..self.created_states.len() {
            let created = at(&self.created_states, depth);
            let visited = at(&self.visited_states, depth);
            let duplicates = at(&self.duplicate_states, depth);
            let unknown = created.saturating_sub(visited + duplicates);
            table.add_row(Row::new(vec![
                TableCell::new(&format!("{}:", depth)),
                TableCell::new(&created.separated_string()),
                TableCell::new(&visited.separated_string()),
                TableCell::new(&duplicates.separated_string()),
                TableCell::new(&unknown.separated_string()),
            ]));
        }
        table
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let unknown = created.saturating_sub(visited + duplicates);
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", unknown.separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created())?;
        writeln!(f, "total reached duplicates: {}", self.total_reached_duplicates())?;
        writeln!(f, "total unique visited: {}", self.total_unique_visited())
    }
}

/// Frontier entry. `cost` is `dist + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) state: StateId,
    pub(crate) dist: u32,
    pub(crate) cost: u32,
}

impl SearchNode {
    pub(crate) fn new(state: StateId, dist: u32, h: u32) -> Self {
        SearchNode {
            state,
            dist,
            cost: dist + h,
        }
    }

    pub(crate) fn h(&self) -> u32 {
        self.cost - self.dist
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other
            .cost
            .cmp(&self.cost)
            // prefer nodes closer to a goal when the cost is the same
            .then_with(|| self.dist.cmp(&other.dist))
            // so that the order doesn't depend on heap internals
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* over single moves. Returns the states from `start` to a goal state inclusive.
pub(crate) fn search<H>(
    start: &PuzzleState,
    heuristic: &mut H,
    print_status: bool,
) -> (Option<Vec<PuzzleState>>, Stats)
where
    H: Heuristic + ?Sized,
{
    debug!("Search called");

    let mut stats = Stats::new();

    let start_h = match heuristic.estimate(start) {
        Some(h) => h,
        None => {
            debug!("Start state can't be solved");
            return (None, stats);
        }
    };

    // every map is keyed by interned ids only, never by the states themselves
    let mut store = StateStore::new();
    let mut costs: FnvHashMap<StateId, u32> = FnvHashMap::default();
    let mut prevs: FnvHashMap<StateId, StateId> = FnvHashMap::default();
    let mut to_visit = BinaryHeap::new();

    #[cfg(feature = "graph")]
    let mut graph = Graph::new();

    let start_id = store.intern(start.clone());
    costs.insert(start_id, 0);
    let start_node = SearchNode::new(start_id, 0, start_h);
    stats.add_created(&start_node);
    to_visit.push(start_node);

    #[cfg(feature = "graph")]
    graph.relaxed(start_node, &store[start_id], None);

    let mut best_h = start_h;
    let mut iterations: u64 = 0;

    while let Some(cur_node) = to_visit.pop() {
        if cur_node.dist > costs[&cur_node.state] {
            // a shorter path to this state has been found since the node was queued
            stats.add_reached_duplicate(&cur_node);
            #[cfg(feature = "graph")]
            graph.mark_duplicate(cur_node);
            continue;
        }
        stats.add_unique_visited(&cur_node);
        iterations += 1;
        #[cfg(feature = "graph")]
        graph.mark_unique(cur_node);

        if store[cur_node.state].is_goal() {
            debug!("Solved, backtracking path");
            #[cfg(feature = "graph")]
            graph.draw_logged();
            return (
                Some(backtrack_path(&store, &prevs, cur_node.state)),
                stats,
            );
        }

        let new_dist = cur_node.dist + 1;
        for child in store[cur_node.state].successors() {
            // from here on only the canonical copy is used
            let child_id = store.intern(child);
            if let Some(&old_dist) = costs.get(&child_id) {
                if old_dist <= new_dist {
                    continue;
                }
            }
            costs.insert(child_id, new_dist);
            prevs.insert(child_id, cur_node.state);

            let h = match heuristic.estimate(&store[child_id]) {
                Some(h) => h,
                None => continue,
            };
            let next_node = SearchNode::new(child_id, new_dist, h);

            if h < best_h {
                best_h = h;
                if print_status {
                    println!("Iteration #{}, heuristic: {}", iterations, h);
                    println!("{}", store[child_id]);
                }
            }

            stats.add_created(&next_node);
            to_visit.push(next_node);

            #[cfg(feature = "graph")]
            graph.relaxed(next_node, &store[child_id], Some(cur_node.state));
        }
    }

    debug!("No states left, {} unique states interned", store.len());
    #[cfg(feature = "graph")]
    graph.draw_logged();
    (None, stats)
}

fn backtrack_path(
    store: &StateStore<PuzzleState>,
    prevs: &FnvHashMap<StateId, StateId>,
    final_state: StateId,
) -> Vec<PuzzleState> {
    // the start state is the only one without prev
    let mut ret = vec![store[final_state].clone()];
    let mut cur = final_state;
    while let Some(&prev) = prevs.get(&cur) {
        ret.push(store[prev].clone());
        cur = prev;
    }
    ret.reverse();
    ret
}
