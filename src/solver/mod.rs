pub mod a_star;
pub mod assignment;
pub mod heuristic;
pub mod push_graph;
pub mod store;

#[cfg(feature = "graph")]
mod graph;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::config::HeuristicKind;
use crate::data::Cell;
use crate::moves::Moves;
use crate::state::PuzzleState;
use crate::Solve;

use self::a_star::Stats;
use self::heuristic::Heuristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    PlayerOutOfBounds,
    PlayerBlocked,
    DimensionMismatch,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::PlayerOutOfBounds => write!(f, "Player is outside the board"),
            SolverErr::PlayerBlocked => write!(f, "Player is standing on a wall or a box"),
            SolverErr::DimensionMismatch => {
                write!(f, "Board size doesn't match its dimensions")
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// From the start state to a goal state inclusive, `None` if there's no solution.
    pub path: Option<Vec<PuzzleState>>,
    pub stats: Stats,
    pub heuristic: HeuristicKind,
}

impl SolverOk {
    fn new(path: Option<Vec<PuzzleState>>, stats: Stats, heuristic: HeuristicKind) -> Self {
        Self {
            path,
            stats,
            heuristic,
        }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path.as_ref().and_then(|path| Moves::from_path(path))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "{}: {}", self.heuristic, states.len() - 1)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for PuzzleState {
    fn solve(&self, heuristic: HeuristicKind, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, heuristic, print_status)
    }
}

pub fn solve(
    start: &PuzzleState,
    heuristic: HeuristicKind,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    solve_with(start, &mut *heuristic.create(), print_status)
        .map(|(path, stats)| SolverOk::new(path, stats, heuristic))
}

/// Like `solve` but with a caller provided estimator.
///
/// A fresh estimator should be used for each start state.
pub fn solve_with<H>(
    start: &PuzzleState,
    heuristic: &mut H,
    print_status: bool,
) -> Result<(Option<Vec<PuzzleState>>, Stats), SolverErr>
where
    H: Heuristic + ?Sized,
{
    debug!("Validating start state");
    validate(start)?;
    Ok(a_star::search(start, heuristic, print_status))
}

fn validate(start: &PuzzleState) -> Result<(), SolverErr> {
    let board = start.board();
    if board.cells().len() != board.width() * board.height() {
        return Err(SolverErr::DimensionMismatch);
    }
    match start.cell(start.player()) {
        None => Err(SolverErr::PlayerOutOfBounds),
        Some(Cell::Wall) | Some(Cell::Box) | Some(Cell::BoxOnGoal) => Err(SolverErr::PlayerBlocked),
        Some(_) => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::{Dir, Pos};
    use crate::solver::heuristic::{MinCostHeuristic, SimpleHeuristic};
    use crate::vec2d::Vec2d;

    use super::test_utils::bfs_solution_len;

    const BOTH: [HeuristicKind; 2] = [HeuristicKind::Simple, HeuristicKind::MinCost];

    fn solution_len(level: &str, heuristic: HeuristicKind) -> Option<usize> {
        let start: PuzzleState = level.parse().unwrap();
        let solution = start.solve(heuristic, false).unwrap();
        solution.path.map(|path| path.len() - 1)
    }

    #[test]
    fn one_push() {
        let level = r"
#####
#@$.#
#####
";
        for &heuristic in &BOTH {
            let start: PuzzleState = level.parse().unwrap();
            let solution = solve(&start, heuristic, false).unwrap();
            let path = solution.path.as_ref().unwrap();
            assert_eq!(path.len(), 2);
            assert!(path[1].is_goal());
            assert_eq!(path[1].player(), Pos::new(2, 1));
            assert_eq!(solution.moves().unwrap().to_string(), "R");
        }
    }

    #[test]
    fn deadlock_never_in_path() {
        // walking around the box and pushing it left puts it in a corner
        let level = r"
######
#@$ .#
#    #
######
";
        let start: PuzzleState = level.parse().unwrap();
        let mut dead = start.clone();
        for &dir in &[Dir::Down, Dir::Right, Dir::Right, Dir::Up, Dir::Left] {
            dead.apply(dir);
        }
        assert!(dead.is_obviously_deadlocked());
        assert_eq!(dead.player(), Pos::new(2, 1));

        for &heuristic in &BOTH {
            let path = start.solve(heuristic, false).unwrap().path.unwrap();
            assert!(!path.contains(&dead));
            assert!(path.iter().all(|state| !state.is_obviously_deadlocked()));
        }
    }

    #[test]
    fn already_solved() {
        let level = r"
#####
#@ *#
#####
";
        for &heuristic in &BOTH {
            let start: PuzzleState = level.parse().unwrap();
            let solution = start.solve(heuristic, false).unwrap();
            assert_eq!(solution.path, Some(vec![start]));
            assert_eq!(solution.moves().unwrap().move_cnt(), 0);
        }
    }

    #[test]
    fn two_boxes_estimates() {
        let level = r"
#######
#@ $ .#
#     #
#  $ .#
#######
";
        let start: PuzzleState = level.parse().unwrap();
        let real = bfs_solution_len(&start, 100_000).unwrap() as u32;

        let simple = SimpleHeuristic.estimate(&start).unwrap();
        let mut min_cost = MinCostHeuristic::new();
        let assignment = min_cost.assignment_bound(&start).unwrap();
        let estimate = min_cost.estimate(&start).unwrap();

        assert!(simple <= real);
        assert!(estimate <= real);
        assert!(assignment <= real);
        // with two boxes the assignment bound alone beats the single closest pair
        assert!(assignment >= 2 + 2);

        for &heuristic in &BOTH {
            let path = start.solve(heuristic, false).unwrap().path.unwrap();
            assert_eq!(path.len() - 1, real as usize);
        }
    }

    #[test]
    fn optimal_lengths() {
        let levels = [
            r"
######
#@ $.#
######
",
            r"
######
#@$ .#
# $ .#
######
",
            r"
#######
#  .  #
# $$@ #
#  .  #
#######
",
            r"
 ######
 #    #
##$## #
#  @  #
#. $ .#
#######
",
            r"
########
#   #  #
# $   .#
#@ $#  #
#    . #
########
",
        ];
        for level in &levels {
            let start: PuzzleState = level.parse().unwrap();
            let expected = bfs_solution_len(&start, 200_000);
            for &heuristic in &BOTH {
                assert_eq!(
                    solution_len(level, heuristic),
                    expected,
                    "{} {}",
                    heuristic,
                    level
                );
            }
        }
    }

    #[test]
    fn no_solution() {
        let level = r"
#####
#$ .#
# @ #
#####
";
        for &heuristic in &BOTH {
            assert_eq!(solution_len(level, heuristic), None);
        }
    }

    #[test]
    fn idempotent() {
        let level = r"
########
#@ $  .#
#  $ . #
########
";
        for &heuristic in &BOTH {
            let first = solution_len(level, heuristic);
            assert!(first.is_some());
            for _ in 0..3 {
                assert_eq!(solution_len(level, heuristic), first);
            }
        }
    }

    #[test]
    fn invalid_start() {
        let mut state: PuzzleState = r"
#####
#@$.#
#####
"
        .parse()
        .unwrap();
        let board = state.board().clone();

        state = PuzzleState::new(board.clone(), Pos::new(5, 1));
        assert_eq!(
            solve(&state, HeuristicKind::Simple, false).unwrap_err(),
            SolverErr::PlayerOutOfBounds
        );

        state = PuzzleState::new(board.clone(), Pos::new(0, 0));
        assert_eq!(
            solve(&state, HeuristicKind::Simple, false).unwrap_err(),
            SolverErr::PlayerBlocked
        );

        state = PuzzleState::new(board, Pos::new(2, 1));
        assert_eq!(
            solve(&state, HeuristicKind::MinCost, false).unwrap_err(),
            SolverErr::PlayerBlocked
        );

        let empty: Vec2d<Cell> = Vec2d::from_vec(vec![Cell::Empty; 3], 3, 1).unwrap();
        state = PuzzleState::new(empty, Pos::new(1, 0));
        assert!(solve(&state, HeuristicKind::MinCost, false).is_ok());
    }
}
