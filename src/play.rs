//! Playing a level by hand with the solver's help.

use std::io::{self, BufRead, Write};

use crate::config::{Format, HeuristicKind};
use crate::data::Dir;
use crate::moves::{Move, Moves};
use crate::solver::{self, heuristic::Heuristic};
use crate::state::PuzzleState;

const CONTROLS: &str = "Controls: w/a/s/d to move, x to let the solver finish, q to quit";

fn key_to_dir(key: char) -> Option<Dir> {
    match key {
        'w' => Some(Dir::Up),
        'a' => Some(Dir::Left),
        's' => Some(Dir::Down),
        'd' => Some(Dir::Right),
        _ => None,
    }
}

/// Runs until the level is solved (returns the moves), the player quits or input ends.
pub fn play<R, W>(
    start: &PuzzleState,
    heuristic: HeuristicKind,
    format: Format,
    input: R,
    output: &mut W,
) -> io::Result<Option<Moves>>
where
    R: BufRead,
    W: Write,
{
    let mut estimator = heuristic.create();
    let mut state = start.clone();
    let mut moves = Moves::default();
    let mut lines = input.lines();

    writeln!(output, "{}", CONTROLS)?;
    loop {
        match estimator.estimate(&state) {
            Some(h) => writeln!(output, "h(x) = {}", h)?,
            None => writeln!(output, "h(x) = unsolvable")?,
        }
        writeln!(output, "{}", state.format(format))?;

        if state.is_goal() {
            writeln!(
                output,
                "Congratulations, you solved the level in {} moves: {}",
                moves.move_cnt(),
                moves
            )?;
            return Ok(Some(moves));
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let key = match line.trim().chars().next() {
            Some(key) => key.to_ascii_lowercase(),
            None => continue,
        };

        if let Some(dir) = key_to_dir(key) {
            if !state.is_legal(dir) {
                writeln!(output, "Illegal move")?;
                continue;
            }
            let class = state.apply(dir);
            moves.add(Move::new(dir, class.is_push()));
            if state.is_obviously_deadlocked() {
                writeln!(output, "Warning: a box is stuck, the level can't be solved anymore")?;
            }
            continue;
        }

        match key {
            'q' => return Ok(None),
            'x' => print_solution(&state, heuristic, format, output)?,
            _ => {
                writeln!(output, "Unknown command: {}", key)?;
                writeln!(output, "{}", CONTROLS)?;
            }
        }
    }
}

fn print_solution<W: Write>(
    state: &PuzzleState,
    heuristic: HeuristicKind,
    format: Format,
    output: &mut W,
) -> io::Result<()> {
    let solution = match solver::solve(state, heuristic, false) {
        Ok(solution) => solution,
        Err(err) => return writeln!(output, "Can't solve: {}", err),
    };
    match solution.path {
        None => writeln!(output, "No solution"),
        Some(ref path) => {
            for (i, step) in path.iter().enumerate() {
                writeln!(output, "#{}:", i)?;
                writeln!(output, "{}", step.format(format))?;
            }
            if let Some(moves) = solution.moves() {
                writeln!(output, "{}", moves)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn run(level: &str, keys: &str) -> (Option<Moves>, String) {
        let state: PuzzleState = level.parse().unwrap();
        let mut output = Vec::new();
        let moves = play(
            &state,
            HeuristicKind::MinCost,
            Format::Xsb,
            Cursor::new(keys),
            &mut output,
        )
        .unwrap();
        (moves, String::from_utf8(output).unwrap())
    }

    const CORRIDOR: &str = r"
######
#@ $.#
######
";

    #[test]
    fn solving_by_hand() {
        let (moves, output) = run(CORRIDOR, "a\nd\nd\n");
        assert_eq!(moves.unwrap().to_string(), "rR");
        assert!(output.contains("Illegal move\n"));
        assert!(output.contains("h(x) = 2\n"));
        assert!(output.contains("h(x) = 0\n"));
        assert!(output.ends_with("Congratulations, you solved the level in 2 moves: rR\n"));
    }

    #[test]
    fn quitting() {
        let (moves, output) = run(CORRIDOR, "d\nq\nd\n");
        assert_eq!(moves, None);
        assert!(!output.contains("Congratulations"));

        // end of input
        let (moves, _) = run(CORRIDOR, "d\n\n");
        assert_eq!(moves, None);
    }

    #[test]
    fn asking_the_solver() {
        let (moves, output) = run(CORRIDOR, "x\nq\n");
        assert_eq!(moves, None);
        assert!(output.contains("#0:\n"));
        assert!(output.contains("#2:\n######\n#  @*#\n######\n"));
        assert!(output.contains("\nrR\n"));
    }

    #[test]
    fn walking_into_deadlock() {
        let level = r"
#####
# $.#
#  @#
#####
";
        let (moves, output) = run(level, "w\na\nx\nz\nq\n");
        assert_eq!(moves, None);
        assert!(output.contains("Warning: a box is stuck"));
        assert!(output.contains("No solution\n"));
        assert!(output.contains("h(x) = unsolvable\n"));
        assert!(output.contains("Unknown command: z\n"));
    }
}
