// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod formatter;
pub mod fs;
pub mod moves;
pub mod parser;
pub mod play;
pub mod solver;
pub mod state;
pub mod vec2d;

use std::error::Error;

use crate::config::{Format, HeuristicKind};
use crate::solver::{SolverErr, SolverOk};
use crate::state::PuzzleState;

pub trait LoadLevel {
    fn load_level(&self, format: Format) -> Result<PuzzleState, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, heuristic: HeuristicKind, print_status: bool) -> Result<SolverOk, SolverErr>;
}
