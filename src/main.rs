use std::env;
use std::io;
use std::process;

use clap::{crate_version, App, Arg, ArgGroup};

use sokoban_astar::config::{Format, HeuristicKind};
use sokoban_astar::play;
use sokoban_astar::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-astar")
        .author("martin-t")
        .version(crate_version!())
        .about("Finds move-optimal solutions of Sokoban levels using A*")
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("parse as XSB format (default)"),
        )
        .arg(
            Arg::with_name("classic")
                .short("c")
                .long("classic")
                .help("parse as classic format (x = player, O = box, 0 = box on goal)"),
        )
        .group(ArgGroup::with_name("format").args(&["xsb", "classic"]))
        .arg(
            Arg::with_name("simple")
                .short("s")
                .long("simple")
                .help("use the simple Manhattan distance heuristic"),
        )
        .arg(
            Arg::with_name("min-cost")
                .short("m")
                .long("min-cost")
                .help("use the min-cost assignment heuristic (default)"),
        )
        .group(ArgGroup::with_name("heuristic").args(&["simple", "min-cost"]))
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print the best state whenever the heuristic improves"),
        )
        .arg(
            Arg::with_name("play")
                .short("p")
                .long("play")
                .help("play the level interactively"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("classic") {
        Format::Classic
    } else {
        Format::Xsb
    };
    let heuristic = if matches.is_present("simple") {
        HeuristicKind::Simple
    } else {
        HeuristicKind::MinCost
    };
    // required so always present
    let path = matches.value_of("file").unwrap();

    let level = path.load_level(format).unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => println!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    if matches.is_present("play") {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        if let Err(err) = play::play(&level, heuristic, format, stdin.lock(), &mut stdout) {
            println!("{}", err);
            process::exit(1);
        }
        return;
    }

    println!("Solving {}...", path);
    let solver_ok = level
        .solve(heuristic, matches.is_present("verbose"))
        .unwrap_or_else(|err| {
            println!("Invalid level: {}", err);
            process::exit(1);
        });
    println!("{}", solver_ok.stats);

    match (&solver_ok.path, solver_ok.moves()) {
        (Some(path), Some(moves)) => {
            println!("Found solution:");
            for state in path {
                println!("{}", state.format(format));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        _ => println!("No solution"),
    }
}
