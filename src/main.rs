use std::io::{self, BufRead, IsTerminal};

use sjakk_board::game_state::board::Board;
use sjakk_board::move_generation::legal_move_apply::{MoveEngine, MoveReport};
use sjakk_board::utils::algebraic::parse_move_pair;

const INVALID_MOVES: [(&str, &str); 3] = [("e3", "e2"), ("e1", "e3"), ("b1", "b2")];

const SIMULATED_GAME: [(&str, &str); 9] = [
    ("e1", "e2"),
    ("g8", "h6"),
    ("b1", "c3"),
    ("h6", "g8"),
    ("c3", "d5"),
    ("g8", "h6"),
    ("d5", "f6"),
    ("h6", "g8"),
    ("f6", "e8"),
];

fn print_report(report: &MoveReport) {
    for line in report.lines() {
        println!("{line}");
    }
}

fn run_demo(engine: &mut MoveEngine) {
    println!("Invalid moves:");
    for (from, to) in INVALID_MOVES {
        print_report(&engine.apply(from, to));
    }
    println!();

    println!("A simulated game:");
    for (from, to) in SIMULATED_GAME {
        print_report(&engine.apply(from, to));
    }
}

fn main() {
    let mut engine = MoveEngine::new(Board::starting_position());

    // SJAKK_SKIP_DEMO=1 starts straight from the initial position.
    let skip_demo = std::env::var("SJAKK_SKIP_DEMO")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if !skip_demo {
        run_demo(&mut engine);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return;
    }

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_move_pair(trimmed) {
            Ok((from, to)) => print_report(&engine.apply_squares(from, to)),
            Err(reason) => eprintln!("{reason}"),
        }
    }
}
