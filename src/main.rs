/*
  Solver, a fairy-chess composition solver.
  Copyright (C) 2022 Clayton Ramsey.

  Solver is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Solver is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
#![warn(clippy::pedantic)]

//! Command-line front end: read a stipulation and a board, search for solutions, print them.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use fairysolve::parser::{format_solutions, parse_board};
use fairysolve::solver::stipulation::{self, Stipulation};
use fairysolve::solver::{solve_with_progress, Fail};
use fairysolve::SolverError;

#[derive(Parser, Debug)]
#[command(
    name = "fairysolve",
    about = "Solve fairy-chess composition problems: direct-mate, help-mate, and help-mate-half"
)]
struct Cli {
    /// Solve a direct-mate in N moves: White to play and force mate against any Black defence.
    #[arg(long, value_name = "N")]
    directmate: Option<u32>,

    /// Solve a help-mate in N moves: both sides cooperate, Black moving first.
    #[arg(long, value_name = "N")]
    helpmate: Option<u32>,

    /// Solve a help-mate in N-and-a-half moves: both sides cooperate, White moving first with a
    /// single half-move.
    #[arg(long = "helpmate-half", value_name = "N")]
    helpmate_half: Option<u32>,

    /// The board text to solve, in the `[<Colour>: ]<piece>...` format. Read from standard input
    /// if omitted.
    #[arg(long)]
    board: Option<String>,

    /// Print progress to standard error. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SolverError> {
    let stipulation = match (cli.directmate, cli.helpmate, cli.helpmate_half) {
        (Some(n), None, None) => Stipulation::DirectMate(n),
        (None, Some(n), None) => Stipulation::HelpMate(n),
        (None, None, Some(n)) => Stipulation::HelpMateHalf(n),
        (None, None, None) => return Err(SolverError::MissingStipulation),
        _ => return Err(SolverError::ConflictingStipulation),
    };
    if stipulation.move_count() < 1 {
        return Err(SolverError::InvalidMoveCount { n: stipulation.move_count() });
    }

    let board_text = match cli.board {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let (side, reqs) = stipulation::build(stipulation);
    let board = parse_board(&board_text, side)?;

    match solve_with_progress(&board, &reqs, cli.verbose) {
        Ok(solutions) => {
            print!("{}", format_solutions(&solutions));
            Ok(())
        }
        Err(Fail::NotFound | Fail::IllegalMove) => Err(SolverError::NoSolutions),
    }
}
