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

//! Reading a board from its textual format, and printing a solution tree back out.
//!
//! The board format is whitespace-delimited tokens. A colour header, `White`, `Black`, or
//! `Neutral`, switches which colour subsequent piece tokens belong to until the next header
//! (or the end of input); a piece token is a kind letter immediately followed by a square name,
//! e.g. `Kh8` or `Pe4`. Tokens before any header default to White. Repeated headers and mixed
//! orderings are permitted; only the resulting assignment of colours to squares matters.

use crate::base::{Board, PieceColour, Side, Square};
use crate::solver::Solution;
use crate::SolverError;

/// Parse `text` into a [`Board`] with `side_to_move` to play.
///
/// # Errors
///
/// Returns [`SolverError::Parse`] if any whitespace-delimited token is neither a recognised
/// colour header nor a valid piece token.
pub fn parse_board(text: &str, side_to_move: Side) -> Result<Board, SolverError> {
    let mut board = Board::empty(side_to_move);
    let mut colour = PieceColour::White;

    for token in text.split_whitespace() {
        match token {
            "White" => {
                colour = PieceColour::White;
                continue;
            }
            "Black" => {
                colour = PieceColour::Black;
                continue;
            }
            "Neutral" => {
                colour = PieceColour::Neutral;
                continue;
            }
            _ => {}
        }

        let mut chars = token.chars();
        let kind = chars
            .next()
            .and_then(crate::base::PieceKind::from_code)
            .ok_or_else(|| SolverError::Parse { token: token.to_string() })?;
        let square = Square::from_algebraic(chars.as_str())
            .map_err(|_| SolverError::Parse { token: token.to_string() })?;
        board.place(square, kind, colour);
    }

    Ok(board)
}

/// Format a solution tree as a tab-indented, depth-first pre-order listing: each line holds one
/// move, indented by its depth in the tree, followed immediately by its own children's lines.
#[must_use]
pub fn format_solutions(solutions: &[Solution]) -> String {
    let mut out = String::new();
    for solution in solutions {
        write_solution(solution, 0, &mut out);
    }
    out
}

fn write_solution(solution: &Solution, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('\t');
    }
    out.push_str(&solution.mv.to_string());
    out.push('\n');
    for child in &solution.children {
        write_solution(child, depth + 1, out);
    }
}
