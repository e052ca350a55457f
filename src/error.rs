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

//! The error type surfaced across the crate's public boundary.

use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong between reading input and printing a solution.
pub enum SolverError {
    #[error("could not parse board token {token:?}")]
    /// A whitespace-delimited token in the board text was neither a recognised colour header
    /// nor a valid `<kind-letter><file><rank>` piece token.
    Parse {
        /// The offending token, verbatim.
        token: String,
    },

    #[error("no stipulation given: pass one of --directmate, --helpmate, or --helpmate-half")]
    /// None of `--directmate`, `--helpmate`, or `--helpmate-half` was given.
    MissingStipulation,

    #[error(
        "conflicting stipulation: pass exactly one of --directmate, --helpmate, or --helpmate-half"
    )]
    /// More than one of `--directmate`, `--helpmate`, or `--helpmate-half` was given.
    ConflictingStipulation,

    #[error("stipulation move count must be at least 1, got {n}")]
    /// `--directmate`, `--helpmate`, or `--helpmate-half` was given a move count of 0.
    InvalidMoveCount {
        /// The offending move count.
        n: u32,
    },

    #[error("no solutions found")]
    /// The solver exhausted the search without finding a single line satisfying the stipulation.
    NoSolutions,

    #[error("could not read board from standard input: {0}")]
    /// Reading the board from stdin failed at the OS level. Not part of the stipulation's own
    /// error taxonomy, but a real failure mode any CLI that reads from stdin must surface.
    Io(#[from] std::io::Error),
}
