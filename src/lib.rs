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
#![allow(clippy::too_many_lines)]

//! A solver for fairy-chess composition problems: direct-mate, help-mate, and help-mate-½
//! stipulations over positions that may include neutral pieces.
//!
//! [`base`] holds the move-generation engine (bitboards, magic sliding-attack tables, the board
//! representation and its neutral-piece semantics). [`solver`] holds the recursive backtracking
//! search and the stipulation builder that parameterises it. [`parser`] reads the textual board
//! format and formats solution trees. [`error`] unifies everything that can go wrong crossing
//! those boundaries.

pub mod base;
pub mod error;
pub mod parser;
pub mod solver;

pub use error::SolverError;
