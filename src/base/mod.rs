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

//! Shared data types found across the engine: squares, bitboards, pieces, colour algebra, the
//! board representation, and pseudo-legal move generation.

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use bitboard::Bitboard;

mod board;
pub use board::Board;

mod color;
pub use color::{PieceColour, Side};

mod direction;
pub use direction::Direction;

mod generate;
pub use generate::generate_moves;

pub mod movegen;

mod moves;
pub use moves::Move;

mod piece;
pub use piece::PieceKind;

mod square;
pub use square::Square;
