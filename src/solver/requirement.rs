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

//! The per-ply predicate a line of play must satisfy, as a plain enum tag rather than a boxed
//! trait object: the solver keeps its bookkeeping (counts, accumulated solutions) in local
//! variables of the recursive call, keyed off this tag, instead of allocating a `Requirement`
//! object per ply.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a single ply of a candidate line must satisfy for the line to survive.
pub enum RequirementKind {
    /// At least one continuation from here must satisfy the rest of the line. Used for the
    /// attacker's own moves in every genre.
    Any,
    /// Every continuation from here that does not self-expose must satisfy the rest of the
    /// line, unless there are none at all and the side to move is already mated (a vacuous
    /// pass). Used for the defender's replies in a direct-mate.
    AllOrMate,
    /// The side to move must have no move that leaves its own king unattacked, and its king
    /// must currently be attacked. Always the final requirement in a line.
    Mate,
}
