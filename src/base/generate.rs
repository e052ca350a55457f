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

//! Iteration over every pseudo-legal move available to the side to move, in deterministic order.

use super::{Board, Move, PieceKind};

#[must_use]
/// Enumerate every pseudo-legal move available to the side to move on `board`.
///
/// Moves are ordered by source square ascending, then by destination square ascending, then (for
/// pawn promotions) by promotion kind in the fixed order bishop, knight, rook, queen. This
/// ordering is observable: it determines the order solutions are emitted in.
///
/// A move's destinations are never masked against the piece's own friendlies by the caller; that
/// masking happens here, once, per source square.
pub fn generate_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    let occupancy = board.occupied();
    let friendlies = board.friendlies();
    let side = board.side_to_move();

    for from in board.movers() {
        // SAFETY-free invariant: every square in `movers` is occupied by some piece.
        let Some(kind) = board.kind_at(from) else {
            continue;
        };
        let destinations = kind.moves(side, from, occupancy) & !friendlies;
        for to in destinations {
            let is_capture = occupancy.contains(to);
            if kind == PieceKind::Pawn && side.pawn_promote_rank().contains(to) {
                for &promotion in &PieceKind::PROMOTING {
                    moves.push(Move::promoting(from, to, is_capture, promotion));
                }
            } else {
                moves.push(Move::new(kind, from, to, is_capture));
            }
        }
    }

    moves
}
