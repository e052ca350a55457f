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

//! A single move from one square to another, possibly a capture and possibly a promotion.

use std::fmt::{Display, Formatter, Result};

use super::{PieceKind, Square};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// A pseudo-legal move: the piece kind that moved, its source and destination squares, whether
/// the destination was occupied at generation time, and the promotion kind if any.
///
/// `promotion` is `None` unless a pawn moved to its last rank, in which case it is always `Some`.
pub struct Move {
    /// The kind of piece that made this move (before any promotion).
    pub kind: PieceKind,
    /// The square the piece moved from.
    pub from: Square,
    /// The square the piece moved to.
    pub to: Square,
    /// Whether `to` was occupied by another piece at the time this move was generated.
    pub is_capture: bool,
    /// The kind a pawn promotes to upon reaching its last rank, if applicable.
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[must_use]
    /// Construct a quiet or capturing move of a non-promoting piece.
    pub const fn new(kind: PieceKind, from: Square, to: Square, is_capture: bool) -> Self {
        Self {
            kind,
            from,
            to,
            is_capture,
            promotion: None,
        }
    }

    #[must_use]
    /// Construct a pawn promotion move.
    pub const fn promoting(from: Square, to: Square, is_capture: bool, promotion: PieceKind) -> Self {
        Self {
            kind: PieceKind::Pawn,
            from,
            to,
            is_capture,
            promotion: Some(promotion),
        }
    }

    #[must_use]
    /// The piece kind this move leaves on `to`: the promotion kind if this is a promotion,
    /// otherwise the moved kind unchanged.
    pub const fn resulting_kind(self) -> PieceKind {
        match self.promotion {
            Some(p) => p,
            None => self.kind,
        }
    }
}

impl Display for Move {
    /// Format as `<K><from><sep><to>[=<P>]`, matching the output format: `-` separates a quiet
    /// move, `*` a capture, and a promotion appends `=<P>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sep = if self.is_capture { '*' } else { '-' };
        write!(f, "{}{}{sep}{}", self.kind, self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "={promotion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_move_display() {
        let m = Move::new(PieceKind::Bishop, Square::D3, Square::A6, false);
        assert_eq!(m.to_string(), "Bd3-a6");
    }

    #[test]
    fn capture_move_display() {
        let m = Move::new(PieceKind::Rook, Square::H6, Square::H7, true);
        assert_eq!(m.to_string(), "Rh6*h7");
    }

    #[test]
    fn promotion_move_display() {
        let m = Move::promoting(Square::E7, Square::E8, false, PieceKind::Queen);
        assert_eq!(m.to_string(), "Pe7-e8=Q");
    }

    #[test]
    fn promotion_capture_display() {
        let m = Move::promoting(Square::E2, Square::F1, true, PieceKind::Knight);
        assert_eq!(m.to_string(), "Pe2*f1=S");
    }

    #[test]
    fn resulting_kind_for_promotion() {
        let m = Move::promoting(Square::E7, Square::E8, false, PieceKind::Queen);
        assert_eq!(m.resulting_kind(), PieceKind::Queen);
    }

    #[test]
    fn resulting_kind_for_non_promotion() {
        let m = Move::new(PieceKind::Knight, Square::B1, Square::C3, false);
        assert_eq!(m.resulting_kind(), PieceKind::Knight);
    }
}
