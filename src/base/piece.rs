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

//! Piece kinds, which contain no information about a piece's colour or square.

use std::fmt::{Display, Formatter, Result};

use super::movegen::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, pawn_pushes, queen_attacks,
    rook_attacks,
};
use super::{Bitboard, Side, Square};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
/// The kind of a piece, independent of its colour or location.
///
/// The ordering matches the promotion order required by the move generator: a pawn reaching its
/// last rank promotes to each of [`PieceKind::PROMOTING`] in turn, bishop first.
pub enum PieceKind {
    /// A pawn, limited to forward pushes and diagonal captures, and which promotes on its last
    /// rank.
    Pawn = 0,
    /// A bishop, which moves arbitrarily far along diagonals.
    Bishop,
    /// A knight (coded `S`, for the German "Springer"), which moves in an L-shape.
    Knight,
    /// A rook, which moves arbitrarily far along ranks and files.
    Rook,
    /// A queen, which moves like both a rook and a bishop.
    Queen,
    /// A king, which moves one square in any direction and can never be promoted to.
    King,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const NUM: usize = 6;

    /// Array containing every piece kind.
    pub const ALL: [PieceKind; PieceKind::NUM] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// The kinds a pawn may promote to, in the order the move generator must yield them: bishop,
    /// knight, rook, then queen.
    pub const PROMOTING: [PieceKind; 4] = [
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[must_use]
    /// Can a pawn promote to this kind? True for bishop, knight, rook, and queen; false for pawn
    /// and king.
    ///
    /// # Examples
    ///
    /// ```
    /// use fairysolve::base::PieceKind;
    ///
    /// assert!(PieceKind::Queen.can_be_promotion());
    /// assert!(!PieceKind::King.can_be_promotion());
    /// assert!(!PieceKind::Pawn.can_be_promotion());
    /// ```
    pub const fn can_be_promotion(self) -> bool {
        matches!(
            self,
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook | PieceKind::Queen
        )
    }

    #[must_use]
    /// Get the one-letter code of this piece kind, as used in the board format and in move
    /// notation. Note that the knight's code is `S`, not `N`.
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'S',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[must_use]
    /// Given a one-letter code, get the piece kind it names. Must be uppercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use fairysolve::base::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_code('S'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_code('N'), None);
    /// ```
    pub const fn from_code(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'B' => Some(PieceKind::Bishop),
            'S' => Some(PieceKind::Knight),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[must_use]
    /// Compute the squares a piece of this kind, belonging to `side`, pseudo-attacks or
    /// pseudo-moves to from `sq` given the current board `occupancy`.
    ///
    /// The result is *not* masked against friendly pieces; the caller subtracts those. For sliding
    /// and leaping pieces the result is simply the raw attack set (which may include squares
    /// occupied by friendlies); for a pawn, pushes are filtered to empty squares and diagonal
    /// captures to occupied squares, since those distinctions cannot be recovered afterwards.
    pub fn moves(self, side: Side, sq: Square, occupancy: Bitboard) -> Bitboard {
        match self {
            PieceKind::Pawn => pawn_pushes(side, sq, occupancy) | (pawn_attacks(side, sq) & occupancy),
            PieceKind::Bishop => bishop_attacks(occupancy, sq),
            PieceKind::Knight => knight_attacks(sq),
            PieceKind::Rook => rook_attacks(occupancy, sq),
            PieceKind::Queen => queen_attacks(occupancy, sq),
            PieceKind::King => king_attacks(sq),
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn knight_code_is_s() {
        assert_eq!(PieceKind::Knight.code(), 'S');
        assert_eq!(PieceKind::from_code('N'), None);
    }

    #[test]
    fn promotion_eligibility() {
        assert!(!PieceKind::Pawn.can_be_promotion());
        assert!(!PieceKind::King.can_be_promotion());
        for kind in PieceKind::PROMOTING {
            assert!(kind.can_be_promotion());
        }
    }
}
