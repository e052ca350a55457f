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

//! Position state: which piece kind occupies each square, and which side(s) may move or capture
//! it, including neutral pieces that belong to both sides at once.

use super::{Bitboard, Move, PieceColour, PieceKind, Side, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A fairy-chess position.
///
/// Rather than storing a colour per square directly, a `Board` stores two derived bitboards:
/// `movers`, the squares of pieces the side to move may move this ply, and `capturables`, the
/// squares of pieces that side may capture. A friendly piece is in `movers` only; an enemy piece
/// is in `capturables` only; a neutral piece is in both.
pub struct Board {
    /// The side whose turn it is to move.
    side_to_move: Side,
    /// One bitboard per piece kind, giving the squares occupied by pieces of that kind,
    /// regardless of colour.
    kind_bbs: [Bitboard; PieceKind::NUM],
    /// Squares of pieces the side to move may move this ply (its own pieces, plus neutrals).
    movers: Bitboard,
    /// Squares of pieces the side to move may capture this ply (the opponent's pieces, plus
    /// neutrals).
    capturables: Bitboard,
}

impl Board {
    #[must_use]
    /// Create an empty board with the given side to move.
    pub const fn empty(side_to_move: Side) -> Self {
        Self {
            side_to_move,
            kind_bbs: [Bitboard::EMPTY; PieceKind::NUM],
            movers: Bitboard::EMPTY,
            capturables: Bitboard::EMPTY,
        }
    }

    /// Place a piece of `kind` and `colour` on `sq`, overwriting whatever was there.
    ///
    /// Whether the new piece ends up in `movers` and/or `capturables` is derived entirely from
    /// [`PieceColour::can_move`] and [`PieceColour::friendly`] against this board's side to move,
    /// which is how a neutral piece ends up in both.
    pub fn place(&mut self, sq: Square, kind: PieceKind, colour: PieceColour) {
        self.clear(sq);
        self.kind_bbs[kind as usize].insert(sq);
        if colour.can_move(self.side_to_move) {
            self.movers.insert(sq);
        }
        if !colour.friendly(self.side_to_move) {
            self.capturables.insert(sq);
        }
    }

    /// Remove whatever piece (if any) occupies `sq`.
    fn clear(&mut self, sq: Square) {
        if let Some(kind) = self.kind_at(sq) {
            self.kind_bbs[kind as usize] &= !Bitboard::from(sq);
        }
        self.movers &= !Bitboard::from(sq);
        self.capturables &= !Bitboard::from(sq);
    }

    #[must_use]
    /// The side whose turn it is to move.
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[must_use]
    /// All squares occupied by pieces of the given kind, regardless of colour.
    pub const fn pieces_of(&self, kind: PieceKind) -> Bitboard {
        self.kind_bbs[kind as usize]
    }

    #[must_use]
    /// The squares of pieces the side to move may move this ply: its own pieces plus neutrals.
    pub const fn movers(&self) -> Bitboard {
        self.movers
    }

    #[must_use]
    /// The squares of pieces the side to move may capture this ply: the opponent's pieces plus
    /// neutrals.
    pub const fn capturables(&self) -> Bitboard {
        self.capturables
    }

    #[must_use]
    /// All occupied squares, `movers ∪ capturables`.
    pub fn occupied(&self) -> Bitboard {
        self.movers | self.capturables
    }

    #[must_use]
    /// Squares of pieces that belong only to the side to move, and so can never be captured by
    /// it: `movers \ capturables`.
    pub fn friendlies(&self) -> Bitboard {
        self.movers & !self.capturables
    }

    #[must_use]
    /// Squares of pieces that belong only to the opponent: `capturables \ movers`.
    pub fn unfriendlies(&self) -> Bitboard {
        self.capturables & !self.movers
    }

    #[must_use]
    /// Squares of neutral pieces, movable and capturable by both sides: `movers ∩ capturables`.
    pub fn neutrals(&self) -> Bitboard {
        self.movers & self.capturables
    }

    #[must_use]
    /// The kind of piece occupying `sq`, or `None` if it is empty.
    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.kind_bbs[kind as usize].contains(sq))
    }

    #[must_use]
    /// The colour of the piece occupying `sq`, or `None` if it is empty.
    pub fn colour_at(&self, sq: Square) -> Option<PieceColour> {
        match (self.movers.contains(sq), self.capturables.contains(sq)) {
            (true, true) => Some(PieceColour::Neutral),
            (true, false) => Some(PieceColour::from(self.side_to_move)),
            (false, true) => Some(PieceColour::from(!self.side_to_move)),
            (false, false) => None,
        }
    }

    /// Apply `m`, which must have been generated from this board, updating piece placement and
    /// the mover/capturable sets. Does not change `side_to_move`; call [`Board::flip_side`]
    /// afterward to hand the turn to the opponent.
    pub fn apply_move(&mut self, m: Move) {
        let was_neutral = self.neutrals().contains(m.from);

        self.clear(m.from);
        self.clear(m.to);

        let result_kind = m.resulting_kind();
        self.kind_bbs[result_kind as usize].insert(m.to);
        self.movers.insert(m.to);
        if was_neutral {
            self.capturables.insert(m.to);
        }
    }

    /// Hand the turn to the opponent. Neutral pieces are in both `movers` and `capturables`, so
    /// swapping the two sets leaves them unaffected while every other piece switches sides.
    pub fn flip_side(&mut self) {
        std::mem::swap(&mut self.movers, &mut self.capturables);
        self.side_to_move = !self.side_to_move;
    }

    #[must_use]
    /// Is the opponent's (non-neutral) king attacked by a piece the side to move could move this
    /// ply? Used by the solver to reject a move that left its own king in check: since the board
    /// passed in has already had the turn handed over, "the opponent's king" here is the king of
    /// whoever just moved.
    ///
    /// Returns `false` if there is no such king on the board at all (e.g. a neutral king, which
    /// belongs to both sides and so is never "unfriendly").
    pub fn king_threatened(&self) -> bool {
        let mut king_bb = self.unfriendlies() & self.pieces_of(PieceKind::King);
        let Some(king_square) = king_bb.next() else {
            return false;
        };
        let occupancy = self.occupied();
        self.movers.into_iter().any(|from| {
            self.kind_at(from).is_some_and(|kind| {
                kind.moves(self.side_to_move, from, occupancy)
                    .contains(king_square)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_with(pieces: &[(Square, PieceKind, PieceColour)], side: Side) -> Board {
        let mut b = Board::empty(side);
        for &(sq, kind, colour) in pieces {
            b.place(sq, kind, colour);
        }
        b
    }

    #[test]
    fn flip_side_twice_is_identity() {
        let mut b = empty_with(
            &[
                (Square::E1, PieceKind::King, PieceColour::White),
                (Square::E8, PieceKind::King, PieceColour::Black),
                (Square::B1, PieceKind::Bishop, PieceColour::Neutral),
            ],
            Side::White,
        );
        let before = b;
        b.flip_side();
        b.flip_side();
        assert_eq!(b, before);
    }

    #[test]
    fn neutral_survives_flip() {
        let mut b = empty_with(&[(Square::B1, PieceKind::Bishop, PieceColour::Neutral)], Side::White);
        assert_eq!(b.colour_at(Square::B1), Some(PieceColour::Neutral));
        b.flip_side();
        assert_eq!(b.colour_at(Square::B1), Some(PieceColour::Neutral));
        assert!(b.movers().contains(Square::B1));
        assert!(b.capturables().contains(Square::B1));
    }

    #[test]
    fn friendly_is_not_capturable() {
        let b = empty_with(&[(Square::D3, PieceKind::Bishop, PieceColour::White)], Side::White);
        assert!(b.friendlies().contains(Square::D3));
        assert!(!b.capturables().contains(Square::D3));
    }

    #[test]
    fn enemy_is_capturable_not_mover() {
        let b = empty_with(&[(Square::F5, PieceKind::Bishop, PieceColour::Black)], Side::White);
        assert!(!b.movers().contains(Square::F5));
        assert!(b.unfriendlies().contains(Square::F5));
    }

    #[test]
    fn apply_move_updates_occupied_set() {
        let mut b = empty_with(&[(Square::D3, PieceKind::Bishop, PieceColour::White)], Side::White);
        let before_occ = b.occupied();
        let m = Move::new(PieceKind::Bishop, Square::D3, Square::A6, false);
        b.apply_move(m);
        b.flip_side();
        let expect = (before_occ & !Bitboard::from(Square::D3)) | Bitboard::from(Square::A6);
        assert_eq!(b.occupied(), expect);
    }

    #[test]
    fn capturing_a_neutral_removes_it() {
        let mut b = empty_with(
            &[
                (Square::D3, PieceKind::Bishop, PieceColour::White),
                (Square::E2, PieceKind::Rook, PieceColour::Neutral),
            ],
            Side::White,
        );
        let m = Move::new(PieceKind::Bishop, Square::D3, Square::E2, true);
        b.apply_move(m);
        assert_eq!(b.kind_at(Square::E2), Some(PieceKind::Bishop));
        assert!(!b.pieces_of(PieceKind::Rook).contains(Square::E2));
    }

    #[test]
    fn king_threatened_detects_unfriendly_king_in_check() {
        let b = empty_with(
            &[
                (Square::H1, PieceKind::Rook, PieceColour::White),
                (Square::H8, PieceKind::King, PieceColour::Black),
            ],
            Side::White,
        );
        assert!(b.king_threatened());
    }

    #[test]
    fn king_threatened_false_when_out_of_reach() {
        let b = empty_with(
            &[
                (Square::A1, PieceKind::Rook, PieceColour::White),
                (Square::H8, PieceKind::King, PieceColour::Black),
            ],
            Side::White,
        );
        assert!(!b.king_threatened());
    }

    #[test]
    fn king_threatened_false_for_neutral_king() {
        let b = empty_with(
            &[
                (Square::H1, PieceKind::Rook, PieceColour::White),
                (Square::H8, PieceKind::King, PieceColour::Neutral),
            ],
            Side::White,
        );
        assert!(!b.king_threatened());
    }
}
