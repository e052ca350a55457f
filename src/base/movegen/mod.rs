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

//! Per-kind pseudo-attack generation: magic bitboards for sliders, precomputed tables for
//! leapers, and side-dependent pawn pushes/captures.

mod magic;
pub use magic::{bishop_attacks, rook_attacks};

#[cfg(test)]
mod tests;

use std::mem::transmute;

use super::{Bitboard, Direction, Side, Square};

/// A lookup table for the squares a knight can hop to from a given square.
///
/// # Examples
///
/// ```
/// use fairysolve::base::{movegen::KNIGHT_ATTACKS, Square, Bitboard};
///
/// let from_a1 = Bitboard::EMPTY
///     .with_square(Square::C2)
///     .with_square(Square::B3);
///
/// assert_eq!(KNIGHT_ATTACKS[Square::A1 as usize], from_a1);
/// ```
pub const KNIGHT_ATTACKS: [Bitboard; 64] = create_step_attacks(&Direction::KNIGHT_STEPS, 2);

/// A lookup table for the squares a king can step to from a given square.
///
/// # Examples
///
/// ```
/// use fairysolve::base::{movegen::KING_ATTACKS, Square, Bitboard};
///
/// let from_a1 = Bitboard::EMPTY
///     .with_square(Square::A2)
///     .with_square(Square::B1)
///     .with_square(Square::B2);
///
/// assert_eq!(KING_ATTACKS[Square::A1 as usize], from_a1);
/// ```
pub const KING_ATTACKS: [Bitboard; 64] = create_step_attacks(&Direction::KING_STEPS, 1);

/// A lookup table for the squares a pawn of a given side diagonally attacks from a given square.
/// `PAWN_ATTACK_TABLE[Side::White as usize]` holds White's attacks; this table does not include
/// forward pushes.
const PAWN_ATTACK_TABLE: [[Bitboard; 64]; 2] = [
    create_step_attacks(&[Direction::NORTHEAST, Direction::NORTHWEST], 1),
    create_step_attacks(&[Direction::SOUTHEAST, Direction::SOUTHWEST], 1),
];

/// Get the step attacks reachable by moving in each of `dirs` from every square, discarding any
/// step that would wrap around a board edge (identified by a Chebyshev distance greater than
/// `max_dist`).
const fn create_step_attacks(dirs: &[Direction], max_dist: u8) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut i = 0;
    #[allow(clippy::cast_possible_truncation)]
    while i < attacks.len() {
        // SAFETY: `attacks` has 64 elements, matching the number of `Square`s.
        let sq: Square = unsafe { transmute(i as u8) };
        let mut j = 0;
        #[allow(clippy::cast_sign_loss)]
        while j < dirs.len() {
            let dir = dirs[j];
            let target_disc = sq as i8 + dir.0;
            if target_disc < 0 || 64 <= target_disc {
                j += 1;
                continue;
            }
            #[allow(clippy::cast_sign_loss)]
            let target: Square = unsafe { transmute(target_disc as u8) };
            if target.chebyshev_to(sq) <= max_dist {
                attacks[i] = attacks[i].with_square(target);
            }
            j += 1;
        }
        i += 1;
    }

    attacks
}

#[must_use]
/// The squares a knight attacks from `sq`, independent of occupancy.
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[must_use]
/// The squares a king attacks from `sq`, independent of occupancy.
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

#[must_use]
/// The squares a bishop or queen, belonging to `side`, threatens along ranks and files as well as
/// diagonals: `bishop_attacks ∪ rook_attacks`.
pub fn queen_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    bishop_attacks(occupancy, sq) | rook_attacks(occupancy, sq)
}

#[must_use]
/// The squares a pawn of `side` diagonally attacks from `sq`, regardless of whether those squares
/// are occupied.
pub fn pawn_attacks(side: Side, sq: Square) -> Bitboard {
    PAWN_ATTACK_TABLE[side as usize][sq as usize]
}

#[must_use]
/// The squares a pawn of `side` could push forward to from `sq`, given `occupancy`: one step if
/// the square ahead is empty, or two steps from the pawn's start rank if both squares ahead are
/// empty.
pub fn pawn_pushes(side: Side, sq: Square, occupancy: Bitboard) -> Bitboard {
    let dir = side.pawn_direction();
    let one_step = sq + dir;
    if occupancy.contains(one_step) {
        return Bitboard::EMPTY;
    }
    let mut pushes = Bitboard::EMPTY.with_square(one_step);
    if side.pawn_start_rank().contains(sq) {
        let two_steps = one_step + dir;
        if !occupancy.contains(two_steps) {
            pushes = pushes.with_square(two_steps);
        }
    }
    pushes
}

#[cfg(test)]
mod leaper_tests {
    use super::*;

    #[test]
    fn knight_attacks_center() {
        let attacks = knight_attacks(Square::D4);
        assert_eq!(attacks.len(), 8);
    }

    #[test]
    fn king_attacks_corner() {
        let attacks = king_attacks(Square::A1);
        assert_eq!(attacks.len(), 3);
    }

    #[test]
    fn pawn_double_push_blocked() {
        let occ = Bitboard::EMPTY.with_square(Square::A3);
        let pushes = pawn_pushes(Side::White, Square::A2, occ);
        assert_eq!(pushes, Bitboard::EMPTY);
    }

    #[test]
    fn pawn_double_push_open() {
        let pushes = pawn_pushes(Side::White, Square::A2, Bitboard::EMPTY);
        assert_eq!(
            pushes,
            Bitboard::EMPTY.with_square(Square::A3).with_square(Square::A4)
        );
    }

    #[test]
    fn black_pawn_pushes_south() {
        let pushes = pawn_pushes(Side::Black, Square::A7, Bitboard::EMPTY);
        assert_eq!(
            pushes,
            Bitboard::EMPTY.with_square(Square::A6).with_square(Square::A5)
        );
    }

    #[test]
    fn queen_is_union_of_bishop_and_rook() {
        let occ = Bitboard::EMPTY.with_square(Square::D5).with_square(Square::F3);
        assert_eq!(
            queen_attacks(occ, Square::D3),
            bishop_attacks(occ, Square::D3) | rook_attacks(occ, Square::D3)
        );
    }
}
