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

//! Turning a problem genre and move count into a concrete requirement list and starting side.

use crate::base::Side;

use super::RequirementKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A problem genre, parameterized by its move count.
pub enum Stipulation {
    /// White to play and mate in `N` moves, with Black defending optimally.
    DirectMate(u32),
    /// Both sides cooperate, Black moving first, to reach mate in `N` moves each.
    HelpMate(u32),
    /// Both sides cooperate, White moving first with a single half-move, to reach mate in `N`
    /// moves each thereafter.
    HelpMateHalf(u32),
}

impl Stipulation {
    #[must_use]
    /// The move count `N` this stipulation was parameterized with, regardless of genre.
    ///
    /// Callers should check this is at least 1 before passing the stipulation to [`build`]: `N`
    /// is read straight off the command line with no lower bound of its own, and `build` assumes
    /// its precondition has already been enforced.
    pub const fn move_count(self) -> u32 {
        match self {
            Stipulation::DirectMate(n) | Stipulation::HelpMate(n) | Stipulation::HelpMateHalf(n) => n,
        }
    }
}

/// Build the starting side and per-ply requirement list for `stipulation`.
///
/// A direct-mate in `N` alternates the attacker's free choice (`Any`) with the defender's
/// exhaustive reply (`AllOrMate`), for `N` attacker plies and `N - 1` defender plies, finishing
/// with the attacker's mating move (`Mate`):
/// `[Any, AllOrMate, Any, AllOrMate, ..., Any, Mate]`, length `2N`.
///
/// A help-mate in `N` is `2N` plies of mutual cooperation, Black moving first, every ply `Any`
/// except the last, which is `Mate`.
///
/// A help-mate in `N`½ is the same, but with an extra leading White half-move, for `2N + 1` plies
/// total.
///
/// # Panics
///
/// Panics if `stipulation`'s move count is 0. Callers reachable from outside this crate (the CLI
/// in particular) must validate [`Stipulation::move_count`] themselves and report a
/// [`crate::SolverError`] before ever constructing a `Stipulation` to pass here.
#[must_use]
pub fn build(stipulation: Stipulation) -> (Side, Vec<RequirementKind>) {
    match stipulation {
        Stipulation::DirectMate(n) => {
            assert!(n >= 1, "a direct-mate stipulation needs at least one move");
            let mut reqs = Vec::with_capacity(2 * n as usize);
            for _ in 0..(n - 1) {
                reqs.push(RequirementKind::Any);
                reqs.push(RequirementKind::AllOrMate);
            }
            reqs.push(RequirementKind::Any);
            reqs.push(RequirementKind::Mate);
            (Side::White, reqs)
        }
        Stipulation::HelpMate(n) => {
            assert!(n >= 1, "a help-mate stipulation needs at least one move");
            let mut reqs = vec![RequirementKind::Any; 2 * n as usize];
            *reqs.last_mut().expect("non-empty") = RequirementKind::Mate;
            (Side::Black, reqs)
        }
        Stipulation::HelpMateHalf(n) => {
            assert!(n >= 1, "a help-mate-half stipulation needs at least one move");
            let mut reqs = vec![RequirementKind::Any; 2 * n as usize + 1];
            *reqs.last_mut().expect("non-empty") = RequirementKind::Mate;
            (Side::White, reqs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RequirementKind::{AllOrMate, Any, Mate};

    #[test]
    fn move_count_reads_back_the_parameter() {
        assert_eq!(Stipulation::DirectMate(4).move_count(), 4);
        assert_eq!(Stipulation::HelpMate(3).move_count(), 3);
        assert_eq!(Stipulation::HelpMateHalf(2).move_count(), 2);
    }

    #[test]
    fn direct_mate_two_has_expected_shape() {
        let (side, reqs) = build(Stipulation::DirectMate(2));
        assert_eq!(side, Side::White);
        assert_eq!(reqs, vec![Any, AllOrMate, Any, Mate]);
    }

    #[test]
    fn direct_mate_three_has_expected_shape() {
        let (side, reqs) = build(Stipulation::DirectMate(3));
        assert_eq!(side, Side::White);
        assert_eq!(reqs, vec![Any, AllOrMate, Any, AllOrMate, Any, Mate]);
    }

    #[test]
    fn help_mate_two_has_expected_shape() {
        let (side, reqs) = build(Stipulation::HelpMate(2));
        assert_eq!(side, Side::Black);
        assert_eq!(reqs, vec![Any, Any, Any, Mate]);
    }

    #[test]
    fn help_mate_half_two_has_expected_shape() {
        let (side, reqs) = build(Stipulation::HelpMateHalf(2));
        assert_eq!(side, Side::White);
        assert_eq!(reqs, vec![Any, Any, Any, Any, Mate]);
        assert_eq!(reqs.len(), 5);
    }
}
