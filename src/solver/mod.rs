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

//! The recursive backtracking search: given a board and a list of per-ply requirements, find
//! every line of play that satisfies them all.

mod requirement;
pub mod stipulation;

pub use requirement::RequirementKind;
pub use stipulation::Stipulation;

use crate::base::{generate_moves, Board, Move};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Why a candidate line of play did not produce a solution.
pub enum Fail {
    /// The position reached is not a solution, but is not itself illegal either: some requirement
    /// further down the line was not met. This is the terminal "no solutions" outcome once it
    /// reaches the top of the search.
    NotFound,
    /// The move that produced this position left its own king attacked (or never escaped check).
    /// Always recovered locally by the parent ply; never surfaces past [`solve`].
    IllegalMove,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One move in a solution, together with every continuation the rest of the line permits from
/// here. A leaf (the final ply of a line) has no children.
pub struct Solution {
    /// The move played at this ply.
    pub mv: Move,
    /// Every continuation satisfying the remaining requirements, if any are left to satisfy.
    pub children: Vec<Solution>,
}

/// Is `board`'s own king currently attacked by the side *not* to move, i.e. is the side to move
/// in check right now?
///
/// [`Board::king_threatened`] answers the opposite question (is the side that just moved now
/// exposed to the side to move); flipping first turns it around.
fn in_check(board: &Board) -> bool {
    let mut flipped = *board;
    flipped.flip_side();
    flipped.king_threatened()
}

/// Search every pseudo-legal line of play from `board` that satisfies `reqs`, one requirement per
/// ply, returning every solution found.
///
/// Returns [`Fail::NotFound`] if no such line exists, or [`Fail::IllegalMove`] if `board` itself
/// is reached with its mover having left its own king in check (this can only happen for a
/// malformed starting position, since every recursive call flips the side after applying a move).
///
/// # Examples
///
/// ```
/// use fairysolve::base::{Board, PieceColour, PieceKind, Side, Square};
/// use fairysolve::solver::{solve, RequirementKind};
///
/// let mut board = Board::empty(Side::White);
/// board.place(Square::F8, PieceKind::King, PieceColour::White);
/// board.place(Square::H1, PieceKind::Rook, PieceColour::White);
/// board.place(Square::G6, PieceKind::Pawn, PieceColour::White);
/// board.place(Square::H8, PieceKind::King, PieceColour::Black);
/// board.place(Square::G8, PieceKind::Bishop, PieceColour::Black);
/// board.place(Square::G7, PieceKind::Pawn, PieceColour::Black);
/// board.place(Square::H7, PieceKind::Pawn, PieceColour::Black);
///
/// let reqs = [RequirementKind::Any, RequirementKind::AllOrMate, RequirementKind::Any, RequirementKind::Mate];
/// let solutions = solve(&board, &reqs).unwrap();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].mv.to_string(), "Rh1-h6");
/// ```
pub fn solve(board: &Board, reqs: &[RequirementKind]) -> Result<Vec<Solution>, Fail> {
    if board.king_threatened() {
        return Err(Fail::IllegalMove);
    }
    let Some((&req, rest)) = reqs.split_first() else {
        return Ok(Vec::new());
    };
    let moves = generate_moves(board);
    match req {
        RequirementKind::Any => solve_any(board, &moves, rest),
        RequirementKind::AllOrMate => solve_all_or_mate(board, &moves, rest),
        RequirementKind::Mate => solve_mate(board, &moves, rest),
    }
}

/// Play out `m` on a copy of `board`, handing the turn to the opponent.
fn make_move(board: &Board, m: Move) -> Board {
    let mut child = *board;
    child.apply_move(m);
    child.flip_side();
    child
}

/// `Any`: at least one continuation must satisfy the rest of the line; every continuation that
/// does is kept.
fn solve_any(board: &Board, moves: &[Move], rest: &[RequirementKind]) -> Result<Vec<Solution>, Fail> {
    let mut acc = Vec::new();
    for &mv in moves {
        if let Ok(children) = solve(&make_move(board, mv), rest) {
            acc.push(Solution { mv, children });
        }
    }
    if acc.is_empty() {
        Err(Fail::NotFound)
    } else {
        Ok(acc)
    }
}

/// `AllOrMate`: every continuation that does not self-expose must satisfy the rest of the line.
/// A legal reply that fails the rest of the line refutes the whole branch; if there is no legal
/// reply at all, the branch vacuously passes when that is because the side to move is mated, but
/// fails when it is merely stalemated (see the solver design notes on intermediate stalemate).
fn solve_all_or_mate(
    board: &Board,
    moves: &[Move],
    rest: &[RequirementKind],
) -> Result<Vec<Solution>, Fail> {
    let mut acc = Vec::new();
    let mut has_legal_reply = false;
    for &mv in moves {
        match solve(&make_move(board, mv), rest) {
            Ok(children) => {
                has_legal_reply = true;
                acc.push(Solution { mv, children });
            }
            // a single unrefuted legal reply refutes the whole branch
            Err(Fail::NotFound) => return Err(Fail::NotFound),
            Err(Fail::IllegalMove) => {}
        }
    }
    if has_legal_reply {
        Ok(acc)
    } else if in_check(board) {
        // no legal reply, and the side to move is mated: a vacuous pass
        Ok(acc)
    } else {
        // no legal reply, but the side to move is merely stalemated: a failure
        Err(Fail::NotFound)
    }
}

/// `Mate`: the side to move must have no move that leaves its own king unattacked, and its king
/// must currently be attacked. Any legal escape refutes the branch immediately.
fn solve_mate(board: &Board, moves: &[Move], rest: &[RequirementKind]) -> Result<Vec<Solution>, Fail> {
    for &mv in moves {
        match solve(&make_move(board, mv), rest) {
            Ok(_) => return Err(Fail::NotFound),
            Err(Fail::IllegalMove) => {}
            Err(Fail::NotFound) => return Err(Fail::NotFound),
        }
    }
    if in_check(board) {
        Ok(Vec::new())
    } else {
        Err(Fail::NotFound)
    }
}

/// Run [`solve`] from the root, emitting a gated progress trace to stderr naming each top-ply move
/// under consideration and the running solution count. `verbosity` is the number of times
/// `--verbose` was given on the command line; `0` prints nothing.
///
/// The root requirement is always [`RequirementKind::Any`] (every stipulation the builder produces
/// starts that way), so this duplicates just that one case from [`solve`] rather than threading a
/// depth counter through the whole recursion.
#[must_use]
pub fn solve_with_progress(
    board: &Board,
    reqs: &[RequirementKind],
    verbosity: u8,
) -> Result<Vec<Solution>, Fail> {
    if board.king_threatened() {
        return Err(Fail::IllegalMove);
    }
    let Some((&req, rest)) = reqs.split_first() else {
        return Ok(Vec::new());
    };
    debug_assert_eq!(req, RequirementKind::Any, "a stipulation's first ply is always Any");
    let moves = generate_moves(board);
    if verbosity > 0 {
        eprintln!("info searching {} candidate move(s)", moves.len());
    }
    let mut acc = Vec::new();
    for &mv in &moves {
        match solve(&make_move(board, mv), rest) {
            Ok(children) => {
                acc.push(Solution { mv, children });
                if verbosity > 0 {
                    eprintln!("info {mv} solves ({} found so far)", acc.len());
                }
            }
            Err(_) if verbosity > 1 => eprintln!("info {mv} does not solve"),
            Err(_) => {}
        }
    }
    if acc.is_empty() {
        if verbosity > 0 {
            eprintln!("info search complete, no solutions found");
        }
        Err(Fail::NotFound)
    } else {
        if verbosity > 0 {
            eprintln!("info search complete, {} solution(s) found", acc.len());
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{PieceColour, PieceKind, Side, Square};

    fn board_with(pieces: &[(Square, PieceKind, PieceColour)], side: Side) -> Board {
        let mut b = Board::empty(side);
        for &(sq, kind, colour) in pieces {
            b.place(sq, kind, colour);
        }
        b
    }

    /// S4: direct-mate in 2. White mates uniquely starting `Rh1-h6`, with seven Black replies
    /// each refuted by a unique mating move.
    #[test]
    fn s4_direct_mate_in_2() {
        let board = board_with(
            &[
                (Square::F8, PieceKind::King, PieceColour::White),
                (Square::H1, PieceKind::Rook, PieceColour::White),
                (Square::G6, PieceKind::Pawn, PieceColour::White),
                (Square::H8, PieceKind::King, PieceColour::Black),
                (Square::G8, PieceKind::Bishop, PieceColour::Black),
                (Square::G7, PieceKind::Pawn, PieceColour::Black),
                (Square::H7, PieceKind::Pawn, PieceColour::Black),
            ],
            Side::White,
        );
        let (side, reqs) = stipulation::build(Stipulation::DirectMate(2));
        assert_eq!(side, Side::White);
        let solutions = solve(&board, &reqs).expect("a mate in 2 exists");
        assert_eq!(solutions.len(), 1);
        let root = &solutions[0];
        assert_eq!(root.mv.to_string(), "Rh1-h6");
        assert_eq!(root.children.len(), 7);
        for reply in &root.children {
            assert_eq!(reply.children.len(), 1, "each Black reply has one mating continuation");
            let mating_move = &reply.children[0];
            if reply.mv.to_string() == "Pg7*h6" {
                assert_eq!(mating_move.mv.to_string(), "Pg6-g7");
            } else {
                assert_eq!(mating_move.mv.to_string(), "Rh6*h7");
            }
            assert!(mating_move.children.is_empty());
        }
    }

    /// S5: help-mate in 2, two cooperative solutions.
    #[test]
    fn s5_help_mate_in_2() {
        let board = board_with(
            &[
                (Square::F3, PieceKind::King, PieceColour::White),
                (Square::E5, PieceKind::Rook, PieceColour::White),
                (Square::F8, PieceKind::Bishop, PieceColour::White),
                (Square::A4, PieceKind::Bishop, PieceColour::White),
                (Square::F6, PieceKind::King, PieceColour::Black),
                (Square::F7, PieceKind::Pawn, PieceColour::Black),
                (Square::D6, PieceKind::Pawn, PieceColour::Black),
            ],
            Side::Black,
        );
        let (side, reqs) = stipulation::build(Stipulation::HelpMate(2));
        assert_eq!(side, Side::Black);
        let solutions = solve(&board, &reqs).expect("two help-mates exist");

        fn line(mut sol: &Solution) -> Vec<String> {
            let mut moves = vec![sol.mv.to_string()];
            while let Some(child) = sol.children.first() {
                moves.push(child.mv.to_string());
                sol = child;
            }
            moves
        }

        let mut lines: Vec<Vec<String>> = solutions.iter().map(line).collect();
        lines.sort();
        let mut expect = vec![
            vec!["Kf6*e5", "Ba4-b3", "Pf7-f5", "Bf8-g7"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
            vec!["Kf6-g6", "Re5-h5", "Pf7-f6", "Ba4-e8"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
        ];
        expect.sort();
        assert_eq!(lines, expect);
    }

    /// S6: help-mate in 2 with a forced under-promotion to knight.
    #[test]
    fn s6_help_mate_with_underpromotion() {
        let board = board_with(
            &[
                (Square::H2, PieceKind::Pawn, PieceColour::White),
                (Square::G3, PieceKind::Rook, PieceColour::White),
                (Square::A5, PieceKind::King, PieceColour::White),
                (Square::B5, PieceKind::Bishop, PieceColour::White),
                (Square::E7, PieceKind::Pawn, PieceColour::White),
                (Square::E2, PieceKind::Pawn, PieceColour::Black),
                (Square::F2, PieceKind::King, PieceColour::Black),
                (Square::C5, PieceKind::Queen, PieceColour::Black),
                (Square::E5, PieceKind::Pawn, PieceColour::Black),
                (Square::F7, PieceKind::Rook, PieceColour::Black),
            ],
            Side::Black,
        );
        let (side, reqs) = stipulation::build(Stipulation::HelpMate(2));
        assert_eq!(side, Side::Black);
        let solutions = solve(&board, &reqs).expect("a unique help-mate exists");
        assert_eq!(solutions.len(), 1);

        let mut sol = &solutions[0];
        let mut moves = vec![sol.mv.to_string()];
        while let Some(child) = sol.children.first() {
            moves.push(child.mv.to_string());
            sol = child;
        }
        assert_eq!(moves, vec!["Rf7-f8", "Pe7*f8=B", "Pe2-e1=S", "Bf8*c5"]);
    }

    /// A legal reply that survives (no mate follows) must refute the whole `AllOrMate` branch,
    /// even when another legal reply happens to walk straight into mate. Regression test for a
    /// bug where `solve_all_or_mate` returned `Ok` as soon as it found one mating branch, without
    /// checking whether every other legal reply was also refuted.
    #[test]
    fn all_or_mate_fails_if_any_legal_reply_survives() {
        let board = board_with(
            &[
                (Square::H8, PieceKind::King, PieceColour::White),
                (Square::A1, PieceKind::King, PieceColour::Black),
                (Square::G1, PieceKind::Rook, PieceColour::Black),
                (Square::A2, PieceKind::Rook, PieceColour::Black),
            ],
            Side::Black,
        );
        // Black to move. Ra2-h2 boxes White's king in with mate (Rg1 already covers g7/g8, Rh2
        // covers h7), but Ka1-b1 (and Ka1-b2) leaves White's king with nowhere near check at all.
        // Every legal reply must be mated for the branch to succeed; it isn't, so the whole thing
        // must fail, not succeed on the strength of the one mating reply alone.
        assert_eq!(
            solve(&board, &[RequirementKind::AllOrMate, RequirementKind::Mate]),
            Err(Fail::NotFound)
        );
    }

    #[test]
    fn empty_requirement_list_is_trivially_solved() {
        let board = board_with(&[(Square::E1, PieceKind::King, PieceColour::White)], Side::White);
        assert_eq!(solve(&board, &[]), Ok(Vec::new()));
    }

    #[test]
    fn solve_with_progress_agrees_with_solve() {
        let board = board_with(
            &[
                (Square::F8, PieceKind::King, PieceColour::White),
                (Square::H1, PieceKind::Rook, PieceColour::White),
                (Square::G6, PieceKind::Pawn, PieceColour::White),
                (Square::H8, PieceKind::King, PieceColour::Black),
                (Square::G8, PieceKind::Bishop, PieceColour::Black),
                (Square::G7, PieceKind::Pawn, PieceColour::Black),
                (Square::H7, PieceKind::Pawn, PieceColour::Black),
            ],
            Side::White,
        );
        let (_, reqs) = stipulation::build(Stipulation::DirectMate(2));
        assert_eq!(solve(&board, &reqs), solve_with_progress(&board, &reqs, 2));
    }
}
