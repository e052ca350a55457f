use super::*;

/// S1: a rook on an empty board sees its whole rank and file.
#[test]
fn s1_rook_attacks_empty_board() {
    let attacks = rook_attacks(Bitboard::EMPTY, Square::A1);
    let mut expect = Bitboard::EMPTY;
    for sq in [
        Square::A2,
        Square::A3,
        Square::A4,
        Square::A5,
        Square::A6,
        Square::A7,
        Square::A8,
        Square::B1,
        Square::C1,
        Square::D1,
        Square::E1,
        Square::F1,
        Square::G1,
        Square::H1,
    ] {
        expect = expect.with_square(sq);
    }
    assert_eq!(attacks, expect);
}

/// S2: a rook's rays stop at (and include) the first blocker in each direction.
#[test]
fn s2_rook_attacks_blocked() {
    let occupancy = Bitboard::EMPTY
        .with_square(Square::D5)
        .with_square(Square::F3);
    let attacks = rook_attacks(occupancy, Square::D3);
    let mut expect = Bitboard::EMPTY;
    for sq in [
        Square::D1,
        Square::D2,
        Square::D4,
        Square::D5,
        Square::A3,
        Square::B3,
        Square::C3,
        Square::E3,
        Square::F3,
    ] {
        expect = expect.with_square(sq);
    }
    assert_eq!(attacks, expect);
}

/// Universal property 2: queen attacks are the union of bishop and rook attacks, for every
/// square and a representative sample of occupancies.
#[test]
fn queen_attacks_is_union_everywhere() {
    for sq in Bitboard::ALL {
        for occ_bits in [0u64, 0xFFFF_FFFF_FFFF_FFFF, 0x0102_0408_1020_4081, 0xAA55_AA55_AA55_AA55]
        {
            let occ = Bitboard::new(occ_bits);
            assert_eq!(
                queen_attacks(occ, sq),
                bishop_attacks(occ, sq) | rook_attacks(occ, sq)
            );
        }
    }
}

#[test]
fn pawn_attacks_never_include_straight_ahead() {
    let attacks = pawn_attacks(Side::White, Square::D4);
    assert!(!attacks.contains(Square::D5));
    assert!(attacks.contains(Square::C5));
    assert!(attacks.contains(Square::E5));
}

#[test]
fn edge_knight_has_fewer_attacks_than_center() {
    assert!(knight_attacks(Square::A1).len() < knight_attacks(Square::D4).len());
}
