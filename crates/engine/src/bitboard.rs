use crate::types::Square;

pub type Bitboard = u64;

pub const BITBOARD_EMPTY: Bitboard = 0;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
const KING_OFFSETS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Pre-generated knight attack masks, one per square.
pub static KNIGHT_ATTACKS: [Bitboard; 64] = build_attack_table(&KNIGHT_OFFSETS);

/// Pre-generated king attack masks, one per square.
pub static KING_ATTACKS: [Bitboard; 64] = build_attack_table(&KING_OFFSETS);

const fn build_attack_table(offsets: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [BITBOARD_EMPTY; 64];
    let mut square: usize = 0;
    while square < 64 {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let mut attacks = BITBOARD_EMPTY;
        let mut i = 0;
        while i < offsets.len() {
            let new_file = file + offsets[i].0;
            let new_rank = rank + offsets[i].1;
            if new_file >= 0 && new_file < 8 && new_rank >= 0 && new_rank < 8 {
                attacks |= 1u64 << ((new_rank * 8 + new_file) as u32);
            }
            i += 1;
        }
        table[square] = attacks;
        square += 1;
    }
    table
}

pub fn get_knight_attacks(square: u8) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

pub fn get_king_attacks(square: u8) -> Bitboard {
    KING_ATTACKS[square as usize]
}

pub fn index_to_square(index: u8) -> Square {
    Square(index)
}

// Pop LSB (remove and return the least significant bit)
pub fn pop_lsb(bitboard: &mut Bitboard) -> Option<u8> {
    if *bitboard == 0 {
        None
    } else {
        let lsb = bitboard.trailing_zeros() as u8;
        *bitboard &= *bitboard - 1;
        Some(lsb)
    }
}

pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl Iterator for BitboardIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        pop_lsb(&mut self.bitboard)
    }
}

/// Iterate the indices of the set bits, lowest first.
pub fn iterate_bits(bitboard: Bitboard) -> BitboardIterator {
    BitboardIterator { bitboard }
}
