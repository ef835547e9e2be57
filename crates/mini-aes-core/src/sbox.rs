//! The 4-bit substitution box and its inverse.

use crate::state::Nibble;

/// Forward substitution table.
pub const SBOX: [Nibble; 16] = [
    0x9, 0x4, 0xa, 0xb, 0xd, 0x1, 0x8, 0x5, 0x6, 0x2, 0x0, 0x3, 0xc, 0xe, 0xf, 0x7,
];

/// Inverse substitution table.
pub const INV_SBOX: [Nibble; 16] = [
    0xa, 0x5, 0x9, 0xb, 0x1, 0x7, 0x8, 0xf, 0x6, 0x0, 0x2, 0x3, 0xc, 0x4, 0xd, 0xe,
];

/// Substitutes a nibble through [`SBOX`].
#[inline]
pub fn sbox(nibble: Nibble) -> Nibble {
    SBOX[usize::from(nibble)]
}

/// Substitutes a nibble through [`INV_SBOX`].
#[inline]
pub fn inv_sbox(nibble: Nibble) -> Nibble {
    INV_SBOX[usize::from(nibble)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_table_undoes_forward_table() {
        for n in 0..16u8 {
            assert_eq!(inv_sbox(sbox(n)), n);
            assert_eq!(sbox(inv_sbox(n)), n);
        }
    }

    #[test]
    fn forward_table_is_a_permutation() {
        let mut seen = [false; 16];
        for &v in SBOX.iter() {
            assert!(!seen[usize::from(v)]);
            seen[usize::from(v)] = true;
        }
    }
}
