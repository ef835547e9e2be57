//! Arithmetic in GF(2⁴)/(x⁴ + x + 1), the field used by MixColumns.

use crate::state::{Nibble, NIBBLE_MASK};

/// Reduction polynomial x⁴ + x + 1 (`0b10011`).
pub const REDUCTION_POLY: u8 = 0x13;

/// Multiplies two field elements (carry-less shift-and-add, reduced mod x⁴ + x + 1).
pub fn gmul(a: Nibble, b: Nibble) -> Nibble {
    let mut a = a & NIBBLE_MASK;
    let mut b = b & NIBBLE_MASK;
    let mut product = 0u8;
    for _ in 0..4 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x10 != 0 {
            a ^= REDUCTION_POLY;
        }
        b >>= 1;
    }
    product & NIBBLE_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_products() {
        assert_eq!(gmul(4, 4), 3);
        assert_eq!(gmul(9, 2), 1);
        assert_eq!(gmul(4, 9), 2);
        assert_eq!(gmul(0xf, 0xf), 0xa);
    }

    #[test]
    fn commutative_with_identity_and_zero() {
        for a in 0..16u8 {
            assert_eq!(gmul(a, 0), 0);
            assert_eq!(gmul(1, a), a);
            for b in 0..16u8 {
                assert_eq!(gmul(a, b), gmul(b, a), "{a} * {b}");
                assert!(gmul(a, b) <= NIBBLE_MASK);
            }
        }
    }

    #[test]
    fn distributes_over_xor() {
        for a in 0..16u8 {
            for b in 0..16u8 {
                for c in 0..16u8 {
                    assert_eq!(gmul(a, b ^ c), gmul(a, b) ^ gmul(a, c));
                }
            }
        }
    }

    #[test]
    fn every_nonzero_element_has_an_inverse() {
        for a in 1..16u8 {
            assert!((1..16u8).any(|b| gmul(a, b) == 1), "{a} has no inverse");
        }
    }
}
