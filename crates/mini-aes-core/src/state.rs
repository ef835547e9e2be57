//! Nibble and state representation helpers.

use core::fmt;
use core::ops::{BitXor, BitXorAssign};

/// A 4-bit value carried in the low bits of a `u8`.
pub type Nibble = u8;

/// Mask selecting the four bits of a [`Nibble`].
pub const NIBBLE_MASK: u8 = 0x0f;

/// Number of nibbles in a Mini-AES block.
pub const NIBBLES_PER_BLOCK: usize = 4;

/// Mini-AES block of four nibbles, laid out row-major over a 2×2 grid:
///
/// ```text
/// n0 n1
/// n2 n3
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State([Nibble; NIBBLES_PER_BLOCK]);

impl State {
    /// The all-zero block.
    pub const ZERO: Self = Self([0; NIBBLES_PER_BLOCK]);

    /// Builds a state from four nibbles, masking each to its low four bits.
    pub fn new(nibbles: [Nibble; NIBBLES_PER_BLOCK]) -> Self {
        Self(nibbles.map(|n| n & NIBBLE_MASK))
    }

    /// Splits a 16-bit word into nibbles, most significant first.
    pub fn from_u16(word: u16) -> Self {
        Self::new([
            (word >> 12) as u8,
            (word >> 8) as u8,
            (word >> 4) as u8,
            word as u8,
        ])
    }

    /// Packs the nibbles back into a 16-bit word.
    pub fn to_u16(self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, &n| (acc << 4) | u16::from(n))
    }

    /// Returns the nibbles in row-major order.
    #[inline]
    pub fn nibbles(&self) -> [Nibble; NIBBLES_PER_BLOCK] {
        self.0
    }

    #[inline]
    pub(crate) fn nibbles_mut(&mut self) -> &mut [Nibble; NIBBLES_PER_BLOCK] {
        &mut self.0
    }
}

/// XORs two states nibble-wise, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut State, rhs: &State) {
    for (d, r) in dst.0.iter_mut().zip(rhs.0.iter()) {
        *d ^= *r;
    }
}

impl BitXor for State {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for State {
    fn bitxor_assign(&mut self, rhs: Self) {
        xor_in_place(self, &rhs);
    }
}

impl From<u16> for State {
    fn from(word: u16) -> Self {
        Self::from_u16(word)
    }
}

impl From<State> for u16 {
    fn from(state: State) -> Self {
        state.to_u16()
    }
}

impl From<[Nibble; NIBBLES_PER_BLOCK]> for State {
    fn from(nibbles: [Nibble; NIBBLES_PER_BLOCK]) -> Self {
        Self::new(nibbles)
    }
}

/// Uppercase hex, one digit per nibble.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.0 {
            write!(f, "{:X}", n)?;
        }
        Ok(())
    }
}

/// All sixteen bits, four per nibble.
impl fmt::Binary for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.0 {
            write!(f, "{:04b}", n)?;
        }
        Ok(())
    }
}
