//! Mini-AES round transformations.

use crate::gf::gmul;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{xor_in_place, Nibble, State};

/// MixColumns matrix over GF(2⁴).
pub const MIX_MATRIX: [[Nibble; 2]; 2] = [[0x1, 0x4], [0x4, 0x1]];

/// Inverse of [`MIX_MATRIX`].
pub const INV_MIX_MATRIX: [[Nibble; 2]; 2] = [[0x9, 0x2], [0x2, 0x9]];

/// Applies SubNibbles to the state in place.
#[inline]
pub fn sub_nibbles(state: &mut State) {
    for nibble in state.nibbles_mut().iter_mut() {
        *nibble = sbox(*nibble);
    }
}

/// Applies the inverse SubNibbles transformation.
#[inline]
pub fn inv_sub_nibbles(state: &mut State) {
    for nibble in state.nibbles_mut().iter_mut() {
        *nibble = inv_sbox(*nibble);
    }
}

/// Performs ShiftRows in place: the bottom row swaps its two columns.
#[inline]
pub fn shift_rows(state: &mut State) {
    state.nibbles_mut().swap(2, 3);
}

/// Performs the inverse of ShiftRows, which for a 2×2 grid is ShiftRows itself.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    shift_rows(state);
}

// Left-multiplies the state grid by `matrix`; `+` is XOR, `*` is `gmul`.
fn mul_grid(matrix: &[[Nibble; 2]; 2], state: &mut State) {
    let n = state.nibbles();
    let grid = [[n[0], n[1]], [n[2], n[3]]];
    let mut out = [0u8; 4];
    for i in 0..2 {
        for j in 0..2 {
            out[i * 2 + j] = gmul(matrix[i][0], grid[0][j]) ^ gmul(matrix[i][1], grid[1][j]);
        }
    }
    *state = State::new(out);
}

/// MixColumns over both columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    mul_grid(&MIX_MATRIX, state);
}

/// Inverse MixColumns over both columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    mul_grid(&INV_MIX_MATRIX, state);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    xor_in_place(state, round_key);
}
