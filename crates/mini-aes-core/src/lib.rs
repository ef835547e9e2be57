//! Mini-AES: a 16-bit substitution-permutation cipher for teaching.
//!
//! The crate provides:
//! - Arithmetic in GF(2⁴) used by MixColumns.
//! - The round transformations and their inverses.
//! - The key schedule and 3-round block encryption/decryption.
//! - A per-invocation [`Trace`] of every intermediate state.
//! - Hex parsing and the single-block boundary contract.
//!
//! Mini-AES is deliberately weak. It exists to make every stage of an AES-like
//! cipher visible and must not be used to protect anything.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod gf;
mod hex;
mod key;
mod round;
mod sbox;
mod state;
mod trace;

pub use crate::cipher::{
    decrypt, decrypt_block, encrypt, encrypt_block, expand_key, expand_key_traced, ROUNDS,
};
pub use crate::error::{Error, Expected, Result};
pub use crate::gf::{gmul, REDUCTION_POLY};
pub use crate::hex::{
    decrypt_hex, encrypt_hex, format_nibbles, parse_block, parse_key, parse_nibbles,
};
pub use crate::key::{Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_nibbles, mix_columns, shift_rows,
    sub_nibbles, INV_MIX_MATRIX, MIX_MATRIX,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::state::{xor_in_place, Nibble, State, NIBBLES_PER_BLOCK, NIBBLE_MASK};
pub use crate::trace::Trace;
