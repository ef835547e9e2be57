//! Modes of operation for Mini-AES.
//!
//! Messages are arbitrary-length hex digit sequences. On encryption they are
//! zero-padded to a multiple of four digits and split into 16-bit blocks; each
//! block goes through one traced Mini-AES invocation.
//!
//! - **ECB**: blocks are encrypted independently.
//! - **CBC**: each block is XORed with the previous ciphertext block (the IV for
//!   the first) before encryption.
//!
//! The `*_encrypt`/`*_decrypt` functions at the crate root are the hex boundary:
//! every argument is validated before the first block is touched.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cbc;
pub mod ecb;
mod message;

use mini_aes_core::{parse_block, parse_key, Result, State, Trace};

pub use crate::message::{pad_to_block_boundary, parse_blocks, Message};

/// Output blocks of a mode operation with one trace per block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModeOutput {
    /// Result blocks in message order.
    pub blocks: Vec<State>,
    /// Trace of the cipher invocation behind each block.
    pub traces: Vec<Trace>,
}

impl ModeOutput {
    /// Result blocks as uppercase hex digits.
    pub fn to_hex(&self) -> String {
        Message::from_blocks(&self.blocks).to_string()
    }

    /// Splits into the hex result and the per-block traces.
    pub fn into_hex(self) -> (String, Vec<Trace>) {
        (self.to_hex(), self.traces)
    }
}

impl FromIterator<(State, Trace)> for ModeOutput {
    fn from_iter<I: IntoIterator<Item = (State, Trace)>>(iter: I) -> Self {
        let (blocks, traces) = iter.into_iter().unzip();
        Self { blocks, traces }
    }
}

/// ECB-encrypts a hex message of any length.
pub fn ecb_encrypt(message_hex: &str, key_hex: &str) -> Result<(String, Vec<Trace>)> {
    let message = Message::parse("message", message_hex)?;
    let key = parse_key(key_hex)?;
    Ok(ecb::encrypt_message(&message, &key).into_hex())
}

/// ECB-decrypts hex ciphertext made of whole blocks.
pub fn ecb_decrypt(ciphertext_hex: &str, key_hex: &str) -> Result<(String, Vec<Trace>)> {
    let ciphertext = parse_blocks("ciphertext", ciphertext_hex)?;
    let key = parse_key(key_hex)?;
    Ok(ecb::decrypt_blocks(&ciphertext, &key).into_hex())
}

/// CBC-encrypts a hex message of any length with a four-digit IV.
pub fn cbc_encrypt(
    message_hex: &str,
    key_hex: &str,
    iv_hex: &str,
) -> Result<(String, Vec<Trace>)> {
    let message = Message::parse("message", message_hex)?;
    let key = parse_key(key_hex)?;
    let iv = parse_block("iv", iv_hex)?;
    Ok(cbc::encrypt_message(&message, &key, &iv).into_hex())
}

/// CBC-decrypts hex ciphertext made of whole blocks.
pub fn cbc_decrypt(
    ciphertext_hex: &str,
    key_hex: &str,
    iv_hex: &str,
) -> Result<(String, Vec<Trace>)> {
    let ciphertext = parse_blocks("ciphertext", ciphertext_hex)?;
    let key = parse_key(key_hex)?;
    let iv = parse_block("iv", iv_hex)?;
    Ok(cbc::decrypt_blocks(&ciphertext, &key, &iv).into_hex())
}
