//! ECB (Electronic Code Book) mode: every block is encrypted on its own.

use mini_aes_core::{decrypt, encrypt, Key, State};

use crate::message::Message;
use crate::ModeOutput;

/// Zero-pads `message` and encrypts each block independently under `key`.
pub fn encrypt_message(message: &Message, key: &Key) -> ModeOutput {
    message
        .padded()
        .blocks()
        .map(|block| encrypt(block, key))
        .collect()
}

/// Decrypts each ciphertext block independently. Padding is left in place.
pub fn decrypt_blocks(ciphertext: &[State], key: &Key) -> ModeOutput {
    ciphertext
        .iter()
        .map(|block| decrypt(*block, key))
        .collect()
}
