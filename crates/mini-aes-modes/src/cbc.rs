//! CBC (Cipher Block Chaining) mode.
//!
//! Encryption: `C_i = E(K, P_i ⊕ C_{i-1})` with `C_0 = IV`.
//! Decryption: `P_i = D(K, C_i) ⊕ C_{i-1}`.
//!
//! The chaining value after each block is always the ciphertext block, on both
//! sides. Blocks are processed strictly in order.

use mini_aes_core::{decrypt, encrypt, Key, State};

use crate::message::Message;
use crate::ModeOutput;

/// Zero-pads `message` and encrypts it with chaining seeded by `iv`.
pub fn encrypt_message(message: &Message, key: &Key, iv: &State) -> ModeOutput {
    let mut chain = *iv;
    message
        .padded()
        .blocks()
        .map(|block| {
            let (ciphertext, trace) = encrypt(block ^ chain, key);
            chain = ciphertext;
            (ciphertext, trace)
        })
        .collect()
}

/// Decrypts chained ciphertext blocks. Padding is left in place.
pub fn decrypt_blocks(ciphertext: &[State], key: &Key, iv: &State) -> ModeOutput {
    let mut chain = *iv;
    ciphertext
        .iter()
        .map(|&block| {
            let (decrypted, trace) = decrypt(block, key);
            let plaintext = decrypted ^ chain;
            chain = block;
            (plaintext, trace)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecb;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn message(text: &str) -> Message {
        Message::parse("message", text).unwrap()
    }

    #[test]
    fn matches_regression_vectors() {
        let key = Key::from(0xc9d2);
        let msg = message("A5B31234F");
        assert_eq!(
            encrypt_message(&msg, &key, &State::ZERO).to_hex(),
            "E3DC5DED7808"
        );
        assert_eq!(
            encrypt_message(&msg, &key, &State::from_u16(0x1f2e)).to_hex(),
            "8AEE4D61478A"
        );
    }

    #[test]
    fn zero_iv_first_block_matches_ecb() {
        let key = Key::from(0x5678);
        let msg = message("A5B31234");
        let cbc = encrypt_message(&msg, &key, &State::ZERO);
        let ecb = ecb::encrypt_message(&msg, &key);
        assert_eq!(cbc.blocks[0], ecb.blocks[0]);
        assert_ne!(cbc.blocks[1], ecb.blocks[1]);
    }

    #[test]
    fn repeated_plaintext_blocks_diverge() {
        let key = Key::from(0xc9d2);
        let out = encrypt_message(&message("12341234"), &key, &State::from_u16(0xbeef));
        assert_ne!(out.blocks[0], out.blocks[1]);
    }

    #[test]
    fn decrypt_chains_on_ciphertext_not_plaintext() {
        let key = Key::from(0xc9d2);
        let iv = State::from_u16(0x1f2e);
        let ct = encrypt_message(&message("A5B312340F0F"), &key, &iv);
        let pt = decrypt_blocks(&ct.blocks, &key, &iv);
        assert_eq!(pt.to_hex(), "A5B312340F0F");

        // Chaining on the recovered plaintext instead breaks every block after the first.
        let (second, _) = decrypt(ct.blocks[1], &key);
        assert_eq!(second ^ ct.blocks[0], pt.blocks[1]);
        assert_ne!(second ^ pt.blocks[0], pt.blocks[1]);
    }

    #[test]
    fn wrong_iv_only_corrupts_first_block() {
        let key = Key::from(0x0123);
        let ct = encrypt_message(&message("A5B31234"), &key, &State::from_u16(0x1111));
        let pt = decrypt_blocks(&ct.blocks, &key, &State::from_u16(0x2222));
        assert_ne!(pt.blocks[0], State::from_u16(0xa5b3));
        assert_eq!(pt.blocks[1], State::from_u16(0x1234));
    }

    #[test]
    fn traces_record_the_chained_cipher_input() {
        let key = Key::from(0xc9d2);
        let iv = State::from_u16(0x000f);
        let out = encrypt_message(&message("A5B0"), &key, &iv);
        assert_eq!(out.traces[0].lines()[0], "Plaintext: A5BF (1010010110111111)");
    }

    #[test]
    fn round_trip_random_messages() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let key = Key::from(rng.gen::<u16>());
            let iv = State::from_u16(rng.gen());
            let len = rng.gen_range(0..24);
            let nibbles: String = (0..len)
                .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap())
                .collect();
            let msg = message(&nibbles);
            let ct = encrypt_message(&msg, &key, &iv);
            let pt = decrypt_blocks(&ct.blocks, &key, &iv);
            assert_eq!(pt.to_hex(), msg.padded().to_string());
        }
    }
}
