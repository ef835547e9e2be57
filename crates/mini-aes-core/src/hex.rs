//! Hex boundary: validation of caller-supplied digits and the single-block contract.
//!
//! Input is case-insensitive; output is uppercase. Single-block arguments are
//! checked for length before their digits.

use core::str::FromStr;

use crate::cipher::{decrypt, encrypt};
use crate::error::{Error, Expected, Result};
use crate::key::Key;
use crate::state::{Nibble, State, NIBBLES_PER_BLOCK};
use crate::trace::Trace;

/// Parses a hex digit sequence of any length into nibbles.
pub fn parse_nibbles(argument: &'static str, text: &str) -> Result<Vec<Nibble>> {
    text.chars()
        .enumerate()
        .map(|(position, digit)| {
            digit
                .to_digit(16)
                .map(|value| value as Nibble)
                .ok_or(Error::InvalidDigit {
                    argument,
                    digit,
                    position,
                })
        })
        .collect()
}

/// Parses exactly four hex digits into a block.
pub fn parse_block(argument: &'static str, text: &str) -> Result<State> {
    let actual = text.chars().count();
    if actual != NIBBLES_PER_BLOCK {
        return Err(Error::InvalidLength {
            argument,
            expected: Expected::OneBlock,
            actual,
        });
    }
    let nibbles = parse_nibbles(argument, text)?;
    let mut block = [0u8; NIBBLES_PER_BLOCK];
    block.copy_from_slice(&nibbles);
    Ok(State::new(block))
}

/// Parses a 16-bit key from four hex digits.
pub fn parse_key(text: &str) -> Result<Key> {
    parse_block("key", text).map(Key::from)
}

/// Formats nibbles as uppercase hex digits.
pub fn format_nibbles(nibbles: &[Nibble]) -> String {
    nibbles.iter().map(|n| format!("{:X}", n)).collect()
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_block("block", s)
    }
}

/// Encrypts one hex-encoded block, returning the ciphertext digits and the trace.
pub fn encrypt_hex(plaintext_hex: &str, key_hex: &str) -> Result<(String, Trace)> {
    let plaintext = parse_block("plaintext", plaintext_hex)?;
    let key = parse_key(key_hex)?;
    let (ciphertext, trace) = encrypt(plaintext, &key);
    Ok((ciphertext.to_string(), trace))
}

/// Decrypts one hex-encoded block, returning the plaintext digits and the trace.
pub fn decrypt_hex(ciphertext_hex: &str, key_hex: &str) -> Result<(String, Trace)> {
    let ciphertext = parse_block("ciphertext", ciphertext_hex)?;
    let key = parse_key(key_hex)?;
    let (plaintext, trace) = decrypt(ciphertext, &key);
    Ok((plaintext.to_string(), trace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(parse_block("key", "c9D2").unwrap(), State::from_u16(0xc9d2));
        assert_eq!("a5b3".parse::<State>().unwrap(), State::from_u16(0xa5b3));
        assert_eq!(parse_nibbles("message", "0aF").unwrap(), vec![0x0, 0xa, 0xf]);
        assert_eq!(parse_nibbles("message", "").unwrap(), Vec::<Nibble>::new());
    }

    #[test]
    fn formats_uppercase() {
        assert_eq!(format_nibbles(&[0xa, 0x5, 0xb, 0x3, 0x0]), "A5B30");
    }

    #[test]
    fn short_block_is_invalid_length() {
        assert_eq!(
            encrypt_hex("ABC", "0000"),
            Err(Error::InvalidLength {
                argument: "plaintext",
                expected: Expected::OneBlock,
                actual: 3,
            })
        );
        assert!(matches!(
            decrypt_hex("E3DC", "C9D2F"),
            Err(Error::InvalidLength { argument: "key", actual: 5, .. })
        ));
    }

    #[test]
    fn non_hex_digit_is_invalid_digit() {
        assert_eq!(
            encrypt_hex("ABCG", "0000"),
            Err(Error::InvalidDigit {
                argument: "plaintext",
                digit: 'G',
                position: 3,
            })
        );
        assert!(matches!(
            encrypt_hex("A5B3", "C9 2"),
            Err(Error::InvalidDigit { argument: "key", digit: ' ', position: 2 })
        ));
    }

    #[test]
    fn length_is_checked_before_digits() {
        assert!(matches!(
            parse_block("iv", "XYZ"),
            Err(Error::InvalidLength { argument: "iv", .. })
        ));
    }

    #[test]
    fn multibyte_characters_count_as_one_digit() {
        assert!(matches!(
            parse_block("key", "ABCé"),
            Err(Error::InvalidDigit { digit: 'é', position: 3, .. })
        ));
    }

    #[test]
    fn hex_round_trip_through_block_contract() {
        let (ciphertext, trace) = encrypt_hex("a5b3", "c9d2").unwrap();
        assert_eq!(ciphertext, "E3DC");
        assert_eq!(trace.lines()[0], "Plaintext: A5B3 (1010010110110011)");
        let (plaintext, _) = decrypt_hex(&ciphertext, "C9D2").unwrap();
        assert_eq!(plaintext, "A5B3");
    }
}
