//! Command-line interface for `mini-aes`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mini_aes_core::{
    decrypt, decrypt_block, decrypt_hex, encrypt, encrypt_block, encrypt_hex, expand_key,
    format_nibbles, Key, Nibble, State, Trace,
};
use mini_aes_modes::{cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt, pad_to_block_boundary};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Mini-AES CLI.
#[derive(Parser)]
#[command(
    name = "miniaes",
    version,
    author,
    about = "Mini-AES CLI: 16-bit educational block cipher with ECB and CBC modes (not secure)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-bit block.
    Encrypt {
        /// Plaintext block as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        block: String,
        /// Key as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Print every intermediate stage.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt one 16-bit block.
    Decrypt {
        /// Ciphertext block as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        block: String,
        /// Key as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Print every intermediate stage.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Encrypt a message of any length in ECB mode (zero-padded).
    EcbEncrypt {
        /// Message as hex digits (or UTF-8 text with --text).
        #[arg(long)]
        message: String,
        /// Key as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Treat the message as UTF-8 text and hex-encode it first.
        #[arg(long, default_value_t = false)]
        text: bool,
        /// Print the trace of every block.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt ECB ciphertext (whole blocks).
    EcbDecrypt {
        /// Ciphertext as hex digits, a multiple of 4.
        #[arg(long, value_name = "HEX")]
        ciphertext: String,
        /// Key as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Also print the recovered plaintext decoded as UTF-8 text.
        #[arg(long, default_value_t = false)]
        text: bool,
        /// Print the trace of every block.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Encrypt a message of any length in CBC mode (zero-padded).
    CbcEncrypt {
        /// Message as hex digits (or UTF-8 text with --text).
        #[arg(long)]
        message: String,
        /// Key as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Initialization vector as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        iv: String,
        /// Treat the message as UTF-8 text and hex-encode it first.
        #[arg(long, default_value_t = false)]
        text: bool,
        /// Print the trace of every block.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt CBC ciphertext (whole blocks).
    CbcDecrypt {
        /// Ciphertext as hex digits, a multiple of 4.
        #[arg(long, value_name = "HEX")]
        ciphertext: String,
        /// Key as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Initialization vector as 4 hex digits.
        #[arg(long, value_name = "HEX")]
        iv: String,
        /// Also print the recovered plaintext decoded as UTF-8 text.
        #[arg(long, default_value_t = false)]
        text: bool,
        /// Print the trace of every block.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Verify encrypt/decrypt round trips for random blocks and messages.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key, IV and message through CBC and back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { block, key, trace } => {
            cmd_block(&block, &key, trace, Direction::Encrypt)
        }
        Commands::Decrypt { block, key, trace } => {
            cmd_block(&block, &key, trace, Direction::Decrypt)
        }
        Commands::EcbEncrypt {
            message,
            key,
            text,
            trace,
        } => {
            let message = message_hex(&message, text);
            let (ciphertext, traces) =
                ecb_encrypt(&message, key.trim()).context("ECB encryption")?;
            report("ciphertext", &ciphertext, &traces, trace);
            Ok(())
        }
        Commands::EcbDecrypt {
            ciphertext,
            key,
            text,
            trace,
        } => {
            let (plaintext, traces) =
                ecb_decrypt(ciphertext.trim(), key.trim()).context("ECB decryption")?;
            report("plaintext", &plaintext, &traces, trace);
            print_text(&plaintext, text)
        }
        Commands::CbcEncrypt {
            message,
            key,
            iv,
            text,
            trace,
        } => {
            let message = message_hex(&message, text);
            let (ciphertext, traces) =
                cbc_encrypt(&message, key.trim(), iv.trim()).context("CBC encryption")?;
            report("ciphertext", &ciphertext, &traces, trace);
            Ok(())
        }
        Commands::CbcDecrypt {
            ciphertext,
            key,
            iv,
            text,
            trace,
        } => {
            let (plaintext, traces) = cbc_decrypt(ciphertext.trim(), key.trim(), iv.trim())
                .context("CBC decryption")?;
            report("plaintext", &plaintext, &traces, trace);
            print_text(&plaintext, text)
        }
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn cmd_block(block: &str, key: &str, show_trace: bool, direction: Direction) -> Result<()> {
    let (label, (output, trace)) = match direction {
        Direction::Encrypt => (
            "ciphertext",
            encrypt_hex(block.trim(), key.trim()).context("block encryption")?,
        ),
        Direction::Decrypt => (
            "plaintext",
            decrypt_hex(block.trim(), key.trim()).context("block decryption")?,
        ),
    };
    println!("{label}: {output}");
    if show_trace {
        println!("{trace}");
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);

    for _ in 0..samples {
        let key = Key::from(rng.gen::<u16>());
        let round_keys = expand_key(&key);
        let block = State::from_u16(rng.gen());

        let ciphertext = encrypt_block(&block, &round_keys);
        if decrypt_block(&ciphertext, &round_keys) != block {
            bail!("block round trip failed for {block} under key {key}");
        }
        let (traced_ct, _) = encrypt(block, &key);
        let (traced_pt, _) = decrypt(traced_ct, &key);
        if traced_ct != ciphertext || traced_pt != block {
            bail!("traced and untraced paths disagree for {block} under key {key}");
        }

        let message = random_hex(&mut rng, 16);
        let padded = pad_to_block_boundary(&message);
        let key_hex = key.to_string();
        let iv_hex = State::from_u16(rng.gen()).to_string();

        let (ecb_ct, _) = ecb_encrypt(&message, &key_hex)?;
        let (ecb_pt, _) = ecb_decrypt(&ecb_ct, &key_hex)?;
        if ecb_pt != padded {
            bail!("ECB round trip failed for message {message} under key {key}");
        }

        let (cbc_ct, _) = cbc_encrypt(&message, &key_hex, &iv_hex)?;
        let (cbc_pt, _) = cbc_decrypt(&cbc_ct, &key_hex, &iv_hex)?;
        if cbc_pt != padded {
            bail!("CBC round trip failed for message {message} under key {key}, iv {iv_hex}");
        }
    }
    println!("checked {samples} samples: ok");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key_hex = State::from_u16(rng.gen()).to_string();
    let iv_hex = State::from_u16(rng.gen()).to_string();
    let message = random_hex(&mut rng, 12);

    let (ciphertext, _) = cbc_encrypt(&message, &key_hex, &iv_hex)?;
    let (decrypted, _) = cbc_decrypt(&ciphertext, &key_hex, &iv_hex)?;

    println!("demo key: {key_hex}");
    println!("iv: {iv_hex}");
    println!("plaintext: {message}");
    println!("ciphertext: {ciphertext}");
    println!("decrypted: {decrypted}");
    if decrypted != pad_to_block_boundary(&message) {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn report(label: &str, output: &str, traces: &[Trace], show_traces: bool) {
    println!("{label}: {output}");
    if show_traces {
        for (index, trace) in traces.iter().enumerate() {
            println!("\nBlock {}:", index + 1);
            println!("{trace}");
        }
    }
}

fn message_hex(message: &str, text: bool) -> String {
    if text {
        hex::encode_upper(message.as_bytes())
    } else {
        message.trim().to_string()
    }
}

fn print_text(plaintext_hex: &str, text: bool) -> Result<()> {
    if text {
        println!("text: {}", decode_text(plaintext_hex)?);
    }
    Ok(())
}

// Trailing NUL bytes are treated as zero padding for display only.
fn decode_text(plaintext_hex: &str) -> Result<String> {
    let bytes = hex::decode(plaintext_hex).context("decode recovered plaintext as bytes")?;
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

fn random_hex(rng: &mut impl RngCore, max_digits: usize) -> String {
    let len = (rng.next_u32() as usize) % (max_digits + 1);
    let nibbles: Vec<Nibble> = (0..len).map(|_| (rng.next_u32() & 0xf) as Nibble).collect();
    format_nibbles(&nibbles)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_messages_are_hex_encoded() {
        assert_eq!(message_hex("Hi", true), "4869");
        assert_eq!(message_hex(" a5b3 ", false), "a5b3");
    }

    #[test]
    fn decoded_text_drops_zero_padding() {
        assert_eq!(decode_text("48690000").unwrap(), "Hi");
        assert_eq!(decode_text("").unwrap(), "");
        assert!(decode_text("486").is_err());
    }

    #[test]
    fn text_round_trips_through_cbc() {
        let message = message_hex("Mini", true);
        let (ciphertext, _) = cbc_encrypt(&message, "C9D2", "1F2E").unwrap();
        let (plaintext, _) = cbc_decrypt(&ciphertext, "C9D2", "1F2E").unwrap();
        assert_eq!(decode_text(&plaintext).unwrap(), "Mini");
    }

    #[test]
    fn random_hex_stays_in_bounds() {
        let mut rng = seeded_rng(Some(9));
        for _ in 0..32 {
            let digits = random_hex(&mut rng, 12);
            assert!(digits.len() <= 12);
            assert!(digits.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: u64 = seeded_rng(Some(42)).gen();
        let b: u64 = seeded_rng(Some(42)).gen();
        assert_eq!(a, b);
    }
}
