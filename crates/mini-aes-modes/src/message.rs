//! Messages as nibble sequences, zero padding, and block partitioning.

use core::fmt;

use mini_aes_core::{
    format_nibbles, parse_nibbles, Error, Expected, Nibble, Result, State, NIBBLES_PER_BLOCK,
};

/// Appends `'0'` digits until the length is a multiple of four.
///
/// Zero padding is lossy: a message that already ends in zero digits cannot be
/// told apart from a padded one, and decryption never strips padding.
pub fn pad_to_block_boundary(message: &str) -> String {
    let len = message.chars().count();
    let fill = len.next_multiple_of(NIBBLES_PER_BLOCK) - len;
    let mut padded = String::with_capacity(message.len() + fill);
    padded.push_str(message);
    padded.extend(core::iter::repeat('0').take(fill));
    padded
}

/// Parses hex digits that must form whole blocks (ciphertext input).
pub fn parse_blocks(argument: &'static str, text: &str) -> Result<Vec<State>> {
    let message = Message::parse(argument, text)?;
    if !message.is_block_aligned() {
        return Err(Error::InvalidLength {
            argument,
            expected: Expected::WholeBlocks,
            actual: message.len(),
        });
    }
    Ok(message.blocks().collect())
}

/// A validated sequence of hex digits, one nibble each.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    nibbles: Vec<Nibble>,
}

impl Message {
    /// Parses a hex digit sequence of any length.
    pub fn parse(argument: &'static str, text: &str) -> Result<Self> {
        parse_nibbles(argument, text).map(|nibbles| Self { nibbles })
    }

    /// Concatenates blocks in order.
    pub fn from_blocks(blocks: &[State]) -> Self {
        Self {
            nibbles: blocks.iter().flat_map(|b| b.nibbles()).collect(),
        }
    }

    /// Number of hex digits.
    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    /// Whether the message has no digits.
    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// Whether the length is a whole number of blocks.
    pub fn is_block_aligned(&self) -> bool {
        self.nibbles.len() % NIBBLES_PER_BLOCK == 0
    }

    /// The nibbles in order.
    pub fn nibbles(&self) -> &[Nibble] {
        &self.nibbles
    }

    /// Returns a copy zero-filled up to the next block boundary.
    pub fn padded(&self) -> Self {
        let mut nibbles = self.nibbles.clone();
        nibbles.resize(nibbles.len().next_multiple_of(NIBBLES_PER_BLOCK), 0);
        Self { nibbles }
    }

    /// Consecutive blocks in order. The message must be block aligned.
    pub fn blocks(&self) -> impl Iterator<Item = State> + '_ {
        debug_assert!(self.is_block_aligned(), "partition of an unpadded message");
        self.nibbles.chunks_exact(NIBBLES_PER_BLOCK).map(|chunk| {
            let mut block = [0u8; NIBBLES_PER_BLOCK];
            block.copy_from_slice(chunk);
            State::new(block)
        })
    }
}

/// Uppercase hex digits.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_nibbles(&self.nibbles))
    }
}
