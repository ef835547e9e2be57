//! Key types for Mini-AES.

use core::fmt;

use crate::state::State;

/// Number of round keys produced by the key schedule (initial key plus three rounds).
pub const ROUND_KEY_COUNT: usize = 4;

/// Mini-AES 16-bit master key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Key(pub State);

impl Key {
    /// Returns the key material as a state.
    #[inline]
    pub fn state(&self) -> &State {
        &self.0
    }
}

impl From<State> for Key {
    fn from(value: State) -> Self {
        Self(value)
    }
}

impl From<u16> for Key {
    fn from(value: u16) -> Self {
        Self(State::from_u16(value))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Expanded round keys for Mini-AES. Index 0 is the master key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [State; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=3).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.0[round]
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.0.iter()
    }
}
