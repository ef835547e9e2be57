//! Mini-AES key schedule and block encryption/decryption.

use crate::key::{Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_nibbles, mix_columns, shift_rows,
    sub_nibbles,
};
use crate::state::{Nibble, State};
use crate::trace::Trace;

/// Number of cipher rounds after the initial key addition.
pub const ROUNDS: usize = 3;

const RCON: [Nibble; ROUNDS] = [0x1, 0x2, 0x4];

fn rot_word(word: &State) -> State {
    let [n0, n1, n2, n3] = word.nibbles();
    State::new([n2, n3, n0, n1])
}

fn sub_word(mut word: State) -> State {
    sub_nibbles(&mut word);
    word
}

/// Expands a 16-bit key into 4 round keys.
pub fn expand_key(key: &Key) -> RoundKeys {
    expand_key_traced(key, &mut Trace::silent())
}

/// Expands a 16-bit key into 4 round keys, recording each derived key (rounds 1..=3).
pub fn expand_key_traced(key: &Key, trace: &mut Trace) -> RoundKeys {
    let mut round_keys = [*key.state(); ROUND_KEY_COUNT];

    for round in 1..ROUND_KEY_COUNT {
        let prev = round_keys[round - 1];
        let temp = sub_word(rot_word(&prev)) ^ State::new([RCON[round - 1], 0, 0, 0]);
        round_keys[round] = prev ^ temp;
        trace.record_state(format_args!("Round Key {round}"), &round_keys[round]);
    }

    RoundKeys(round_keys)
}

fn encrypt_rounds(block: &State, round_keys: &RoundKeys, trace: &mut Trace) -> State {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));
    trace.record_state("Initial AddRoundKey", &state);

    for round in 1..ROUNDS {
        trace.record(format_args!("Round {round}:"));
        sub_nibbles(&mut state);
        trace.record_state("After SubNibbles", &state);
        shift_rows(&mut state);
        trace.record_state("After ShiftRows", &state);
        mix_columns(&mut state);
        trace.record_state("After MixColumns", &state);
        add_round_key(&mut state, round_keys.get(round));
        trace.record_state("After AddRoundKey", &state);
    }

    trace.record(format_args!("Round {ROUNDS} (Final):"));
    sub_nibbles(&mut state);
    trace.record_state("After SubNibbles", &state);
    shift_rows(&mut state);
    trace.record_state("After ShiftRows", &state);
    add_round_key(&mut state, round_keys.get(ROUNDS));
    trace.record_state("After AddRoundKey", &state);

    state
}

fn decrypt_rounds(block: &State, round_keys: &RoundKeys, trace: &mut Trace) -> State {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    trace.record_state("Initial AddRoundKey", &state);

    for round in (1..ROUNDS).rev() {
        trace.record(format_args!("Round {}:", ROUNDS - round));
        inv_shift_rows(&mut state);
        trace.record_state("After Inverse ShiftRows", &state);
        inv_sub_nibbles(&mut state);
        trace.record_state("After Inverse SubNibbles", &state);
        add_round_key(&mut state, round_keys.get(round));
        trace.record_state("After AddRoundKey", &state);
        inv_mix_columns(&mut state);
        trace.record_state("After Inverse MixColumns", &state);
    }

    trace.record(format_args!("Round {ROUNDS} (Final):"));
    inv_shift_rows(&mut state);
    trace.record_state("After Inverse ShiftRows", &state);
    inv_sub_nibbles(&mut state);
    trace.record_state("After Inverse SubNibbles", &state);
    add_round_key(&mut state, round_keys.get(0));
    trace.record_state("After AddRoundKey", &state);

    state
}

/// Encrypts a single block with pre-expanded round keys.
pub fn encrypt_block(block: &State, round_keys: &RoundKeys) -> State {
    encrypt_rounds(block, round_keys, &mut Trace::silent())
}

/// Decrypts a single block with pre-expanded round keys.
pub fn decrypt_block(block: &State, round_keys: &RoundKeys) -> State {
    decrypt_rounds(block, round_keys, &mut Trace::silent())
}

fn open_trace(input_label: &str, input: &State, key: &Key) -> Trace {
    let mut trace = Trace::new();
    trace.record_state_bits(input_label, input);
    trace.record_state_bits("Key", key.state());
    trace.record("Key Expansion:");
    trace.record_state("Round Key 0", key.state());
    trace
}

/// Encrypts one block under `key`, deriving a fresh schedule and recording every stage.
pub fn encrypt(plaintext: State, key: &Key) -> (State, Trace) {
    let mut trace = open_trace("Plaintext", &plaintext, key);
    let round_keys = expand_key_traced(key, &mut trace);
    let ciphertext = encrypt_rounds(&plaintext, &round_keys, &mut trace);
    trace.record_state_bits("Final Ciphertext", &ciphertext);
    (ciphertext, trace)
}

/// Decrypts one block under `key`; the mirror of [`encrypt`].
pub fn decrypt(ciphertext: State, key: &Key) -> (State, Trace) {
    let mut trace = open_trace("Ciphertext", &ciphertext, key);
    let round_keys = expand_key_traced(key, &mut trace);
    let plaintext = decrypt_rounds(&ciphertext, &round_keys, &mut trace);
    trace.record_state_bits("Recovered Plaintext", &plaintext);
    (plaintext, trace)
}
