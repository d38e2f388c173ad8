/// Word Store
///
/// The index keeps no state of its own. All initialized flags live in a
/// store that maps a signed 16-bit word position to a 256-bit word, where a
/// missing key reads as the zero word. Whether a store keeps words that were
/// flipped back to zero or prunes them is up to the store; the index sees no
/// difference.
use anchor_lang::prelude::*;
use primitive_types::U256;
use std::collections::{BTreeMap, HashMap};

/// Read/write access to the bitmap words backing the index
///
/// Mutation goes through `&mut self`, so a single writer per store is
/// enforced by the borrow checker. Hosts sharing one store across threads
/// put it behind their own lock.
pub trait WordStore {
    /// Returns the word at `word_pos`, or zero if it was never written
    fn word(&self, word_pos: i16) -> U256;

    /// Replaces the word at `word_pos`
    fn set_word(&mut self, word_pos: i16, word: U256);
}

impl WordStore for BTreeMap<i16, U256> {
    fn word(&self, word_pos: i16) -> U256 {
        self.get(&word_pos).copied().unwrap_or_default()
    }

    fn set_word(&mut self, word_pos: i16, word: U256) {
        self.insert(word_pos, word);
    }
}

impl WordStore for HashMap<i16, U256> {
    fn word(&self, word_pos: i16) -> U256 {
        self.get(&word_pos).copied().unwrap_or_default()
    }

    fn set_word(&mut self, word_pos: i16, word: U256) {
        self.insert(word_pos, word);
    }
}

/// A single bitmap word tracking 256 adjacent compressed ticks
///
/// Wraps `U256` so the word can be serialized with the Anchor (borsh)
/// encoding as 32 big-endian bytes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TickBitmapWord(U256);

impl TickBitmapWord {
    /// Create a new word from a raw value
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    /// Get the inner U256 value
    pub fn value(&self) -> U256 {
        self.0
    }

    /// Check if no tick in this word is initialized
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check whether bit `bit_pos` is set
    pub fn bit(&self, bit_pos: u8) -> bool {
        self.0.bit(bit_pos as usize)
    }
}

impl From<U256> for TickBitmapWord {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<TickBitmapWord> for U256 {
    fn from(word: TickBitmapWord) -> Self {
        word.0
    }
}

impl AnchorSerialize for TickBitmapWord {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        writer.write_all(&bytes)
    }
}

impl AnchorDeserialize for TickBitmapWord {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut bytes = [0u8; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Self(U256::from_big_endian(&bytes)))
    }
}
