/// Tick Bitmap Module
///
/// This module implements a space-efficient bitmap for tracking initialized ticks.
/// It allows for fast traversal of initialized ticks during swap operations without
/// needing to explicitly check every possible tick value.
///
/// Ticks are first compressed by the tick spacing (rounding toward negative
/// infinity), then split into a word position (`compressed >> 8`) and a bit
/// position (`compressed mod 256`). Each word of the backing [`WordStore`]
/// holds the initialized flags of 256 consecutive compressed ticks, so a
/// neighbor search reads a single word and resolves it with one bit scan.
use crate::bit_math::{least_significant_bit, most_significant_bit};
use crate::constants::{I24_MAX, I24_MIN, MAX_TICK, MAX_TICK_SPACING, MIN_TICK, WORD_SIZE};
use crate::errors::ErrorCode;
use crate::word_store::{TickBitmapWord, WordStore};
use anchor_lang::prelude::*;
use primitive_types::U256;
use std::collections::BTreeMap;

/// Compresses a tick by the tick spacing, rounding toward negative infinity
///
/// Native integer division truncates toward zero, which would map e.g.
/// `-100 / 60` to `-1` and fold the ticks on both sides of zero into one slot.
/// The quotient is decremented when the tick is negative and not an exact
/// multiple, giving `floor(tick / tick_spacing)`.
///
/// # Parameters
/// * `tick` - Any tick, aligned or not
/// * `tick_spacing` - A positive tick spacing
///
/// # Returns
/// * `i32` - The compressed tick
#[inline]
pub fn compress_tick(tick: i32, tick_spacing: i32) -> i32 {
    let mut compressed = tick / tick_spacing;
    if tick < 0 && tick % tick_spacing != 0 {
        compressed -= 1;
    }
    compressed
}

/// Rescales a compressed tick back into tick space
///
/// # Returns
/// * `Result<i32>` - `compressed * tick_spacing`, or `ArithmeticOverflow` /
///   `ArithmeticUnderflow` when the product leaves the 24-bit tick range
pub fn decompress_tick(compressed: i32, tick_spacing: i32) -> Result<i32> {
    let tick = compressed as i64 * tick_spacing as i64;
    if tick > I24_MAX as i64 {
        return err!(ErrorCode::ArithmeticOverflow);
    }
    if tick < I24_MIN as i64 {
        return err!(ErrorCode::ArithmeticUnderflow);
    }
    Ok(tick as i32)
}

/// Calculates the position in the tick bitmap for a given compressed tick
///
/// The word index is an arithmetic shift, so negative compressed ticks land
/// in negative words with the bit position still counted up from the word's
/// lowest slot (`-1` is bit 255 of word `-1`).
///
/// `tick` must lie in the 24-bit range for the word index to fit in `i16`.
///
/// # Returns
/// * `(i16, u8)` - The word index and bit position within that word
#[inline]
pub fn position(tick: i32) -> (i16, u8) {
    debug_assert!((I24_MIN..=I24_MAX).contains(&tick));
    ((tick >> 8) as i16, (tick & (WORD_SIZE as i32 - 1)) as u8)
}

/// Validates the tick spacing shared by every operation
fn check_tick_spacing(tick_spacing: i32) -> Result<()> {
    require!(
        tick_spacing > 0 && tick_spacing <= MAX_TICK_SPACING,
        ErrorCode::InvalidTickSpacing
    );
    Ok(())
}

/// Validates that a tick argument fits the signed 24-bit range
fn check_tick(tick: i32) -> Result<()> {
    require!(
        (I24_MIN..=I24_MAX).contains(&tick),
        ErrorCode::TickOutOfBounds
    );
    Ok(())
}

/// Validates a tick for mutation and returns its exact compressed value
fn compress_aligned(tick: i32, tick_spacing: i32) -> Result<i32> {
    check_tick_spacing(tick_spacing)?;
    check_tick(tick)?;
    if tick % tick_spacing != 0 {
        msg!(
            "Rejected tick {} not aligned to spacing {}",
            tick,
            tick_spacing
        );
        return err!(ErrorCode::InvalidTickAlignment);
    }
    Ok(tick / tick_spacing)
}

/// Flips the initialized state of a tick
///
/// Toggles exactly one bit: `word[word_pos] ^= 1 << bit_pos`. Flipping the
/// same tick twice restores the prior state of the store.
///
/// # Parameters
/// * `store` - The word store holding the bitmap
/// * `tick` - The tick to flip, which must be a multiple of `tick_spacing`
/// * `tick_spacing` - The spacing between usable ticks
///
/// # Returns
/// * `Result<()>` - `InvalidTickAlignment` if the tick is not spaced
pub fn flip_tick<S: WordStore + ?Sized>(store: &mut S, tick: i32, tick_spacing: i32) -> Result<()> {
    let compressed = compress_aligned(tick, tick_spacing)?;
    let (word_pos, bit_pos) = position(compressed);
    let mask = U256::one() << bit_pos;
    let word = store.word(word_pos);
    store.set_word(word_pos, word ^ mask);
    Ok(())
}

/// Returns whether a tick is initialized
///
/// Ticks that are not a multiple of `tick_spacing` can never be initialized
/// and report `false` rather than an error.
pub fn is_tick_initialized<S: WordStore + ?Sized>(
    store: &S,
    tick: i32,
    tick_spacing: i32,
) -> Result<bool> {
    check_tick_spacing(tick_spacing)?;
    check_tick(tick)?;
    if tick % tick_spacing != 0 {
        return Ok(false);
    }

    let (word_pos, bit_pos) = position(tick / tick_spacing);
    Ok(store.word(word_pos).bit(bit_pos as usize))
}

/// Sets the initialized state of a tick to `initialized`
///
/// Unlike [`flip_tick`] this is idempotent: the bit is only flipped when the
/// current state differs from the requested one.
pub fn set_tick_initialized<S: WordStore + ?Sized>(
    store: &mut S,
    tick: i32,
    tick_spacing: i32,
    initialized: bool,
) -> Result<()> {
    let compressed = compress_aligned(tick, tick_spacing)?;
    let (word_pos, bit_pos) = position(compressed);
    let word = store.word(word_pos);

    if word.bit(bit_pos as usize) != initialized {
        store.set_word(word_pos, word ^ (U256::one() << bit_pos));
    }
    Ok(())
}

/// Finds the next initialized tick contained in the same word as (or
/// adjacent to) the given tick
///
/// # Parameters
/// * `store` - The word store holding the bitmap
/// * `tick` - The starting tick; it does not need to be spaced
/// * `tick_spacing` - The spacing between usable ticks
/// * `lte` - If true, search at or below `tick`; if false, strictly above it
///
/// # Returns
/// * `Result<(i32, bool)>` - The next tick and whether it is initialized.
///   When nothing is initialized in the searched word, the tick is the
///   word's boundary in the search direction: the lowest slot of the word
///   holding `tick` for `lte`, the highest slot of the word holding the next
///   compressed tick otherwise. Callers wanting a farther neighbor query again
///   from that boundary.
pub fn next_initialized_tick_within_one_word<S: WordStore + ?Sized>(
    store: &S,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> Result<(i32, bool)> {
    check_tick_spacing(tick_spacing)?;
    check_tick(tick)?;

    let compressed = compress_tick(tick, tick_spacing);

    if lte {
        let (word_pos, bit_pos) = position(compressed);
        // all the 1s at or to the right of the current bit_pos
        let mask = (U256::one() << bit_pos) | ((U256::one() << bit_pos) - U256::one());
        let masked = store.word(word_pos) & mask;

        match most_significant_bit(masked) {
            Some(msb) => Ok((
                decompress_tick(compressed - (bit_pos - msb) as i32, tick_spacing)?,
                true,
            )),
            None => Ok((
                decompress_tick(compressed - bit_pos as i32, tick_spacing)?,
                false,
            )),
        }
    } else {
        // start from the word of the next tick, the current tick's state doesn't matter
        let next_compressed = compressed + 1;
        if next_compressed > I24_MAX {
            return err!(ErrorCode::ArithmeticOverflow);
        }
        let (word_pos, bit_pos) = position(next_compressed);
        // all the 1s at or to the left of bit_pos
        let mask = !((U256::one() << bit_pos) - U256::one());
        let masked = store.word(word_pos) & mask;

        match least_significant_bit(masked) {
            Some(lsb) => Ok((
                decompress_tick(next_compressed + (lsb - bit_pos) as i32, tick_spacing)?,
                true,
            )),
            None => Ok((
                decompress_tick(next_compressed + (255 - bit_pos) as i32, tick_spacing)?,
                false,
            )),
        }
    }
}

/// Finds the next initialized tick in the given direction across words
///
/// Repeats [`next_initialized_tick_within_one_word`] from each word boundary
/// until an initialized tick turns up or the search passes `MIN_TICK`
/// (`lte`) or `MAX_TICK` (`!lte`).
///
/// Mutators accept the whole 24-bit range, so a bitmap can hold ticks past the
/// protocol bounds. Those are never reported: an initialized tick found beyond
/// the bound in the search direction ends the search like an empty word.
///
/// # Returns
/// * `Result<(i32, bool)>` - The initialized tick and `true`, or the clamped
///   protocol boundary and `false` when no tick in `[MIN_TICK, MAX_TICK]` is
///   initialized in that direction
pub fn next_initialized_tick<S: WordStore + ?Sized>(
    store: &S,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> Result<(i32, bool)> {
    check_tick_spacing(tick_spacing)?;
    require!(
        (MIN_TICK..=MAX_TICK).contains(&tick),
        ErrorCode::TickOutOfBounds
    );

    let mut current = tick;
    loop {
        let (next, initialized) =
            next_initialized_tick_within_one_word(store, current, tick_spacing, lte)?;

        if lte && next < MIN_TICK {
            return Ok((MIN_TICK, false));
        }
        if !lte && next > MAX_TICK {
            return Ok((MAX_TICK, false));
        }
        if initialized {
            return Ok((next, true));
        }

        if lte {
            if next <= MIN_TICK {
                return Ok((MIN_TICK, false));
            }
            // step into the word below
            current = next - 1;
        } else {
            if next >= MAX_TICK {
                return Ok((MAX_TICK, false));
            }
            current = next;
        }
    }
}

/// Tick bitmap owning its words
///
/// Words are materialized on first flip and pruned once they return to zero,
/// so the map only ever holds words with at least one initialized tick. The
/// whole bitmap serializes with the Anchor encoding and can be stored in an
/// account byte buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct TickBitmap {
    /// Map from word positions to non-zero bitmap words
    pub bitmap_map: BTreeMap<i16, TickBitmapWord>,
}

impl WordStore for TickBitmap {
    fn word(&self, word_pos: i16) -> U256 {
        self.bitmap_map
            .get(&word_pos)
            .map(TickBitmapWord::value)
            .unwrap_or_default()
    }

    fn set_word(&mut self, word_pos: i16, word: U256) {
        if word.is_zero() {
            if self.bitmap_map.remove(&word_pos).is_some() {
                msg!("Pruned empty bitmap word {}", word_pos);
            }
        } else if self
            .bitmap_map
            .insert(word_pos, TickBitmapWord::new(word))
            .is_none()
        {
            msg!("Materialized bitmap word {}", word_pos);
        }
    }
}

impl TickBitmap {
    /// Creates a new empty tick bitmap
    pub fn new() -> Self {
        Self {
            bitmap_map: BTreeMap::new(),
        }
    }

    /// Number of words holding at least one initialized tick
    pub fn word_count(&self) -> usize {
        self.bitmap_map.len()
    }

    /// Flips the initialized state of `tick`, see [`flip_tick`]
    pub fn flip(&mut self, tick: i32, tick_spacing: i32) -> Result<()> {
        flip_tick(self, tick, tick_spacing)
    }

    /// Marks `tick` initialized or uninitialized, see [`set_tick_initialized`]
    pub fn update_bitmap(&mut self, tick: i32, tick_spacing: i32, initialized: bool) -> Result<()> {
        set_tick_initialized(self, tick, tick_spacing, initialized)
    }

    /// Checks if a specific tick is initialized, see [`is_tick_initialized`]
    pub fn is_tick_initialized(&self, tick: i32, tick_spacing: i32) -> Result<bool> {
        is_tick_initialized(self, tick, tick_spacing)
    }

    /// Single-word neighbor search, see [`next_initialized_tick_within_one_word`]
    pub fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        tick_spacing: i32,
        lte: bool,
    ) -> Result<(i32, bool)> {
        next_initialized_tick_within_one_word(self, tick, tick_spacing, lte)
    }

    /// Finds the next initialized tick strictly above `tick`
    ///
    /// # Returns
    /// * `Result<Option<i32>>` - The tick, or `None` if nothing is initialized
    ///   up to `MAX_TICK`
    pub fn next_initialized_tick(&self, tick: i32, tick_spacing: i32) -> Result<Option<i32>> {
        let (next, initialized) = next_initialized_tick(self, tick, tick_spacing, false)?;
        Ok(initialized.then_some(next))
    }

    /// Finds the closest initialized tick at or below `tick`
    ///
    /// # Returns
    /// * `Result<Option<i32>>` - The tick, or `None` if nothing is initialized
    ///   down to `MIN_TICK`
    pub fn prev_initialized_tick(&self, tick: i32, tick_spacing: i32) -> Result<Option<i32>> {
        let (next, initialized) = next_initialized_tick(self, tick, tick_spacing, true)?;
        Ok(initialized.then_some(next))
    }

    /// Lists the initialized ticks stored in word `word_pos`, in ascending order
    pub fn initialized_ticks_in_word(&self, word_pos: i16, tick_spacing: i32) -> Result<Vec<i32>> {
        check_tick_spacing(tick_spacing)?;
        let word = match self.bitmap_map.get(&word_pos) {
            Some(word) => *word,
            None => return Ok(Vec::new()),
        };

        let mut ticks = Vec::new();
        for bit_pos in 0..=u8::MAX {
            if word.bit(bit_pos) {
                let compressed = (word_pos as i32) * WORD_SIZE as i32 + bit_pos as i32;
                ticks.push(decompress_tick(compressed, tick_spacing)?);
            }
        }
        Ok(ticks)
    }
}
