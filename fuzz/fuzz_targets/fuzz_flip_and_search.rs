#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;
use tick_bitmap_index::constants::{MAX_TICK, MIN_TICK};
use tick_bitmap_index::*;

#[derive(Arbitrary, Debug)]
enum Op {
    Flip(i32),
    Search { tick: i32, lte: bool },
}

#[derive(Arbitrary, Debug)]
struct FlipAndSearchInput {
    tick_spacing: u8,
    ops: Vec<Op>,
}

// Fuzz test for the tick bitmap against a set of initialized compressed ticks.
//
// This test validates:
// - flip_tick toggles exactly the tick it is given and rejects unaligned ticks
// - single-word searches return the nearest initialized tick inside the word,
//   or the word boundary when there is none
// - multi-word searches agree with the nearest tick in the model
fuzz_target!(|input: FlipAndSearchInput| {
    let tick_spacing = input.tick_spacing.max(1) as i32;
    let mut bitmap = TickBitmap::new();
    let mut model: BTreeSet<i32> = BTreeSet::new();

    for op in input.ops.into_iter().take(256) {
        match op {
            Op::Flip(tick) => {
                let tick = tick.clamp(MIN_TICK, MAX_TICK);
                let result = bitmap.flip(tick, tick_spacing);
                if tick % tick_spacing != 0 {
                    assert!(result.is_err());
                    continue;
                }
                assert!(result.is_ok());
                let compressed = tick / tick_spacing;
                if !model.remove(&compressed) {
                    model.insert(compressed);
                }
            }
            Op::Search { tick, lte } => {
                let tick = tick.clamp(MIN_TICK, MAX_TICK);
                let compressed = compress_tick(tick, tick_spacing);

                let expected = if lte {
                    let word_start = compressed.div_euclid(256) * 256;
                    match model.range(word_start..=compressed).next_back() {
                        Some(c) => (c * tick_spacing, true),
                        None => (word_start * tick_spacing, false),
                    }
                } else {
                    let word_end = (compressed + 1).div_euclid(256) * 256 + 255;
                    match model.range((compressed + 1)..=word_end).next() {
                        Some(c) => (c * tick_spacing, true),
                        None => (word_end * tick_spacing, false),
                    }
                };
                let found = bitmap
                    .next_initialized_tick_within_one_word(tick, tick_spacing, lte)
                    .unwrap();
                assert_eq!(found, expected);

                let nearest = if lte {
                    model.range(..=compressed).next_back().map(|c| c * tick_spacing)
                } else {
                    model.range((compressed + 1)..).next().map(|c| c * tick_spacing)
                };
                let walked = if lte {
                    bitmap.prev_initialized_tick(tick, tick_spacing).unwrap()
                } else {
                    bitmap.next_initialized_tick(tick, tick_spacing).unwrap()
                };
                assert_eq!(walked, nearest);
            }
        }
    }
});
