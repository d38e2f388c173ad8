//! Tick bitmap index for concentrated liquidity pools.
//!
//! Tracks which spaced ticks are initialized as one bit per compressed tick,
//! packed into 256-bit words held by an external [`WordStore`], and answers
//! nearest-initialized-tick queries with a single masked word read and bit
//! scan.

// Modules for constants, errors and bit scanning
pub mod bit_math;
pub mod constants;
pub mod errors;

// Word storage and the index itself
pub mod tick_bitmap;
pub mod word_store;


pub use errors::ErrorCode;
pub use tick_bitmap::{
    compress_tick, decompress_tick, flip_tick, is_tick_initialized, next_initialized_tick,
    next_initialized_tick_within_one_word, position, set_tick_initialized, TickBitmap,
};
pub use word_store::{TickBitmapWord, WordStore};
