/// Tick Bitmap Index Constants
///
/// Bounds and layout parameters shared by the bitmap, the word stores and the
/// argument validation in front of every index operation.

/// Number of bits (tick slots) in one bitmap word
pub const WORD_SIZE: usize = 256;

/// Bit width of a tick value
pub const TICK_BIT_WIDTH: u32 = 24;

/// Smallest value representable as a signed 24-bit tick
pub const I24_MIN: i32 = -(1 << (TICK_BIT_WIDTH - 1));

/// Largest value representable as a signed 24-bit tick
pub const I24_MAX: i32 = (1 << (TICK_BIT_WIDTH - 1)) - 1;

/// The minimum tick index supported in the protocol
///
/// Calculated as log_1.0001(minimum representable price). Multi-word searches
/// never walk below this tick.
pub const MIN_TICK: i32 = -887272;

/// The maximum tick index supported in the protocol
///
/// Calculated as log_1.0001(maximum representable price). Multi-word searches
/// never walk above this tick.
pub const MAX_TICK: i32 = 887272;

/// Largest accepted tick spacing (inclusive)
///
/// Keeps a full word of spaced ticks around any tick in `[MIN_TICK, MAX_TICK]`
/// inside the 24-bit range.
pub const MAX_TICK_SPACING: i32 = 16383;

/// Tick spacing for the medium fee tier (0.05%)
pub const TICK_SPACING_MEDIUM: i32 = 10;

/// Tick spacing for the high fee tier (0.3%)
pub const TICK_SPACING_HIGH: i32 = 60;
