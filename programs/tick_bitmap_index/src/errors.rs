/// Tick Bitmap Index Error Definitions
///
/// Every failure here is a caller contract violation. The index never retries
/// and has no partial state to roll back, so errors are surfaced as soon as an
/// argument or an intermediate tick value falls outside its domain.
use anchor_lang::prelude::*;

/// Error codes for the tick bitmap index
#[error_code]
pub enum ErrorCode {
    /// Returned by the mutating operations when the tick is not a multiple
    /// of the tick spacing
    ///
    /// Searches tolerate unaligned ticks and never raise this error.
    #[msg("Tick is not aligned to the tick spacing")]
    InvalidTickAlignment,

    /// Returned when the tick spacing is zero, negative, or above
    /// `MAX_TICK_SPACING`
    #[msg("Invalid tick spacing")]
    InvalidTickSpacing,

    /// Returned when a tick argument lies outside the signed 24-bit range,
    /// or outside `[MIN_TICK, MAX_TICK]` for multi-word searches
    #[msg("Tick is out of bounds")]
    TickOutOfBounds,

    /// Returned when compressed-tick arithmetic or the rescale by tick
    /// spacing would exceed the largest 24-bit tick
    #[msg("Arithmetic overflow in tick computation")]
    ArithmeticOverflow,

    /// Returned when compressed-tick arithmetic or the rescale by tick
    /// spacing would go below the smallest 24-bit tick
    #[msg("Arithmetic underflow in tick computation")]
    ArithmeticUnderflow,
}
