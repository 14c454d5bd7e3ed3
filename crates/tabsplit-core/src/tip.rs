//! Tip and per-person total computations.
//!
//! Both functions are stateless and referentially transparent: same inputs
//! always produce the same outputs. No rounding is applied here; two-decimal
//! formatting happens at the display boundary, not in the math.

use crate::error::TipError;

/// Minimum party size.
pub const SPLIT_MIN: u32 = 1;

/// Maximum party size.
pub const SPLIT_MAX: u32 = 100;

/// Maximum tip percentage.
pub const TIP_MAX: u8 = 100;

/// Tip amount for a bill at the given percentage.
///
/// Expects `bill >= 0.0` and `tip_percent <= 100`; callers clamp their
/// inputs before invoking.
pub fn tip_amount(bill: f64, tip_percent: u8) -> f64 {
    bill * f64::from(tip_percent) / 100.0
}

/// Per-person share of the bill plus tip.
///
/// # Errors
///
/// Returns [`TipError::InvalidSplitCount`] if `split_count` is zero. This
/// guards the division and is unreachable for callers that keep the split
/// count clamped to `[SPLIT_MIN, SPLIT_MAX]`.
pub fn total_per_person(bill: f64, split_count: u32, tip_percent: u8) -> Result<f64, TipError> {
    if split_count < SPLIT_MIN {
        return Err(TipError::InvalidSplitCount { split_count });
    }
    Ok((bill + tip_amount(bill, tip_percent)) / f64::from(split_count))
}
