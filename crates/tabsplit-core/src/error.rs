//! Error types for tip arithmetic.
//!
//! The only failure mode in this crate is the division-by-zero guard in
//! [`crate::total_per_person`]. Hitting it means a caller bypassed the
//! split-count clamping contract, so it is a programming-error signal
//! rather than a recoverable runtime condition.

use thiserror::Error;

/// Errors that can occur during tip computations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TipError {
    /// Split count outside the valid domain (must be at least 1)
    #[error("invalid split count: {split_count} (must be at least 1)")]
    InvalidSplitCount {
        /// The rejected split count
        split_count: u32,
    },
}
