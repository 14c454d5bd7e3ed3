//! Validation errors for bill entry.
//!
//! These are returned to the immediate caller (the presentation layer) and
//! never propagated as unchecked failures; the expected recovery is simply
//! re-prompting the user. Invalid text is reported, never silently coerced
//! to zero.

use thiserror::Error;

/// Errors reported when submitted bill text cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Bill text was blank at submission time
    #[error("bill amount is empty")]
    Empty,

    /// Bill text does not parse as a non-negative decimal
    #[error("not a valid bill amount: {input:?}")]
    NotANumber {
        /// The rejected input, trimmed
        input: String,
    },
}
