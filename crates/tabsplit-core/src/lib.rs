//! Core tip arithmetic for tabsplit
//!
//! Pure, deterministic bill-splitting math with no I/O, no session state,
//! and no UI dependencies. The session layer clamps its inputs into the
//! domains exported here before calling in.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod tip;

pub use error::TipError;
pub use tip::{SPLIT_MAX, SPLIT_MIN, TIP_MAX, tip_amount, total_per_person};
