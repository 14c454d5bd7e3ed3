//! Application layer for tabsplit
//!
//! Pure session state machine and a generic runtime for driving it,
//! completely decoupled from any rendering mechanism. The same state
//! machine runs under the production TUI and under deterministic tests.
//!
//! # Components
//!
//! - [`BillSession`]: reactive session state (bill, split, tip, derived
//!   outputs)
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod driver;
mod error;
mod event;
mod runtime;
mod session;

pub use action::SessionAction;
pub use driver::Driver;
pub use error::ValidationError;
pub use event::SessionEvent;
pub use runtime::Runtime;
pub use session::BillSession;
