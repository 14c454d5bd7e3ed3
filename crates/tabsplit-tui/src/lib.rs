//! Terminal UI for tabsplit
//!
//! A thin shell over [`tabsplit_app::Driver`] that provides terminal
//! I/O. All orchestration logic lives in the generic
//! [`tabsplit_app::Runtime`].
//!
//! This crate only handles key translation and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod terminal;
pub mod ui;

pub use input::{Focus, InputState, KeyInput};
pub use tabsplit_app::{BillSession, Runtime, SessionAction, SessionEvent};
pub use terminal::{TerminalDriver, TerminalError};
