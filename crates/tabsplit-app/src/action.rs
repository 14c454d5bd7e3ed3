//! Session side-effects and intents.
//!
//! This module defines the [`SessionAction`] enum, which represents
//! instructions produced by the [`crate::BillSession`] state machine for
//! the runtime to execute. The session has no outward surface beyond
//! rendering and quitting; every computation is local and synchronous.

/// Actions produced by the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,
}
