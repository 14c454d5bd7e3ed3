//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the session runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific input and rendering, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{BillSession, SessionAction};

/// Abstracts I/O operations for the session runtime.
///
/// Implementations translate platform input into session events, feed them
/// through the state machine, and render its state. The state machine
/// itself performs no I/O.
///
/// # Implementations
///
/// - **TUI**: crossterm for keyboard events, ratatui for rendering
/// - **Tests**: scripted event queues with recorded renders
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for input, feeding any resulting events into the session.
    ///
    /// Returns the actions the session produced. An empty vector means no
    /// input was ready within the driver's poll interval.
    fn poll_event(
        &mut self,
        session: &mut BillSession,
    ) -> impl Future<Output = Result<Vec<SessionAction>, Self::Error>> + Send;

    /// Render the session state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, session: &BillSession) -> Result<(), Self::Error>;

    /// Release platform resources.
    fn stop(&mut self);
}
