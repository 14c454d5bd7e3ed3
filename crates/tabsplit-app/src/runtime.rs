//! Generic runtime for session orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`BillSession`]: the form state machine
//! - [`Driver`]: platform-specific I/O

use crate::{BillSession, Driver, SessionAction};

/// Generic runtime that connects a [`Driver`] to a [`BillSession`].
pub struct Runtime<D: Driver> {
    driver: D,
    session: BillSession,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime with a fresh session.
    pub fn new(driver: D) -> Self {
        Self { driver, session: BillSession::new() }
    }

    /// Run the main event loop.
    ///
    /// Renders the initial state, then repeatedly polls the driver for
    /// input and executes the actions the session produces, until a quit
    /// action arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.session)?;

        loop {
            let actions = self.driver.poll_event(&mut self.session).await?;
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions from the session.
    ///
    /// Returns `true` if the application should quit.
    fn process_actions(&mut self, actions: Vec<SessionAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                SessionAction::Render => self.driver.render(&self.session)?,
                SessionAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Session state (for tests and inspection).
    pub fn session(&self) -> &BillSession {
        &self.session
    }

    /// Mutable session state.
    pub fn session_mut(&mut self) -> &mut BillSession {
        &mut self.session
    }
}
