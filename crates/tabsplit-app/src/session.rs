//! Bill session state machine.
//!
//! This module defines [`BillSession`], which owns the form state for one
//! bill-splitting screen and applies the update rules that keep the derived
//! outputs consistent with the latest inputs.
//!
//! This is a pure state machine: it consumes [`crate::SessionEvent`] inputs
//! and produces [`crate::SessionAction`] instructions for the runtime to
//! execute. No I/O dependencies - fully testable without a terminal.
//!
//! # Responsibilities
//!
//! - Stores the raw bill text and the amount parsed from it on submit.
//! - Clamps the split count and slider position into their domains.
//! - Recomputes tip amount and per-person total on every input change, so
//!   readers never observe stale derived values.

use tabsplit_core::{SPLIT_MAX, SPLIT_MIN, tip_amount, total_per_person};

use crate::{SessionAction, SessionEvent, ValidationError};

/// Reactive state for one bill-splitting session.
///
/// Created fresh when the screen opens, reset to defaults on re-entry, and
/// discarded on exit. Owned exclusively by the runtime; every operation
/// runs to completion before the next event is processed.
#[derive(Debug, Clone)]
pub struct BillSession {
    /// Raw bill text as typed; may be empty or non-numeric while editing.
    bill_text: String,
    /// Parsed bill amount; advances only on a successful submit.
    bill_amount: f64,
    /// Party size, always within `[SPLIT_MIN, SPLIT_MAX]`.
    split_count: u32,
    /// Normalized slider position in `[0.0, 1.0]`.
    slider_position: f64,
    /// Tip percentage, derived solely from the slider position.
    tip_percent: u8,
    /// Derived tip amount.
    tip_amount: f64,
    /// Derived per-person total.
    total_per_person: f64,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl Default for BillSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BillSession {
    /// Create a session with default values: empty bill text, split count
    /// of 1, slider at zero.
    pub fn new() -> Self {
        Self {
            bill_text: String::new(),
            bill_amount: 0.0,
            split_count: SPLIT_MIN,
            slider_position: 0.0,
            tip_percent: 0,
            tip_amount: 0.0,
            total_per_person: 0.0,
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        match event {
            SessionEvent::Tick => vec![],
            SessionEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![SessionAction::Render]
            },
            SessionEvent::BillTextChanged(text) => {
                self.set_bill_text(text);
                vec![SessionAction::Render]
            },
            SessionEvent::BillSubmitted => {
                match self.submit_bill() {
                    Ok(amount) => {
                        self.status_message = Some(format!("Bill set to {amount:.2}"));
                    },
                    Err(err) => {
                        tracing::debug!(%err, "bill submission rejected");
                        self.status_message = Some(format!("Error: {err}"));
                    },
                }
                vec![SessionAction::Render]
            },
            SessionEvent::IncrementSplit => {
                self.increment_split();
                vec![SessionAction::Render]
            },
            SessionEvent::DecrementSplit => {
                self.decrement_split();
                vec![SessionAction::Render]
            },
            SessionEvent::SliderMoved(position) => {
                self.set_slider_position(position);
                vec![SessionAction::Render]
            },
            SessionEvent::Reset => {
                self.reset();
                vec![SessionAction::Render]
            },
            SessionEvent::Quit => vec![SessionAction::Quit],
        }
    }

    /// Store the raw bill text verbatim.
    ///
    /// Parsing is deferred to [`Self::submit_bill`]; per-keystroke changes
    /// never touch the parsed amount or the derived outputs. Validity is a
    /// derived getter, so it tracks this text with no extra bookkeeping.
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
    }

    /// Parse the current bill text and advance the parsed amount.
    ///
    /// On success the derived outputs are recomputed and the parsed amount
    /// is returned. On failure the session does not advance past the raw
    /// text; the previous amount stays in effect.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Empty`] if the trimmed text is blank.
    /// - [`ValidationError::NotANumber`] if the text does not parse as a
    ///   finite, non-negative decimal.
    pub fn submit_bill(&mut self) -> Result<f64, ValidationError> {
        let trimmed = self.bill_text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let amount: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::NotANumber { input: trimmed.to_string() })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::NotANumber { input: trimmed.to_string() });
        }

        self.bill_amount = amount;
        self.recompute();
        Ok(amount)
    }

    /// Increase the split count by one, clamped to [`SPLIT_MAX`].
    ///
    /// No-op (not an error) at the upper bound.
    pub fn increment_split(&mut self) {
        self.split_count = self.split_count.saturating_add(1).min(SPLIT_MAX);
        self.recompute();
    }

    /// Decrease the split count by one, clamped to [`SPLIT_MIN`].
    ///
    /// No-op (not an error) at the lower bound.
    pub fn decrement_split(&mut self) {
        self.split_count = self.split_count.saturating_sub(1).max(SPLIT_MIN);
        self.recompute();
    }

    /// Move the slider, deriving the tip percentage from its position.
    ///
    /// The position is clamped to `[0.0, 1.0]` (NaN maps to 0.0) and the
    /// tip percentage is `round(position * 100)`.
    pub fn set_slider_position(&mut self, position: f64) {
        let clamped = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        self.slider_position = clamped;
        self.tip_percent = (clamped * 100.0).round() as u8;
        self.recompute();
    }

    /// Restore defaults, keeping only the terminal dimensions.
    ///
    /// Matches screen re-entry semantics: the session carries no state
    /// across visits.
    pub fn reset(&mut self) {
        let terminal_size = self.terminal_size;
        *self = Self::new();
        self.terminal_size = terminal_size;
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Recompute both derived outputs from the current inputs.
    fn recompute(&mut self) {
        self.tip_amount = tip_amount(self.bill_amount, self.tip_percent);
        match total_per_person(self.bill_amount, self.split_count, self.tip_percent) {
            Ok(total) => self.total_per_person = total,
            Err(err) => {
                // Unreachable while split_count stays clamped; a caller
                // contract violation, not a user-recoverable state.
                tracing::error!(%err, "derived recomputation rejected");
            },
        }
    }

    /// True iff the trimmed bill text is non-empty.
    ///
    /// Gates whether the split/tip controls and derived outputs are shown.
    pub fn is_valid(&self) -> bool {
        !self.bill_text.trim().is_empty()
    }

    /// Raw bill text as typed.
    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    /// Bill amount from the most recent successful submit.
    pub fn bill_amount(&self) -> f64 {
        self.bill_amount
    }

    /// Party size, always within `[SPLIT_MIN, SPLIT_MAX]`.
    pub fn split_count(&self) -> u32 {
        self.split_count
    }

    /// Normalized slider position in `[0.0, 1.0]`.
    pub fn slider_position(&self) -> f64 {
        self.slider_position
    }

    /// Tip percentage derived from the slider position.
    pub fn tip_percent(&self) -> u8 {
        self.tip_percent
    }

    /// Derived tip amount (unformatted; display rounds to two decimals).
    pub fn tip_amount(&self) -> f64 {
        self.tip_amount
    }

    /// Derived per-person total (unformatted; display rounds to two
    /// decimals).
    pub fn total_per_person(&self) -> f64 {
        self.total_per_person
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn entered_session(bill: &str) -> BillSession {
        let mut session = BillSession::new();
        session.set_bill_text(bill);
        assert!(session.submit_bill().is_ok());
        session
    }

    #[test]
    fn defaults_match_fresh_screen() {
        let session = BillSession::new();
        assert_eq!(session.split_count(), 1);
        assert_eq!(session.tip_percent(), 0);
        assert!(!session.is_valid());
    }

    #[test]
    fn set_bill_text_does_not_parse() {
        let mut session = entered_session("100");
        session.set_bill_text("250");

        // Typing alone never advances the parsed amount.
        assert!((session.bill_amount() - 100.0).abs() < EPSILON);
        assert!(session.is_valid());
    }

    #[test]
    fn validity_tracks_trimmed_text() {
        let mut session = BillSession::new();
        assert!(!session.is_valid());

        session.set_bill_text("  42  ");
        assert!(session.is_valid());

        session.set_bill_text("   ");
        assert!(!session.is_valid());
    }

    #[test]
    fn submit_empty_is_rejected() {
        let mut session = BillSession::new();
        assert_eq!(session.submit_bill(), Err(ValidationError::Empty));
    }

    #[test]
    fn submit_non_numeric_is_rejected() {
        let mut session = BillSession::new();
        session.set_bill_text("abc");
        assert!(matches!(session.submit_bill(), Err(ValidationError::NotANumber { .. })));
    }

    #[test]
    fn submit_negative_is_rejected() {
        let mut session = BillSession::new();
        session.set_bill_text("-5");
        assert!(matches!(session.submit_bill(), Err(ValidationError::NotANumber { .. })));
        assert!(session.bill_amount().abs() < EPSILON);
    }

    #[test]
    fn submit_non_finite_is_rejected() {
        for text in ["inf", "NaN", "1e999"] {
            let mut session = BillSession::new();
            session.set_bill_text(text);
            assert!(
                matches!(session.submit_bill(), Err(ValidationError::NotANumber { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn failed_submit_keeps_previous_amount() {
        let mut session = entered_session("100");
        session.set_bill_text("oops");

        assert!(session.submit_bill().is_err());
        assert!((session.bill_amount() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn split_clamps_at_bounds() {
        let mut session = BillSession::new();
        session.decrement_split();
        assert_eq!(session.split_count(), SPLIT_MIN);

        for _ in 0..200 {
            session.increment_split();
        }
        assert_eq!(session.split_count(), SPLIT_MAX);
    }

    #[test]
    fn decrement_then_increment_at_floor_yields_two() {
        let mut session = BillSession::new();
        session.decrement_split();
        session.increment_split();
        assert_eq!(session.split_count(), 2);
    }

    #[test]
    fn slider_maps_to_whole_percent() {
        let mut session = BillSession::new();

        session.set_slider_position(0.0);
        assert_eq!(session.tip_percent(), 0);

        session.set_slider_position(0.18);
        assert_eq!(session.tip_percent(), 18);

        session.set_slider_position(1.0);
        assert_eq!(session.tip_percent(), 100);
    }

    #[test]
    fn slider_clamps_out_of_range() {
        let mut session = BillSession::new();

        session.set_slider_position(2.5);
        assert_eq!(session.tip_percent(), 100);
        assert!((session.slider_position() - 1.0).abs() < EPSILON);

        session.set_slider_position(-0.3);
        assert_eq!(session.tip_percent(), 0);

        session.set_slider_position(f64::NAN);
        assert_eq!(session.tip_percent(), 0);
        assert!(session.slider_position().abs() < EPSILON);
    }

    #[test]
    fn derived_outputs_follow_every_input() {
        let mut session = entered_session("100");
        session.set_slider_position(0.15);
        assert!((session.tip_amount() - 15.0).abs() < EPSILON);
        assert!((session.total_per_person() - 115.0).abs() < EPSILON);

        session.increment_split();
        assert!((session.total_per_person() - 57.5).abs() < EPSILON);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_terminal_size() {
        let mut session = entered_session("90");
        let _ = session.handle(SessionEvent::Resize(120, 40));
        session.increment_split();
        session.set_slider_position(0.2);

        session.reset();

        assert!(!session.is_valid());
        assert_eq!(session.split_count(), 1);
        assert_eq!(session.tip_percent(), 0);
        assert_eq!(session.terminal_size(), (120, 40));
    }

    #[test]
    fn submit_event_sets_status_on_error() {
        let mut session = BillSession::new();
        let actions = session.handle(SessionEvent::BillSubmitted);

        assert!(matches!(actions.as_slice(), [SessionAction::Render]));
        assert!(session.status_message().is_some_and(|m| m.contains("empty")));
    }

    #[test]
    fn quit_event_produces_quit_action() {
        let mut session = BillSession::new();
        let actions = session.handle(SessionEvent::Quit);
        assert!(matches!(actions.as_slice(), [SessionAction::Quit]));
    }

    #[test]
    fn tick_produces_no_actions() {
        let mut session = BillSession::new();
        assert!(session.handle(SessionEvent::Tick).is_empty());
    }
}
