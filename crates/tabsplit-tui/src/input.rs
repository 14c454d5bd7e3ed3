//! Input state and key handling for the TUI.
//!
//! This module owns the bill text buffer, cursor, and control focus,
//! translating terminal-agnostic key events into session events. Only
//! digits and a decimal point are accepted into the bill field; the
//! session sees the full buffer after each edit and parses it on submit.

use tabsplit_app::{BillSession, SessionAction, SessionEvent};

/// Slider movement per arrow key press (5% of the range).
const SLIDER_STEP: f64 = 0.05;

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Control that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The bill text field.
    #[default]
    Bill,
    /// The split +/- control.
    Split,
    /// The tip slider.
    Slider,
}

/// Input state for the TUI.
///
/// Manages the bill text buffer, cursor position, and which control has
/// focus. Handles all character-level key events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Text buffer for the bill field.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
    /// Focused control.
    focus: Focus,
}

impl InputState {
    /// Create a new empty input state with the bill field focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the bill field buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Currently focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Handle a key input event, feeding session events as needed.
    ///
    /// Returns the actions the session produced (may be a bare render for
    /// local-only edits like cursor movement).
    pub fn handle_key(&mut self, key: KeyInput, session: &mut BillSession) -> Vec<SessionAction> {
        // Split and slider are hidden until a bill is entered.
        if !session.is_valid() {
            self.focus = Focus::Bill;
        }

        match key {
            KeyInput::Esc => session.handle(SessionEvent::Quit),
            KeyInput::Tab => self.cycle_focus(session),
            KeyInput::Char('+') if session.is_valid() => {
                session.handle(SessionEvent::IncrementSplit)
            },
            KeyInput::Char('-') if session.is_valid() => {
                session.handle(SessionEvent::DecrementSplit)
            },
            key => match self.focus {
                Focus::Bill => self.handle_bill_key(key, session),
                Focus::Split => self.handle_split_key(key, session),
                Focus::Slider => self.handle_slider_key(key, session),
            },
        }
    }

    /// Cycle focus to the next visible control.
    fn cycle_focus(&mut self, session: &BillSession) -> Vec<SessionAction> {
        if !session.is_valid() {
            return vec![];
        }
        self.focus = match self.focus {
            Focus::Bill => Focus::Split,
            Focus::Split => Focus::Slider,
            Focus::Slider => Focus::Bill,
        };
        vec![SessionAction::Render]
    }

    /// Handle a key while the bill field is focused.
    ///
    /// The field accepts digits and a decimal point only; everything the
    /// buffer holds is ASCII, so byte indexing is safe.
    fn handle_bill_key(&mut self, key: KeyInput, session: &mut BillSession) -> Vec<SessionAction> {
        match key {
            KeyInput::Char(c) if c.is_ascii_digit() || c == '.' => {
                self.buffer.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(1);
                session.handle(SessionEvent::BillTextChanged(self.buffer.clone()))
            },
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return vec![];
                }
                self.cursor = self.cursor.saturating_sub(1);
                self.buffer.remove(self.cursor);
                session.handle(SessionEvent::BillTextChanged(self.buffer.clone()))
            },
            KeyInput::Delete => {
                if self.cursor >= self.buffer.len() {
                    return vec![];
                }
                self.buffer.remove(self.cursor);
                session.handle(SessionEvent::BillTextChanged(self.buffer.clone()))
            },
            KeyInput::Enter => session.handle(SessionEvent::BillSubmitted),
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![SessionAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![SessionAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![SessionAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                vec![SessionAction::Render]
            },
            _ => vec![],
        }
    }

    /// Handle a key while the split control is focused.
    fn handle_split_key(&self, key: KeyInput, session: &mut BillSession) -> Vec<SessionAction> {
        match key {
            KeyInput::Left | KeyInput::Down => session.handle(SessionEvent::DecrementSplit),
            KeyInput::Right | KeyInput::Up => session.handle(SessionEvent::IncrementSplit),
            _ => vec![],
        }
    }

    /// Handle a key while the slider is focused.
    fn handle_slider_key(&self, key: KeyInput, session: &mut BillSession) -> Vec<SessionAction> {
        let position = session.slider_position();
        match key {
            KeyInput::Left | KeyInput::Down => {
                session.handle(SessionEvent::SliderMoved(position - SLIDER_STEP))
            },
            KeyInput::Right | KeyInput::Up => {
                session.handle(SessionEvent::SliderMoved(position + SLIDER_STEP))
            },
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered_session() -> BillSession {
        let mut session = BillSession::new();
        session.set_bill_text("100");
        assert!(session.submit_bill().is_ok());
        session
    }

    #[test]
    fn digits_reach_the_session_per_keystroke() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        input.handle_key(KeyInput::Char('4'), &mut session);
        input.handle_key(KeyInput::Char('2'), &mut session);

        assert_eq!(input.buffer(), "42");
        assert_eq!(session.bill_text(), "42");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn letters_are_rejected_by_the_field() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        let actions = input.handle_key(KeyInput::Char('x'), &mut session);

        assert!(actions.is_empty());
        assert!(input.buffer().is_empty());
        assert!(session.bill_text().is_empty());
    }

    #[test]
    fn backspace_republishes_the_text() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        input.handle_key(KeyInput::Char('9'), &mut session);
        input.handle_key(KeyInput::Char('0'), &mut session);
        input.handle_key(KeyInput::Backspace, &mut session);

        assert_eq!(input.buffer(), "9");
        assert_eq!(session.bill_text(), "9");
    }

    #[test]
    fn enter_submits_the_bill() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        input.handle_key(KeyInput::Char('1'), &mut session);
        input.handle_key(KeyInput::Char('0'), &mut session);
        input.handle_key(KeyInput::Char('0'), &mut session);
        input.handle_key(KeyInput::Enter, &mut session);

        assert!((session.bill_amount() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn plus_and_minus_adjust_the_split_anywhere() {
        let mut input = InputState::new();
        let mut session = entered_session();

        input.handle_key(KeyInput::Char('+'), &mut session);
        input.handle_key(KeyInput::Char('+'), &mut session);
        assert_eq!(session.split_count(), 3);

        input.handle_key(KeyInput::Char('-'), &mut session);
        assert_eq!(session.split_count(), 2);
    }

    #[test]
    fn split_keys_do_nothing_while_unentered() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        let actions = input.handle_key(KeyInput::Char('+'), &mut session);

        assert!(actions.is_empty());
        assert_eq!(session.split_count(), 1);
    }

    #[test]
    fn tab_cycles_focus_only_when_entered() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        input.handle_key(KeyInput::Tab, &mut session);
        assert_eq!(input.focus(), Focus::Bill);

        let mut session = entered_session();
        input.handle_key(KeyInput::Tab, &mut session);
        assert_eq!(input.focus(), Focus::Split);
        input.handle_key(KeyInput::Tab, &mut session);
        assert_eq!(input.focus(), Focus::Slider);
        input.handle_key(KeyInput::Tab, &mut session);
        assert_eq!(input.focus(), Focus::Bill);
    }

    #[test]
    fn focus_falls_back_to_bill_when_text_clears() {
        let mut input = InputState::new();
        let mut session = entered_session();

        input.handle_key(KeyInput::Tab, &mut session);
        assert_eq!(input.focus(), Focus::Split);

        session.set_bill_text("");
        input.handle_key(KeyInput::Right, &mut session);
        assert_eq!(input.focus(), Focus::Bill);
    }

    #[test]
    fn slider_arrows_step_the_tip() {
        let mut input = InputState::new();
        let mut session = entered_session();

        input.handle_key(KeyInput::Tab, &mut session);
        input.handle_key(KeyInput::Tab, &mut session);
        assert_eq!(input.focus(), Focus::Slider);

        input.handle_key(KeyInput::Right, &mut session);
        input.handle_key(KeyInput::Right, &mut session);
        assert_eq!(session.tip_percent(), 10);

        input.handle_key(KeyInput::Left, &mut session);
        assert_eq!(session.tip_percent(), 5);
    }

    #[test]
    fn slider_steps_clamp_at_the_ends() {
        let mut input = InputState::new();
        let mut session = entered_session();

        input.handle_key(KeyInput::Tab, &mut session);
        input.handle_key(KeyInput::Tab, &mut session);

        input.handle_key(KeyInput::Left, &mut session);
        assert_eq!(session.tip_percent(), 0);

        for _ in 0..30 {
            input.handle_key(KeyInput::Right, &mut session);
        }
        assert_eq!(session.tip_percent(), 100);
    }

    #[test]
    fn esc_quits() {
        let mut input = InputState::new();
        let mut session = BillSession::new();

        let actions = input.handle_key(KeyInput::Esc, &mut session);
        assert!(matches!(actions.as_slice(), [SessionAction::Quit]));
    }
}
