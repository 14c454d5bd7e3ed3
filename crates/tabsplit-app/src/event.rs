//! Session input events.
//!
//! This module defines [`SessionEvent`], the set of inputs that drive the
//! [`crate::BillSession`] state machine. Events originate from the
//! presentation layer: form interactions (text edits, submit, split
//! buttons, slider) plus terminal housekeeping (resize, tick, quit).

/// Events processed by the session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Bill text field content changed.
    BillTextChanged(String),

    /// Bill text field submit action.
    BillSubmitted,

    /// "+" pressed on the split control.
    IncrementSplit,

    /// "-" pressed on the split control.
    DecrementSplit,

    /// Slider moved to a normalized position in `[0.0, 1.0]`.
    SliderMoved(f64),

    /// Reset the session to defaults (screen re-entry).
    Reset,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Periodic tick.
    Tick,

    /// Quit requested.
    Quit,
}
