//! UI rendering
//!
//! Rendering functions that convert session state into terminal output
//! using ratatui widgets. All functions are pure (no I/O), taking state
//! and drawing widgets into a frame.

mod bill;
mod slider;
mod split;
mod status;
mod total;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use tabsplit_app::BillSession;

use crate::InputState;

/// Render the entire form.
pub fn render(frame: &mut Frame, session: &BillSession, input: &InputState) {
    const TOTAL_HEIGHT: u16 = 5;
    const BILL_HEIGHT: u16 = 3;
    const CONTROLS_MIN_HEIGHT: u16 = 7;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOTAL_HEIGHT),
            Constraint::Length(BILL_HEIGHT),
            Constraint::Min(CONTROLS_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [total_area, bill_area, controls_area, status_area] = chunks.as_ref() else {
        return;
    };

    total::render(frame, session, *total_area);
    bill::render(frame, input, *bill_area);
    render_controls(frame, session, input, *controls_area);
    status::render(frame, session, *status_area);
}

/// Render the split and tip controls, or a hint while no bill is entered.
fn render_controls(frame: &mut Frame, session: &BillSession, input: &InputState, area: Rect) {
    const SPLIT_HEIGHT: u16 = 3;
    const TIP_LINE_HEIGHT: u16 = 1;
    const SLIDER_HEIGHT: u16 = 3;

    if !session.is_valid() {
        // Controls and derived outputs are hidden until text is entered.
        let hint = Paragraph::new(" Enter a bill amount to begin")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SPLIT_HEIGHT),
            Constraint::Length(TIP_LINE_HEIGHT),
            Constraint::Length(SLIDER_HEIGHT),
        ])
        .split(area);

    let [split_area, tip_area, slider_area] = chunks.as_ref() else {
        return;
    };

    split::render(frame, session, input, *split_area);
    slider::render_tip_line(frame, session, *tip_area);
    slider::render(frame, session, input, *slider_area);
}
