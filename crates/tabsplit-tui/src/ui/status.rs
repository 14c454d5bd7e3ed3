//! Status bar
//!
//! Displays the latest status message, or key hints when idle.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};
use tabsplit_app::BillSession;

const KEY_HINTS: &str = " Tab focus | Enter submit | +/- split | arrows adjust | Esc quit";

/// Render the status bar.
pub fn render(frame: &mut Frame, session: &BillSession, area: Rect) {
    let text = session.status_message().map_or_else(|| KEY_HINTS.to_string(), |m| format!(" {m}"));

    let paragraph =
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
