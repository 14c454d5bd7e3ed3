//! Total panel
//!
//! Displays the per-person total, the headline output of the form.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tabsplit_app::BillSession;

/// Render the total-per-person panel.
pub fn render(frame: &mut Frame, session: &BillSession, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Total Per Person ");

    // The derived output is only shown once a bill has been entered.
    let amount = if session.is_valid() {
        format!("${:.2}", session.total_per_person())
    } else {
        "--".to_string()
    };

    let line = Line::from(Span::styled(
        amount,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}
