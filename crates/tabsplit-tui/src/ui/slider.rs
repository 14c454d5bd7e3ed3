//! Tip slider
//!
//! Displays the tip amount and the percentage slider.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use tabsplit_app::BillSession;

use crate::{Focus, InputState};

/// Render the tip amount line above the slider.
pub fn render_tip_line(frame: &mut Frame, session: &BillSession, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" Tip  "),
        Span::styled(
            format!("${:.2}", session.tip_amount()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tip percentage slider.
pub fn render(frame: &mut Frame, session: &BillSession, input: &InputState, area: Rect) {
    let focused = input.focus() == Focus::Slider;
    let border_style =
        if focused { Style::default().fg(Color::Cyan) } else { Style::default() };

    let block = Block::default().borders(Borders::ALL).title(" Tip % ").border_style(border_style);

    // Slider position is kept in [0.0, 1.0] by the session.
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(session.slider_position())
        .label(format!("{}%", session.tip_percent()));

    frame.render_widget(gauge, area);
}
