//! Split control
//!
//! Displays the party size with its increment/decrement buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tabsplit_app::BillSession;
use tabsplit_core::{SPLIT_MAX, SPLIT_MIN};

use crate::{Focus, InputState};

/// Render the split control.
pub fn render(frame: &mut Frame, session: &BillSession, input: &InputState, area: Rect) {
    let focused = input.focus() == Focus::Split;
    let border_style =
        if focused { Style::default().fg(Color::Cyan) } else { Style::default() };

    let block = Block::default().borders(Borders::ALL).title(" Split ").border_style(border_style);

    let count = session.split_count();
    // Buttons dim at the clamped bounds, where pressing them is a no-op.
    let minus_style = if count == SPLIT_MIN {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let plus_style = if count == SPLIT_MAX {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled("[-]", minus_style),
        Span::raw(format!("  {count}  ")),
        Span::styled("[+]", plus_style),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}
