//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button. The primary button is highlighted; a disabled
/// one is greyed out.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_primary: bool,
    is_enabled: bool,
) {
    let color = match (is_enabled, is_primary) {
        (false, _) => Color::DarkGray,
        (true, true) => Color::Cyan,
        (true, false) => Color::Gray,
    };

    let mut text_style = Style::default().fg(color);
    if is_primary && is_enabled {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(paragraph.block(block), area);
}
