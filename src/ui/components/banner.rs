//! Transient notice drawn over the top row of the content area

use crate::state::Banner;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_banner(frame: &mut Frame, area: Rect, banner: &Banner) {
    if area.height == 0 {
        return;
    }
    let (bg, icon) = if banner.is_error {
        (Color::Red, "✗")
    } else {
        (Color::Green, "✓")
    };
    let width = area.width.saturating_sub(2).max(1) as usize;
    let text_len = banner.message.chars().count() + 4;
    let rows = text_len.div_ceil(width).clamp(1, 3) as u16;
    let banner_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: rows.min(area.height),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(banner.message.as_str()),
    ]);
    frame.render_widget(Clear, banner_area);
    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(bg).fg(Color::White)),
        banner_area,
    );
}
