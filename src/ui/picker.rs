//! Variant picker: the landing screen

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::FormVariant;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Request a Quote ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Intro
            Constraint::Min(0),    // Variants
        ])
        .margin(1)
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "What do you need translated?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick a service to start a free, no-obligation quote.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = FormVariant::ALL
        .iter()
        .map(|variant| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    variant.title(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", variant.summary()),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Cyan))
        .highlight_symbol("▶ ");
    render_scrollable_list(frame, chunks[1], list, Some(app.state.selected_index));
}
