//! Thank-you screen shown after a successful submission

use super::field_renderer::display_value;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wizard) = &app.state.wizard else {
        return;
    };
    let session = &wizard.session;
    let name = session
        .value("fullName")
        .map(|v| v.as_text().trim().to_string())
        .unwrap_or_default();
    let email = session
        .value("email")
        .map(|v| v.as_text().trim().to_string())
        .unwrap_or_default();
    let reference = session.id.simple().to_string();

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("✓ Thank you, {name}!"),
            bold.fg(Color::Green),
        )),
        Line::from(""),
        Line::from(format!(
            "Your {} request has been sent. We'll reply to {email} within one business day.",
            session.variant().title()
        )),
        Line::from(vec![
            Span::styled("Reference: ", muted),
            Span::raw(reference[..8].to_uppercase()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Summary", bold)),
    ];

    for (spec, value) in session.fields().visible_values() {
        let text = display_value(spec, value, session.catalog());
        if text.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", spec.label), muted),
            Span::raw(text.replace('\n', " ")),
        ]));
    }
    if !session.files().is_empty() {
        let names: Vec<&str> = session.files().iter().map(|f| f.name.as_str()).collect();
        lines.push(Line::from(vec![
            Span::styled("  Attachments: ", muted),
            Span::raw(names.join(", ")),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Questions in the meantime? Call "),
        Span::styled(app.config.support_phone().to_string(), bold.fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(" Request received ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
