//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec, FieldValue, OptionCatalog};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field is being shown
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldState<'a> {
    pub is_active: bool,
    pub is_disabled: bool,
    /// Draw a text cursor after the value
    pub show_cursor: bool,
    pub error: Option<&'a str>,
}

/// Rows a field needs, including its error line
pub fn field_height(kind: FieldKind, has_error: bool) -> u16 {
    let boxed = match kind {
        FieldKind::Multiline => 5,
        FieldKind::MultiChoice => 4,
        _ => 3,
    };
    boxed + u16::from(has_error)
}

/// Human-readable value for summaries and closed fields
pub fn display_value(spec: &FieldSpec, value: &FieldValue, catalog: &OptionCatalog) -> String {
    let label = |v: &str| match spec.options {
        Some(source) => catalog.label_for(source, v),
        None => v.to_string(),
    };
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(0) => String::new(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Flag(true) => "Yes".to_string(),
        FieldValue::Flag(false) => "No".to_string(),
        FieldValue::Choice(Some(v)) => label(v),
        FieldValue::Choice(None) => String::new(),
        FieldValue::Set(values) => values
            .iter()
            .map(|v| label(v))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Draw a bordered field with its content lines and, under it, any error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    content: Vec<Line>,
    state: FieldState,
) {
    let border_style = if state.error.is_some() {
        Style::default().fg(Color::Red)
    } else if state.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (box_area, error_area) = if state.error.is_some() && area.height > 1 {
        (
            Rect {
                height: area.height - 1,
                ..area
            },
            Some(Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            }),
        )
    } else {
        (area, None)
    };

    let mut lines = content;
    if state.show_cursor && state.is_active {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        } else {
            lines.push(Line::from(cursor));
        }
    }

    let mut title_style = border_style;
    if state.is_disabled {
        title_style = title_style.add_modifier(Modifier::DIM);
    }
    let block = Block::default()
        .title(Span::styled(format!(" {label} "), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        box_area,
    );

    if let (Some(error), Some(error_area)) = (state.error, error_area) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            )),
            error_area,
        );
    }
}

/// Single-line content, or a dimmed placeholder when empty
pub fn value_line<'a>(value: String, placeholder: &'a str, is_active: bool) -> Line<'a> {
    if value.is_empty() {
        if is_active {
            Line::from("")
        } else {
            Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        }
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(Span::styled(value, style))
    }
}
