//! Multi-step quote form screen

use super::field_renderer::{display_value, draw_field, field_height, value_line, FieldState};
use crate::app::App;
use crate::state::{
    format_size, Attachments, FieldKind, FieldSpec, FieldValue, FocusTarget, SubmissionState,
    WizardState, DOCUMENT_MIME_TYPES, FILES_FIELD,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Most staged files shown at once
const MAX_FILE_ROWS: u16 = 5;

/// Draw the mounted form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wizard) = &app.state.wizard else {
        return;
    };
    let session = &wizard.session;

    let block = Block::default()
        .title(format!(" {} ", session.variant().title()))
        .title(
            Line::from(format!(
                " Step {} of {} ",
                session.current_step(),
                session.total_steps()
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_files = session.step_spec().attachments != Attachments::None
        && session.accepts_files();
    let files_height = if show_files {
        files_panel_height(wizard)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Step title and progress
            Constraint::Length(1),             // Spacer
            Constraint::Min(0),                // Fields
            Constraint::Length(files_height),  // Attachments
            Constraint::Length(BUTTON_HEIGHT), // Back / Continue
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_step_header(frame, chunks[0], wizard);
    draw_fields(frame, chunks[2], wizard);
    if show_files {
        draw_files_panel(frame, chunks[3], wizard);
    }
    draw_buttons(frame, chunks[4], wizard);
}

fn draw_step_header(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let session = &wizard.session;
    let mut spans = vec![Span::styled(
        session.step_spec().title,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("   "));
    for step in 1..=session.total_steps() {
        if step > 1 {
            spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
        }
        let (symbol, color) = match step.cmp(&session.current_step()) {
            std::cmp::Ordering::Less => ("●", Color::Green),
            std::cmp::Ordering::Equal => ("●", Color::Cyan),
            std::cmp::Ordering::Greater => ("○", Color::DarkGray),
        };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Index of the first field to draw so the active one fits in `available` rows
fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let mut start = 0;
    let active = active.min(heights.len().saturating_sub(1));
    while start < active && heights[start..=active].iter().sum::<u16>() > available {
        start += 1;
    }
    start
}

fn draw_fields(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let session = &wizard.session;
    let fields = session.visible_step_fields();
    let active = wizard.active_target();

    let heights: Vec<u16> = fields
        .iter()
        .map(|spec| field_height(spec.kind, session.error(spec.name).is_some()))
        .collect();
    let active_index = match active {
        Some(FocusTarget::Field(spec)) => fields.iter().position(|f| f.name == spec.name),
        _ => None,
    };
    let start = first_visible(&heights, active_index.unwrap_or(0), area.height);

    let mut y = area.y;
    for (spec, height) in fields.iter().zip(&heights).skip(start) {
        if y + height > area.y + area.height {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: *height,
        };
        let is_active = active_index.is_some_and(|i| fields[i].name == spec.name);
        draw_schema_field(frame, field_area, wizard, spec, is_active);
        y += height;
    }
}

fn draw_schema_field(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardState,
    spec: &FieldSpec,
    is_active: bool,
) {
    let session = &wizard.session;
    let value = session
        .value(spec.name)
        .cloned()
        .unwrap_or_else(|| FieldValue::empty(spec.kind));
    let is_disabled = wizard.is_select_disabled(spec);
    let label = if spec.is_required() {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    let muted = Style::default().fg(Color::DarkGray);
    let (content, show_cursor) = match spec.kind {
        FieldKind::Text | FieldKind::Number => {
            let text = display_value(spec, &value, session.catalog());
            (vec![value_line(text, "(empty)", is_active)], true)
        }
        FieldKind::Multiline => {
            let lines = value
                .as_text()
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();
            (lines, true)
        }
        FieldKind::Flag => {
            let (mark, text) = if value.as_flag() {
                ("[x]", "Yes")
            } else {
                ("[ ]", "No")
            };
            (vec![Line::from(format!("{mark} {text}"))], false)
        }
        FieldKind::Choice if is_disabled => {
            let text = if wizard.catalog_loading {
                "Loading options…"
            } else {
                "No options available"
            };
            (vec![Line::from(Span::styled(text, muted))], false)
        }
        FieldKind::Choice => {
            let text = display_value(spec, &value, session.catalog());
            let line = match (text.is_empty(), is_active) {
                (true, _) => Line::from(Span::styled("Use ←/→ to choose", muted)),
                (false, true) => Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    Span::raw(text),
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ]),
                (false, false) => Line::from(text),
            };
            (vec![line], false)
        }
        FieldKind::MultiChoice if is_disabled => {
            let text = if wizard.catalog_loading {
                "Loading options…"
            } else {
                "No options available"
            };
            (vec![Line::from(Span::styled(text, muted))], false)
        }
        FieldKind::MultiChoice => {
            let selected = value.as_set();
            let mut spans = Vec::new();
            for (i, (option, option_label)) in wizard.options_for(spec).into_iter().enumerate() {
                let mark = if selected.contains(&option) { "[x]" } else { "[ ]" };
                let mut style = Style::default();
                if is_active && i == wizard.option_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!("{mark} {option_label}"), style));
                spans.push(Span::raw("  "));
            }
            (vec![Line::from(spans)], false)
        }
    };

    draw_field(
        frame,
        area,
        &label,
        content,
        FieldState {
            is_active,
            is_disabled,
            show_cursor,
            error: session.error(spec.name),
        },
    );
}

fn files_panel_height(wizard: &WizardState) -> u16 {
    let rows = (wizard.session.files().len() as u16).clamp(1, MAX_FILE_ROWS);
    let error = u16::from(wizard.session.error(FILES_FIELD).is_some());
    // borders + hint + path input + file rows + error
    2 + 1 + 1 + rows + error
}

fn attachment_hint(allowed: &[&str]) -> &'static str {
    if allowed == DOCUMENT_MIME_TYPES {
        "PDF, JPG or PNG · up to 10 MB each"
    } else {
        "Audio or video · up to 10 MB each"
    }
}

fn draw_files_panel(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let session = &wizard.session;
    let is_active = wizard.active_target() == Some(FocusTarget::Files);
    let error = session.error(FILES_FIELD);

    let border_color = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let title = match session.step_spec().attachments {
        Attachments::Required(_) => " Attachments * ",
        _ => " Attachments (optional) ",
    };

    let panel_area = Rect {
        height: area.height.saturating_sub(u16::from(error.is_some())),
        ..area
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Path input
            Constraint::Min(0),    // Staged files
        ])
        .split(inner);

    let muted = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(Span::styled(
            attachment_hint(session.fields().variant().allowed_mime_types()),
            muted,
        )),
        rows[0],
    );

    let mut input = vec![Span::styled("Path: ", Style::default().fg(Color::Gray))];
    if wizard.path_input.is_empty() && !is_active {
        input.push(Span::styled("type or drop a file here", muted));
    } else {
        input.push(Span::raw(wizard.path_input.as_str()));
    }
    if is_active {
        input.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    frame.render_widget(Paragraph::new(Line::from(input)), rows[1]);

    if session.files().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No files added yet", muted)),
            rows[2],
        );
    } else {
        let items: Vec<ListItem> = session
            .files()
            .iter()
            .map(|file| {
                ListItem::new(Line::from(vec![
                    Span::raw(file.name.as_str()),
                    Span::styled(format!("  {}", format_size(file.size)), muted),
                ]))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Cyan))
            .highlight_symbol("› ");
        let selected = is_active.then_some(wizard.file_cursor);
        render_scrollable_list(frame, rows[2], list, selected);
    }

    if let Some(error) = error {
        let error_area = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            )),
            error_area,
        );
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let session = &wizard.session;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(area);

    let back = if session.current_step() > 1 {
        "◀ Back"
    } else {
        "Cancel"
    };
    render_button(frame, chunks[0], back, false, true);

    let submitting = *session.submission() == SubmissionState::Submitting;
    let forward = match (session.is_last_step(), submitting) {
        (_, true) => "Sending…",
        (true, false) => "Submit Request",
        (false, false) => "Continue ▶",
    };
    render_button(frame, chunks[2], forward, true, !submitting);
}
