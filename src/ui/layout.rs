//! Layout components (brand chrome, content, status bar)

use crate::app::App;
use crate::platform::{REMOVE_FILE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldKind, FocusTarget, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Logo row plus bottom border
pub const HEADER_HEIGHT: u16 = 2;
/// Top border plus support line
pub const FOOTER_HEIGHT: u16 = 2;

/// Screen regions, top to bottom
pub struct ScreenAreas {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Create the main layout
pub fn create_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Brand header
            Constraint::Min(0),                // Content
            Constraint::Length(FOOTER_HEIGHT), // Brand footer
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Catalog status for the mounted form
    if let Some(wizard) = &app.state.wizard {
        let indicator = if wizard.catalog_loading {
            Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(" ● ", Style::default().fg(Color::Green))
        };
        spans.push(indicator);
    } else {
        spans.push(Span::raw(" "));
    }

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::VariantPicker => "j/k:nav  Enter:start  q:quit".to_string(),
        View::Confirmation => "Enter:new quote  q:quit".to_string(),
        View::Wizard if app.is_submitting() => "Sending your request...".to_string(),
        View::Wizard => {
            let Some(wizard) = &app.state.wizard else {
                return String::new();
            };
            let field_hint = match wizard.active_target() {
                Some(FocusTarget::Files) => {
                    format!("Enter:add path  ↑/↓:select  {REMOVE_FILE_SHORTCUT}:remove  ")
                }
                Some(FocusTarget::Field(spec)) => match spec.kind {
                    FieldKind::Choice => "←/→:choose  ".to_string(),
                    FieldKind::MultiChoice => "←/→:move  Space:toggle  ".to_string(),
                    FieldKind::Flag => "Space:toggle  ".to_string(),
                    FieldKind::Multiline => "Enter:newline  ".to_string(),
                    FieldKind::Text | FieldKind::Number => String::new(),
                },
                None => String::new(),
            };
            let advance = if wizard.session.is_last_step() {
                format!("{SUBMIT_SHORTCUT}:submit")
            } else {
                format!("{SUBMIT_SHORTCUT}:continue")
            };
            format!("Tab:next  {field_hint}{advance}  Esc:back")
        }
    }
}
