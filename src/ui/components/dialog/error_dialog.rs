//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render an error dialog overlay centered on the screen, with the support
/// number as a fallback contact
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, support_phone: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to go back to the form"),
    ];
    let footnote = Line::from(vec![
        Span::raw("Prefer to talk? Call "),
        Span::styled(support_phone.to_string(), key_style),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "Request not sent",
            color: Color::Red,
            message: error_message,
            footnote: Some(footnote),
            hint: Some(hint),
            max_width: 64,
        },
    );
}
