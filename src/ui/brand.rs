//! Branded header and footer drawn around every screen

use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::{BrandConfig, CtaType, QuoteConfig, Theme};

const COMPANY: &str = "CETHOS";
const TAGLINE: &str = "Translation Services";
const LEGAL_NAME: &str = "Cethos Solutions Inc.";

/// Top-level navigation; Industries can be hidden
const NAV_ITEMS: &[&str] = &["Services", "Industries", "About"];

/// Colors for one theme
struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
    muted: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::DarkGray,
        },
        Theme::Dark => Palette {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            muted: Color::Gray,
        },
    }
}

pub fn nav_items(brand: &BrandConfig) -> Vec<&'static str> {
    if brand.minimal {
        return Vec::new();
    }
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| brand.show_industries || *item != "Industries")
        .collect()
}

pub fn cta_label(cta: CtaType) -> &'static str {
    match cta {
        CtaType::Quote => "Get a Quote",
        CtaType::Contact => "Contact Us",
    }
}

/// Draw the header: logo on the left, navigation and CTA on the right
pub fn draw_header(frame: &mut Frame, area: Rect, config: &QuoteConfig) {
    let brand = &config.brand;
    let colors = palette(brand.theme);
    let base = Style::default().bg(colors.bg).fg(colors.fg);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.accent).bg(colors.bg))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let logo = Line::from(vec![
        Span::styled(
            format!(" {COMPANY} "),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(TAGLINE, Style::default().fg(colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(logo).style(base), chunks[0]);

    let mut right = Vec::new();
    for item in nav_items(brand) {
        right.push(Span::styled(item, Style::default().fg(colors.fg)));
        right.push(Span::raw("   "));
    }
    right.push(Span::styled(
        format!(" {} ", cta_label(brand.cta)),
        Style::default()
            .bg(colors.accent)
            .fg(colors.bg)
            .add_modifier(Modifier::BOLD),
    ));
    right.push(Span::raw(" "));
    frame.render_widget(
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .style(base),
        chunks[1],
    );
}

/// Draw the footer: copyright on the left, the support line on the right
pub fn draw_footer(frame: &mut Frame, area: Rect, config: &QuoteConfig) {
    let colors = palette(config.brand.theme);
    let base = Style::default().bg(colors.bg).fg(colors.muted);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors.accent).bg(colors.bg))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let copyright = format!(" © {} {LEGAL_NAME}", Local::now().year());
    frame.render_widget(Paragraph::new(copyright).style(base), chunks[0]);

    let support = Line::from(vec![
        Span::raw("Questions? Call "),
        Span::styled(
            config.support_phone().to_string(),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(support)
            .alignment(Alignment::Right)
            .style(base),
        chunks[1],
    );
}
