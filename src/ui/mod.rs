//! UI module for rendering the TUI

mod brand;
mod components;
mod forms;
mod layout;
mod picker;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    brand::draw_header(frame, areas.header, &app.config);

    // Draw main content based on current view
    match app.state.current_view {
        View::VariantPicker => picker::draw(frame, areas.main, app),
        View::Wizard => forms::draw_wizard(frame, areas.main, app),
        View::Confirmation => forms::draw_confirmation(frame, areas.main, app),
    }

    brand::draw_footer(frame, areas.footer, &app.config);
    layout::draw_status_bar(frame, areas.status, app);

    if let Some(banner) = &app.state.banner {
        components::render_banner(frame, areas.main, banner);
    }

    // Error dialog is modal and drawn last
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.config.support_phone());
    }
}
