//! Application state definitions

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::forms::FormVariant;
use super::wizard::WizardState;

/// How long a transient notice stays on screen
pub const BANNER_TTL: Duration = Duration::from_secs(5);

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Pick which quote form to fill in
    #[default]
    VariantPicker,
    Wizard,
    /// Shown after a successful submission
    Confirmation,
}

/// Transient notice shown above the main content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Banner {
    pub fn new(message: impl Into<String>, is_error: bool, now: Instant) -> Self {
        Self {
            message: message.into(),
            is_error,
            expires_at: now + BANNER_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Highlighted entry in the variant picker
    pub selected_index: usize,
    /// The mounted form, if any
    pub wizard: Option<WizardState>,
    pub banner: Option<Banner>,
    /// Errors waiting to be acknowledged, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < FormVariant::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_variant(&self) -> FormVariant {
        FormVariant::ALL[self.selected_index.min(FormVariant::ALL.len() - 1)]
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn show_banner(&mut self, message: impl Into<String>, is_error: bool) {
        self.banner = Some(Banner::new(message, is_error, Instant::now()));
    }

    /// Drop the banner once its time is up
    pub fn expire_banner(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
        }
    }
}
