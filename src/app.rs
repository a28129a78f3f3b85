//! Application state and core logic

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::api::{
    load_catalog, send_submission, CatalogLoad, HttpQuoteApi, QuoteApiTrait, SubmissionPayload,
    GENERIC_SUBMIT_ERROR,
};
use crate::config::QuoteConfig;
use crate::platform::has_action_modifier;
use crate::state::{
    AppState, CatalogKind, FieldKind, FocusTarget, FormVariant, SessionError, SubmissionState,
    View, WizardState,
};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the quote API
    api: Arc<dyn QuoteApiTrait>,
    pub config: QuoteConfig,
    /// Whether the app should quit
    quit: bool,
    /// Pending catalog for the mounted form
    catalog_rx: Option<oneshot::Receiver<CatalogLoad>>,
    /// Outcome of the submission in flight
    submit_rx: Option<oneshot::Receiver<Result<(), String>>>,
}

impl App {
    /// Create a new App talking to the configured API origin
    pub fn new(config: QuoteConfig) -> Result<Self> {
        let api = HttpQuoteApi::new(&config.api_base_url(), config.request_timeout())?;
        info!(base_url = api.base_url(), "quote API client ready");
        Ok(Self::with_api(Arc::new(api), config))
    }

    pub fn with_api(api: Arc<dyn QuoteApiTrait>, config: QuoteConfig) -> Self {
        Self {
            state: AppState::default(),
            api,
            config,
            quit: false,
            catalog_rx: None,
            submit_rx: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Periodic housekeeping between input events
    pub fn tick(&mut self) {
        self.poll_catalog();
        self.poll_submission();
        self.state.expire_banner(Instant::now());
    }

    /// Mount a form and start fetching its option catalogs in the background
    pub fn open_form(&mut self, variant: FormVariant) {
        let wizard = WizardState::new(variant);
        info!(session = %wizard.session.id, ?variant, "form opened");
        self.state.wizard = Some(wizard);
        self.state.current_view = View::Wizard;

        let (tx, rx) = oneshot::channel();
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let load = load_catalog(api.as_ref(), variant).await;
            if tx.send(load).is_err() {
                debug!(?variant, "form closed before its catalog loaded");
            }
        });
        // Replacing the receiver discards any load still in flight for an
        // earlier form
        self.catalog_rx = Some(rx);
    }

    /// Unmount the form and return to the picker
    pub fn close_form(&mut self) {
        self.state.wizard = None;
        self.catalog_rx = None;
        self.submit_rx = None;
        self.state.current_view = View::VariantPicker;
    }

    fn poll_catalog(&mut self) {
        let Some(rx) = self.catalog_rx.as_mut() else {
            return;
        };
        let load = match rx.try_recv() {
            Ok(load) => load,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                warn!("catalog loader ended without a result");
                CatalogLoad {
                    failed: wizard_catalogs(&self.state),
                    ..Default::default()
                }
            }
        };
        self.catalog_rx = None;

        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        wizard.catalog_loaded(load.catalog);
        if !load.failed.is_empty() {
            let message = format!(
                "Some options could not be loaded. Please try again later or call {}.",
                self.config.support_phone()
            );
            self.state.show_banner(message, true);
        }
    }

    fn poll_submission(&mut self) {
        let Some(rx) = self.submit_rx.as_mut() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                warn!("submission task ended without a result");
                Err(GENERIC_SUBMIT_ERROR.to_string())
            }
        };
        self.submit_rx = None;

        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        wizard.session.finish_submission(outcome);
        match wizard.session.submission().clone() {
            SubmissionState::Succeeded => {
                self.catalog_rx = None;
                self.state.current_view = View::Confirmation;
            }
            SubmissionState::Failed(reason) => self.push_error(reason),
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }
    }

    /// Whether a submission is in flight for the mounted form
    pub fn is_submitting(&self) -> bool {
        self.state
            .wizard
            .as_ref()
            .is_some_and(|w| *w.session.submission() == SubmissionState::Submitting)
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
                if let Some(wizard) = self.state.wizard.as_mut() {
                    wizard.session.clear_failure();
                }
            }
            return Ok(());
        }

        match self.state.current_view {
            View::VariantPicker => self.handle_picker_key(key),
            View::Wizard => self.handle_wizard_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
        Ok(())
    }

    /// Pasted text goes into the active field. Dropping files onto the
    /// terminal pastes their paths, which land in the attachment box.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors()
            || self.state.current_view != View::Wizard
            || self.is_submitting()
        {
            return;
        }
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        let multiline = wizard.is_multiline_active();
        let result = text
            .chars()
            .filter(|c| multiline || !matches!(c, '\r' | '\n'))
            .try_for_each(|c| wizard.input_char(c));
        self.report(result);
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => self.open_form(self.state.selected_variant()),
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter | KeyCode::Esc => self.close_form(),
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        // The form is frozen until the request settles
        if self.is_submitting() {
            return;
        }
        let shortcut = has_action_modifier(key.modifiers);
        match key.code {
            KeyCode::Char('s') if shortcut => return self.continue_or_submit(),
            KeyCode::Enter => {
                let Some(wizard) = self.state.wizard.as_ref() else {
                    return;
                };
                let staging = wizard.active_target() == Some(FocusTarget::Files)
                    && !wizard.path_input.trim().is_empty();
                if staging {
                    return self.stage_files();
                }
                if !wizard.is_multiline_active() {
                    return self.continue_or_submit();
                }
            }
            KeyCode::Esc => {
                let Some(wizard) = self.state.wizard.as_mut() else {
                    return;
                };
                if wizard.session.retreat() {
                    wizard.reset_focus();
                } else {
                    self.close_form();
                }
                return;
            }
            _ => {}
        }

        let Some(wizard) = self.state.wizard.as_ref() else {
            return;
        };
        let on_files = wizard.active_target() == Some(FocusTarget::Files);
        let toggles = matches!(
            wizard.active_target(),
            Some(FocusTarget::Field(spec)) if matches!(spec.kind, FieldKind::Flag | FieldKind::MultiChoice)
        );
        let removing = on_files
            && (key.code == KeyCode::Delete || (shortcut && key.code == KeyCode::Char('d')));
        if removing {
            let result = self.remove_selected_file();
            return self.report(result);
        }

        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        let has_files = !wizard.session.files().is_empty();
        let result = match key.code {
            KeyCode::Char(_) if shortcut => Ok(()),
            KeyCode::Tab => {
                wizard.next_field();
                Ok(())
            }
            KeyCode::BackTab => {
                wizard.prev_field();
                Ok(())
            }
            KeyCode::Up if on_files && has_files => {
                wizard.move_file_cursor(false);
                Ok(())
            }
            KeyCode::Down if on_files && has_files => {
                wizard.move_file_cursor(true);
                Ok(())
            }
            KeyCode::Up => {
                wizard.prev_field();
                Ok(())
            }
            KeyCode::Down => {
                wizard.next_field();
                Ok(())
            }
            KeyCode::Left => wizard.cycle_option(false),
            KeyCode::Right => wizard.cycle_option(true),
            KeyCode::Char(' ') if toggles => wizard.toggle(),
            KeyCode::Char(c) => wizard.input_char(c),
            KeyCode::Backspace => wizard.backspace(),
            KeyCode::Enter => wizard.newline(),
            _ => Ok(()),
        };
        self.report(result);
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        if let Err(e) = result {
            warn!(error = %e, "form edit rejected");
            self.push_error(e.to_string());
        }
    }

    fn remove_selected_file(&mut self) -> Result<(), SessionError> {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return Ok(());
        };
        if let Some(name) = wizard.remove_selected_file()? {
            self.state.show_banner(format!("Removed {name}"), false);
        }
        Ok(())
    }

    fn stage_files(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        let before = wizard.session.files().len();
        match wizard.stage_path_input() {
            Ok(messages) if !messages.is_empty() => {
                self.state.show_banner(messages.join("; "), true);
            }
            Ok(_) => {
                let added = wizard.session.files().len() - before;
                let noun = if added == 1 { "file" } else { "files" };
                self.state.show_banner(format!("Added {added} {noun}"), false);
            }
            Err(e) => self.report(Err(e)),
        }
    }

    /// Continue to the next step, or start submitting from the last one
    fn continue_or_submit(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };

        if !wizard.session.is_last_step() {
            if wizard.session.advance() {
                wizard.reset_focus();
            } else {
                wizard.focus_first_error();
            }
            return;
        }

        if !wizard.session.begin_submission() {
            info!(step = wizard.session.current_step(), "submission blocked by validation");
            wizard.reset_focus();
            wizard.focus_first_error();
            return;
        }

        let payload = SubmissionPayload::from_session(&wizard.session);
        let session = wizard.session.id;
        let (tx, rx) = oneshot::channel();
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let outcome = send_submission(api.as_ref(), payload).await;
            if tx.send(outcome).is_err() {
                debug!(%session, "form closed before its submission settled");
            }
        });
        self.submit_rx = Some(rx);
    }
}

/// Every catalog the mounted form asks for
fn wizard_catalogs(state: &AppState) -> Vec<CatalogKind> {
    state
        .wizard
        .as_ref()
        .map(|w| w.session.variant().catalogs().to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockQuoteApiTrait};
    use crate::state::{FieldValue, OptionItem};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn languages() -> Vec<OptionItem> {
        ["German", "Japanese"]
            .into_iter()
            .map(|l| OptionItem {
                value: l.to_string(),
                label: l.to_string(),
            })
            .collect()
    }

    fn app_with(api: MockQuoteApiTrait) -> App {
        App::with_api(Arc::new(api), QuoteConfig::default())
    }

    async fn wait_for_catalog(app: &mut App) {
        for _ in 0..100 {
            app.tick();
            if app.state.wizard.as_ref().is_some_and(|w| !w.catalog_loading) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("catalog never loaded");
    }

    async fn wait_for_submission(app: &mut App) {
        for _ in 0..100 {
            app.tick();
            if app.submit_rx.is_none() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never settled");
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn session_mut(app: &mut App) -> &mut crate::state::FormSession {
        &mut app.state.wizard.as_mut().unwrap().session
    }

    /// Fill an interpretation form up to its last step
    fn fill_interpretation(app: &mut App) {
        type_text(app, "Grace Hopper");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "grace@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "212-555-0199");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(session_mut(app).current_step(), 2);

        let session = session_mut(app);
        for (name, value) in [
            ("interpretationType", FieldValue::Choice(Some("Consecutive".into()))),
            ("sourceLanguage", FieldValue::Choice(Some("German".into()))),
            ("targetLanguages", FieldValue::Set(vec!["Japanese".into()])),
            ("participants", FieldValue::Number(12)),
        ] {
            session.update(name, value).unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(session_mut(app).current_step(), 3);

        let session = session_mut(app);
        session
            .update("eventDate", FieldValue::Text("2026-11-03".into()))
            .unwrap();
        session
            .update("durationHours", FieldValue::Number(3))
            .unwrap();
        session
            .update("location", FieldValue::Text("Calgary".into()))
            .unwrap();
    }

    #[tokio::test]
    async fn test_picker_opens_selected_form_and_loads_catalog() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages()
            .times(1)
            .returning(|| Ok(languages()));

        let mut app = app_with(api);
        app.handle_key(key(KeyCode::Down)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.current_view, View::Wizard);
        assert!(app.state.wizard.as_ref().unwrap().catalog_loading);

        wait_for_catalog(&mut app).await;
        let wizard = app.state.wizard.as_ref().unwrap();
        assert_eq!(wizard.session.variant(), FormVariant::Interpretation);
        assert_eq!(wizard.session.catalog().languages.len(), 2);
        assert!(app.state.banner.is_none());
    }

    #[tokio::test]
    async fn test_failed_catalog_shows_banner() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| {
            Err(ApiError::Status {
                url: "/api/languages".into(),
                status: 500,
                message: None,
            })
        });

        let mut app = app_with(api);
        app.open_form(FormVariant::LifeSciences);
        wait_for_catalog(&mut app).await;

        let banner = app.state.banner.as_ref().unwrap();
        assert!(banner.is_error);
        assert!(banner.message.contains(crate::config::DEFAULT_SUPPORT_PHONE));
    }

    #[tokio::test]
    async fn test_empty_catalog_shows_no_banner() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(Vec::new()));

        let mut app = app_with(api);
        app.open_form(FormVariant::LifeSciences);
        wait_for_catalog(&mut app).await;

        assert!(app.state.wizard.as_ref().unwrap().session.catalog().languages.is_empty());
        assert!(app.state.banner.is_none());
    }

    #[tokio::test]
    async fn test_enter_with_errors_stays_on_step() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(languages()));

        let mut app = app_with(api);
        app.open_form(FormVariant::Transcription);
        type_text(&mut app, "Al");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        let wizard = app.state.wizard.as_ref().unwrap();
        assert_eq!(wizard.session.current_step(), 1);
        assert!(wizard.session.error("email").is_some());
        assert_eq!(wizard.active_field, 1);
    }

    #[tokio::test]
    async fn test_escape_on_first_step_returns_to_picker() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(languages()));

        let mut app = app_with(api);
        app.open_form(FormVariant::Interpretation);
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.state.current_view, View::VariantPicker);
        assert!(app.state.wizard.is_none());
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_submit_success_shows_confirmation() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(languages()));
        api.expect_submit_quote()
            .times(1)
            .withf(|payload| payload.variant == FormVariant::Interpretation)
            .returning(|_| Ok(()));

        let mut app = app_with(api);
        app.open_form(FormVariant::Interpretation);
        wait_for_catalog(&mut app).await;
        fill_interpretation(&mut app);

        app.handle_key(ctrl('s')).unwrap();
        wait_for_submission(&mut app).await;
        assert_eq!(app.state.current_view, View::Confirmation);
        assert_eq!(
            session_mut(&mut app).submission(),
            &SubmissionState::Succeeded
        );

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.current_view, View::VariantPicker);
    }

    #[tokio::test]
    async fn test_submit_failure_is_dismissable_and_keeps_fields() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(languages()));
        api.expect_submit_quote()
            .times(1)
            .returning(|_| Err(ApiError::Rejected("Invalid date".into())));

        let mut app = app_with(api);
        app.open_form(FormVariant::Interpretation);
        fill_interpretation(&mut app);

        app.handle_key(key(KeyCode::Enter)).unwrap();
        wait_for_submission(&mut app).await;
        assert_eq!(app.state.current_view, View::Wizard);
        assert_eq!(app.state.current_error(), Some("Invalid date"));

        // Keys other than Enter/Esc are swallowed by the dialog
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(app.state.has_errors());

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(!app.state.has_errors());
        let session = session_mut(&mut app);
        assert_eq!(session.submission(), &SubmissionState::Idle);
        assert_eq!(
            session.value("fullName"),
            Some(&FieldValue::Text("Grace Hopper".into()))
        );
        assert_eq!(session.current_step(), 3);
    }

    #[tokio::test]
    async fn test_slow_submission_keeps_ui_responsive() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/languages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "languages": [{"value": "German", "label": "German"}]
                    })),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/interpretation-quote"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let api = HttpQuoteApi::new(&server.uri(), None).unwrap();
        let mut app = App::with_api(Arc::new(api), QuoteConfig::default());
        app.open_form(FormVariant::Interpretation);
        wait_for_catalog(&mut app).await;
        fill_interpretation(&mut app);

        app.handle_key(ctrl('s')).unwrap();
        assert!(app.is_submitting());
        assert_eq!(app.state.current_view, View::Wizard);

        tokio::time::sleep(Duration::from_millis(50)).await;
        app.tick();
        assert!(app.is_submitting());

        // Edits and navigation wait for the request to settle
        app.handle_key(key(KeyCode::Esc)).unwrap();
        type_text(&mut app, "x");
        app.handle_paste("pasted");
        let session = session_mut(&mut app);
        assert_eq!(session.current_step(), 3);
        assert_eq!(
            session.value("eventDate"),
            Some(&FieldValue::Text("2026-11-03".into()))
        );

        app.close_form();
        assert!(!app.is_submitting());
        assert_eq!(app.state.current_view, View::VariantPicker);
    }

    #[tokio::test]
    async fn test_multiline_enter_inserts_newline() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(languages()));
        api.expect_submit_quote().never();

        let mut app = app_with(api);
        app.open_form(FormVariant::Interpretation);
        fill_interpretation(&mut app);

        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        type_text(&mut app, "line one");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        type_text(&mut app, "two");
        assert_eq!(
            session_mut(&mut app).value("notes"),
            Some(&FieldValue::Text("line one\ntwo".into()))
        );
        assert_eq!(app.state.current_view, View::Wizard);
    }

    #[tokio::test]
    async fn test_paste_into_attachment_box() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_locales().returning(|| Ok(Vec::new()));
        api.expect_fetch_document_types().returning(|| Ok(Vec::new()));
        api.expect_fetch_intended_uses().returning(|| Ok(Vec::new()));

        let dir = tempfile::tempdir().unwrap();
        let scan = dir.path().join("passport scan.png");
        std::fs::write(&scan, b"\x89PNG").unwrap();

        let mut app = app_with(api);
        app.open_form(FormVariant::CertifiedDocument);
        let wizard = app.state.wizard.as_mut().unwrap();
        wizard.session.update("fullName", FieldValue::Text("Ada Lovelace".into())).unwrap();
        wizard.session.update("email", FieldValue::Text("ada@example.com".into())).unwrap();
        wizard.session.update("phone", FieldValue::Text("4035550142".into())).unwrap();
        assert!(wizard.session.advance());
        for (name, value) in [
            ("sourceLanguage", "fr-FR"),
            ("targetLanguage", "en-CA"),
            ("documentType", "Passport"),
            ("intendedUse", "Immigration"),
        ] {
            wizard
                .session
                .update(name, FieldValue::Choice(Some(value.into())))
                .unwrap();
        }
        wizard.session.update("pageCount", FieldValue::Number(2)).unwrap();
        assert!(wizard.session.advance());
        wizard.active_field = 1;

        app.handle_paste(&format!("'{}'\n", scan.display()));
        app.handle_key(key(KeyCode::Enter)).unwrap();

        let wizard = app.state.wizard.as_ref().unwrap();
        assert_eq!(wizard.session.files().len(), 1);
        assert_eq!(wizard.session.files()[0].name, "passport scan.png");
        assert_eq!(app.state.banner.as_ref().unwrap().message, "Added 1 file");

        app.handle_key(key(KeyCode::Delete)).unwrap();
        assert!(app.state.wizard.as_ref().unwrap().session.files().is_empty());
    }

    #[tokio::test]
    async fn test_closing_form_discards_pending_catalog() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(languages()));

        let mut app = app_with(api);
        app.open_form(FormVariant::Transcription);
        app.close_form();
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.tick();
        assert!(app.state.wizard.is_none());
        assert!(app.state.banner.is_none());
    }
}
