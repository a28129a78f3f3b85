//! In-memory state of one in-progress quote request

use uuid::Uuid;

use super::field::FieldValue;
use super::files::{FileCandidate, FileRejection, FileStager, StagedFile};
use super::schema::{FieldSpec, FormVariant, StepSpec};
use super::store::{FieldStore, SessionError};
use super::validator::{first_invalid_step, validate_step, ErrorMap};
use crate::state::OptionCatalog;

/// Lifecycle of the final submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// One wizard run: step position, field values, errors, attachments and
/// submission outcome. Owned by exactly one form screen.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub id: Uuid,
    variant: FormVariant,
    current_step: usize,
    fields: FieldStore,
    errors: ErrorMap,
    files: FileStager,
    submission: SubmissionState,
    catalog: OptionCatalog,
}

impl FormSession {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant,
            current_step: 1,
            fields: FieldStore::new(variant),
            errors: ErrorMap::new(),
            files: FileStager::new(variant.allowed_mime_types()),
            submission: SubmissionState::Idle,
            catalog: OptionCatalog::default(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.variant.total_steps()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    pub fn step_spec(&self) -> &'static StepSpec {
        // current_step is kept within [1, total_steps]
        &self.variant.steps()[self.current_step - 1]
    }

    /// Fields of the current step that are currently shown
    pub fn visible_step_fields(&self) -> Vec<&'static FieldSpec> {
        self.step_spec()
            .fields
            .iter()
            .filter(|f| self.fields.is_visible(f))
            .collect()
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn files(&self) -> &[StagedFile] {
        self.files.files()
    }

    pub fn accepts_files(&self) -> bool {
        self.files.accepts_files()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Once submitted successfully the session no longer changes
    pub fn is_closed(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    /// Install the remote options once they have loaded
    pub fn apply_catalog(&mut self, catalog: OptionCatalog) {
        self.catalog = catalog;
    }

    /// Whether the current step passes validation
    pub fn can_advance(&self) -> bool {
        validate_step(&self.fields, self.files.len(), self.current_step).is_empty()
    }

    /// Validate the current step and move forward when it passes.
    /// Returns true if the step changed.
    pub fn advance(&mut self) -> bool {
        let errors = validate_step(&self.fields, self.files.len(), self.current_step);
        if !errors.is_empty() {
            tracing::debug!(step = self.current_step, errors = errors.len(), "step invalid");
            self.errors = errors;
            return false;
        }
        if self.is_last_step() {
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Move back one step. Returns true if the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.current_step > 1 {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    /// Replace a field value and clear that field's error
    pub fn update(&mut self, name: &str, value: FieldValue) -> Result<(), SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        self.fields.set(name, value)?;
        self.errors.remove(name);

        if self.variant == FormVariant::CertifiedDocument && name == "sourceLanguage" {
            self.default_target_language();
        }
        Ok(())
    }

    /// Edit a field in place (typing, toggling) and clear its error
    pub fn edit(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut FieldValue),
    ) -> Result<(), SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        let value = self
            .fields
            .get(name)
            .cloned()
            .ok_or_else(|| SessionError::UnknownField(name.to_string()))?;
        let mut edited = value;
        edit(&mut edited);
        self.update(name, edited)
    }

    /// A non-English source language suggests English as the target,
    /// unless a target has already been chosen.
    fn default_target_language(&mut self) {
        let Some(source) = self.fields.get("sourceLanguage").and_then(FieldValue::as_choice)
        else {
            return;
        };
        let is_english = self
            .catalog
            .find_locale(source)
            .map(|l| l.is_english())
            .unwrap_or(true);
        let target_unset = self
            .fields
            .get("targetLanguage")
            .is_some_and(FieldValue::is_blank);

        if is_english || !target_unset {
            return;
        }
        if let Some(english) = self.catalog.first_english_locale() {
            let value = FieldValue::Choice(Some(english.value.clone()));
            if self.fields.set("targetLanguage", value).is_ok() {
                self.errors.remove("targetLanguage");
            }
        }
    }

    /// Stage files; returns a message per rejected candidate
    pub fn add_files(
        &mut self,
        candidates: impl IntoIterator<Item = FileCandidate>,
    ) -> Result<Vec<FileRejection>, SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        let before = self.files.len();
        let rejections = self.files.add_files(candidates);
        if self.files.len() > before {
            self.errors.remove(super::validator::FILES_FIELD);
        }
        Ok(rejections)
    }

    pub fn remove_file(&mut self, index: usize) -> Result<Option<StagedFile>, SessionError> {
        if self.is_closed() {
            return Err(SessionError::Closed);
        }
        Ok(self.files.remove_file(index))
    }

    /// Re-validate every step before sending. On failure jumps to the
    /// earliest step with errors and returns false; on success marks the
    /// session as submitting.
    pub fn begin_submission(&mut self) -> bool {
        if matches!(
            self.submission,
            SubmissionState::Submitting | SubmissionState::Succeeded
        ) {
            return false;
        }
        if let Some((step, errors)) = first_invalid_step(&self.fields, self.files.len()) {
            self.current_step = step;
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        self.submission = SubmissionState::Submitting;
        true
    }

    /// Record the outcome of a submission attempt
    pub fn finish_submission(&mut self, outcome: Result<(), String>) {
        self.submission = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(reason) => SubmissionState::Failed(reason),
        };
    }

    /// Dismiss a failure banner, leaving fields intact
    pub fn clear_failure(&mut self) {
        if matches!(self.submission, SubmissionState::Failed(_)) {
            self.submission = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Locale;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn choice(s: &str) -> FieldValue {
        FieldValue::Choice(Some(s.to_string()))
    }

    fn pdf(name: &str) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            size: 2_048,
            mime_type: "application/pdf".to_string(),
            path: PathBuf::from(name),
        }
    }

    fn locale(value: &str, language: &str) -> Locale {
        Locale {
            value: value.to_string(),
            label: value.to_string(),
            language_name: language.to_string(),
            country_name: None,
        }
    }

    fn catalog() -> OptionCatalog {
        OptionCatalog {
            locales: vec![
                locale("French (France)", "French"),
                locale("English (Canada)", "English"),
                locale("English (United States)", "English"),
                locale("Spanish (Mexico)", "Spanish"),
            ],
            ..Default::default()
        }
    }

    fn fill_certified(session: &mut FormSession) {
        session.update("fullName", text("Ada Lovelace")).unwrap();
        session.update("email", text("ada@example.com")).unwrap();
        session.update("phone", text("403-555-0142")).unwrap();
        session.update("sourceLanguage", choice("French (France)")).unwrap();
        session.update("targetLanguage", choice("English (Canada)")).unwrap();
        session.update("documentType", choice("Birth certificate")).unwrap();
        session.update("intendedUse", choice("Immigration")).unwrap();
        session.update("pageCount", FieldValue::Number(2)).unwrap();
    }

    mod step_controller {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_at_step_one() {
            let session = FormSession::new(FormVariant::CertifiedDocument);
            assert_eq!(session.current_step(), 1);
            assert_eq!(session.total_steps(), 3);
            assert_eq!(session.submission(), &SubmissionState::Idle);
        }

        #[test]
        fn test_retreat_from_first_step_is_noop() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            assert!(!session.retreat());
            assert_eq!(session.current_step(), 1);
        }

        #[test]
        fn test_short_name_blocks_advance() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.update("fullName", text("A")).unwrap();
            session.update("email", text("ada@example.com")).unwrap();
            session.update("phone", text("4035550142")).unwrap();

            assert!(!session.can_advance());
            assert!(!session.advance());
            assert_eq!(session.current_step(), 1);
            assert!(session.error("fullName").is_some());
        }

        #[test]
        fn test_invalid_email_blocks_advance() {
            let mut session = FormSession::new(FormVariant::Interpretation);
            session.update("fullName", text("Ada Lovelace")).unwrap();
            session.update("email", text("not-an-email")).unwrap();
            session.update("phone", text("4035550142")).unwrap();
            assert!(!session.advance());
            assert_eq!(session.current_step(), 1);
            assert_eq!(
                session.error("email"),
                Some("Please enter a valid email address")
            );
        }

        #[test]
        fn test_valid_step_advances_and_retreats() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            assert!(session.advance());
            assert_eq!(session.current_step(), 2);
            assert!(session.retreat());
            assert_eq!(session.current_step(), 1);
        }

        #[test]
        fn test_advance_at_invalid_last_step_is_noop() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            assert!(session.advance());
            assert!(session.advance());
            assert_eq!(session.current_step(), 3);

            assert!(!session.advance());
            assert_eq!(session.current_step(), 3);
            assert!(session.error("files").is_some());
        }

        #[test]
        fn test_advance_at_valid_last_step_stays() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            session.advance();
            session.advance();
            session.add_files([pdf("scan.pdf")]).unwrap();
            assert!(session.can_advance());
            assert!(!session.advance());
            assert_eq!(session.current_step(), 3);
        }
    }

    mod field_store {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_clears_only_that_error() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.advance();
            assert!(session.error("fullName").is_some());
            assert!(session.error("email").is_some());

            session.update("fullName", text("A")).unwrap();
            assert!(session.error("fullName").is_none());
            assert!(session.error("email").is_some());
        }

        #[test]
        fn test_edit_in_place() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.edit("fullName", |v| v.push_char('Z')).unwrap();
            assert_eq!(session.value("fullName"), Some(&text("Z")));
        }

        #[test]
        fn test_source_language_fills_english_target() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.apply_catalog(catalog());
            session.update("sourceLanguage", choice("French (France)")).unwrap();
            assert_eq!(
                session.value("targetLanguage"),
                Some(&choice("English (Canada)"))
            );
        }

        #[test]
        fn test_source_language_keeps_existing_target() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.apply_catalog(catalog());
            session.update("targetLanguage", choice("Spanish (Mexico)")).unwrap();
            session.update("sourceLanguage", choice("French (France)")).unwrap();
            assert_eq!(
                session.value("targetLanguage"),
                Some(&choice("Spanish (Mexico)"))
            );
        }

        #[test]
        fn test_english_source_does_not_fill_target() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.apply_catalog(catalog());
            session
                .update("sourceLanguage", choice("English (United States)"))
                .unwrap();
            assert_eq!(session.value("targetLanguage"), Some(&FieldValue::Choice(None)));
        }

        #[test]
        fn test_target_default_is_overwritable() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.apply_catalog(catalog());
            session.update("sourceLanguage", choice("French (France)")).unwrap();
            session.update("targetLanguage", choice("Spanish (Mexico)")).unwrap();
            assert_eq!(
                session.value("targetLanguage"),
                Some(&choice("Spanish (Mexico)"))
            );
        }

        #[test]
        fn test_no_autofill_outside_certified_form() {
            let mut session = FormSession::new(FormVariant::Interpretation);
            session.apply_catalog(catalog());
            session.update("sourceLanguage", choice("French (France)")).unwrap();
            assert!(session.value("targetLanguage").is_none());
        }
    }

    mod files {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_adding_file_clears_files_error() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            session.advance();
            session.advance();
            session.advance();
            assert!(session.error("files").is_some());

            let rejections = session.add_files([pdf("scan.pdf")]).unwrap();
            assert!(rejections.is_empty());
            assert!(session.error("files").is_none());
        }

        #[test]
        fn test_remove_file_by_index() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            session.add_files([pdf("a.pdf"), pdf("b.pdf")]).unwrap();
            let removed = session.remove_file(0).unwrap().unwrap();
            assert_eq!(removed.name, "a.pdf");
            assert_eq!(session.files().len(), 1);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submission_jumps_to_earliest_invalid_step() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            session.advance();
            session.advance();
            session.update("email", text("broken")).unwrap();
            session.add_files([pdf("scan.pdf")]).unwrap();

            assert!(!session.begin_submission());
            assert_eq!(session.current_step(), 1);
            assert!(session.error("email").is_some());
            assert_eq!(session.submission(), &SubmissionState::Idle);
        }

        #[test]
        fn test_success_closes_session() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            session.add_files([pdf("scan.pdf")]).unwrap();

            assert!(session.begin_submission());
            assert_eq!(session.submission(), &SubmissionState::Submitting);
            assert!(!session.begin_submission());

            session.finish_submission(Ok(()));
            assert!(session.is_closed());
            assert_eq!(
                session.update("fullName", text("Other")),
                Err(SessionError::Closed)
            );
            assert_eq!(session.add_files([pdf("x.pdf")]), Err(SessionError::Closed));
            assert_eq!(session.remove_file(0), Err(SessionError::Closed));
            assert_eq!(session.value("fullName"), Some(&text("Ada Lovelace")));
        }

        #[test]
        fn test_failure_keeps_fields_for_resubmission() {
            let mut session = FormSession::new(FormVariant::CertifiedDocument);
            fill_certified(&mut session);
            session.add_files([pdf("scan.pdf")]).unwrap();
            session.begin_submission();
            session.finish_submission(Err("Server busy".to_string()));

            assert_eq!(
                session.submission(),
                &SubmissionState::Failed("Server busy".to_string())
            );
            assert_eq!(session.value("fullName"), Some(&text("Ada Lovelace")));
            assert_eq!(session.files().len(), 1);

            session.clear_failure();
            assert!(session.begin_submission());
        }
    }
}
