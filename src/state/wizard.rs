//! Screen state for a mounted quote form

use std::path::PathBuf;

use super::forms::{
    Attachments, FieldKind, FieldSpec, FieldValue, FileCandidate, FormSession, FormVariant,
    SessionError,
};
use super::OptionCatalog;

/// What the cursor is on within the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(&'static FieldSpec),
    Files,
}

/// A mounted form: its session plus cursor and input buffers
#[derive(Debug, Clone)]
pub struct WizardState {
    pub session: FormSession,
    /// True until the option catalog request settles
    pub catalog_loading: bool,
    pub active_field: usize,
    /// Highlighted option in a multi-select
    pub option_cursor: usize,
    /// Path typed or pasted into the attachment box
    pub path_input: String,
    /// Highlighted staged file
    pub file_cursor: usize,
}

impl WizardState {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            session: FormSession::new(variant),
            catalog_loading: true,
            active_field: 0,
            option_cursor: 0,
            path_input: String::new(),
            file_cursor: 0,
        }
    }

    /// Install a loaded catalog and enable remote-backed selects
    pub fn catalog_loaded(&mut self, catalog: OptionCatalog) {
        self.session.apply_catalog(catalog);
        self.catalog_loading = false;
    }

    /// Focusable items of the current step, in display order
    pub fn targets(&self) -> Vec<FocusTarget> {
        let mut targets: Vec<FocusTarget> = self
            .session
            .visible_step_fields()
            .into_iter()
            .map(FocusTarget::Field)
            .collect();
        if self.session.step_spec().attachments != Attachments::None
            && self.session.accepts_files()
        {
            targets.push(FocusTarget::Files);
        }
        targets
    }

    pub fn active_target(&self) -> Option<FocusTarget> {
        let targets = self.targets();
        targets
            .get(self.active_field.min(targets.len().saturating_sub(1)))
            .copied()
    }

    fn active_spec(&self) -> Option<&'static FieldSpec> {
        match self.active_target() {
            Some(FocusTarget::Field(spec)) => Some(spec),
            _ => None,
        }
    }

    pub fn is_multiline_active(&self) -> bool {
        self.active_spec()
            .is_some_and(|s| s.kind == FieldKind::Multiline)
    }

    pub fn next_field(&mut self) {
        let count = self.targets().len().max(1);
        self.active_field = (self.active_field + 1) % count;
        self.option_cursor = 0;
    }

    pub fn prev_field(&mut self) {
        let count = self.targets().len().max(1);
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
        self.option_cursor = 0;
    }

    /// Reset cursors after the step changes
    pub fn reset_focus(&mut self) {
        self.active_field = 0;
        self.option_cursor = 0;
        self.file_cursor = 0;
    }

    /// Put the cursor on the first field with an error, if any
    pub fn focus_first_error(&mut self) {
        let errors = self.session.errors();
        if let Some(index) = self.targets().iter().position(|t| match t {
            FocusTarget::Field(spec) => errors.contains_key(spec.name),
            FocusTarget::Files => errors.contains_key(super::forms::FILES_FIELD),
        }) {
            self.active_field = index;
        }
    }

    /// Options for a select field; empty while a remote catalog is loading
    pub fn options_for(&self, spec: &FieldSpec) -> Vec<(String, String)> {
        match spec.options {
            Some(source) if source.is_remote() && self.catalog_loading => Vec::new(),
            Some(source) => self.session.catalog().options(source),
            None => Vec::new(),
        }
    }

    /// Selects backed by a catalog stay disabled until it loads
    pub fn is_select_disabled(&self, spec: &FieldSpec) -> bool {
        spec.options
            .is_some_and(|s| s.is_remote() && (self.catalog_loading || self.options_for(spec).is_empty()))
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) -> Result<(), SessionError> {
        match self.active_target() {
            Some(FocusTarget::Files) => {
                self.path_input.push(c);
                Ok(())
            }
            Some(FocusTarget::Field(spec)) => match spec.kind {
                FieldKind::Text | FieldKind::Multiline | FieldKind::Number => {
                    self.session.edit(spec.name, |v| v.push_char(c))
                }
                _ => Ok(()),
            },
            None => Ok(()),
        }
    }

    pub fn backspace(&mut self) -> Result<(), SessionError> {
        match self.active_target() {
            Some(FocusTarget::Files) => {
                self.path_input.pop();
                Ok(())
            }
            Some(FocusTarget::Field(spec)) => match spec.kind {
                FieldKind::Text | FieldKind::Multiline | FieldKind::Number => {
                    self.session.edit(spec.name, FieldValue::pop_char)
                }
                FieldKind::Choice => self.session.update(spec.name, FieldValue::Choice(None)),
                _ => Ok(()),
            },
            None => Ok(()),
        }
    }

    pub fn newline(&mut self) -> Result<(), SessionError> {
        match self.active_spec() {
            Some(spec) if spec.kind == FieldKind::Multiline => {
                self.session.edit(spec.name, |v| v.push_char('\n'))
            }
            _ => Ok(()),
        }
    }

    /// Left/Right on a select: pick the previous/next option, or move the
    /// highlight in a multi-select
    pub fn cycle_option(&mut self, forward: bool) -> Result<(), SessionError> {
        let Some(spec) = self.active_spec() else {
            return Ok(());
        };
        let options = self.options_for(spec);
        if options.is_empty() {
            return Ok(());
        }
        let len = options.len();
        let step = |i: usize| if forward { (i + 1) % len } else { (i + len - 1) % len };

        match spec.kind {
            FieldKind::Choice => {
                let current = self
                    .session
                    .value(spec.name)
                    .and_then(FieldValue::as_choice)
                    .and_then(|v| options.iter().position(|(value, _)| value == v));
                let next = match current {
                    Some(i) => step(i),
                    None if forward => 0,
                    None => len - 1,
                };
                let value = options[next].0.clone();
                self.session.update(spec.name, FieldValue::Choice(Some(value)))
            }
            FieldKind::MultiChoice => {
                self.option_cursor = step(self.option_cursor.min(len - 1));
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Space on a flag or multi-select
    pub fn toggle(&mut self) -> Result<(), SessionError> {
        let Some(spec) = self.active_spec() else {
            return Ok(());
        };
        match spec.kind {
            FieldKind::Flag => self
                .session
                .edit(spec.name, |v| *v = FieldValue::Flag(!v.as_flag())),
            FieldKind::MultiChoice => {
                let options = self.options_for(spec);
                let Some((value, _)) = options.get(self.option_cursor) else {
                    return Ok(());
                };
                let value = value.clone();
                self.session.edit(spec.name, |v| v.toggle_member(&value))
            }
            _ => Ok(()),
        }
    }

    /// Stage every path in the input box. Returns one message per path
    /// that could not be read or was rejected.
    pub fn stage_path_input(&mut self) -> Result<Vec<String>, SessionError> {
        let paths = parse_dropped_paths(&self.path_input);
        let mut messages = Vec::new();
        let mut candidates = Vec::new();
        for path in paths {
            match FileCandidate::from_path(&path) {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => messages.push(e.to_string()),
            }
        }
        let rejections = self.session.add_files(candidates)?;
        messages.extend(rejections.iter().map(|r| r.message()));
        self.path_input.clear();
        Ok(messages)
    }

    pub fn move_file_cursor(&mut self, down: bool) {
        let count = self.session.files().len();
        if count == 0 {
            self.file_cursor = 0;
        } else if down {
            self.file_cursor = (self.file_cursor + 1).min(count - 1);
        } else {
            self.file_cursor = self.file_cursor.saturating_sub(1);
        }
    }

    /// Remove the highlighted staged file
    pub fn remove_selected_file(&mut self) -> Result<Option<String>, SessionError> {
        let removed = self.session.remove_file(self.file_cursor)?;
        let count = self.session.files().len();
        if self.file_cursor >= count {
            self.file_cursor = count.saturating_sub(1);
        }
        Ok(removed.map(|f| f.name))
    }
}

/// Split pasted or dropped text into paths. Terminals paste dropped files
/// as space separated paths, quoted or with escaped spaces. A backslash only
/// escapes whitespace or a quote; anywhere else it is a path separator.
pub fn parse_dropped_paths(input: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = input.trim().chars().peekable();

    while let Some(c) = chars.next() {
        match (c, quote) {
            ('\\', None) => {
                let escapes = |n: &char| n.is_whitespace() || matches!(n, '\'' | '"');
                match chars.next_if(escapes) {
                    Some(escaped) => current.push(escaped),
                    None => current.push('\\'),
                }
            }
            ('\'' | '"', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                }
            }
            (c, _) => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(PathBuf::from(current));
    }
    paths
}
