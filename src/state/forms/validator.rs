//! Per-step validation rules

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::field::FieldValue;
use super::schema::{Attachments, FormVariant, Rule};
use super::store::FieldStore;

/// Key used for attachment errors in the error map
pub const FILES_FIELD: &str = "files";

/// Field name to message
pub type ErrorMap = BTreeMap<&'static str, String>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

impl Rule {
    /// Whether `value` satisfies this rule
    pub fn check(&self, value: &FieldValue) -> bool {
        match self {
            Rule::Required => !value.as_text().trim().is_empty(),
            Rule::MinLength(n) => value.as_text().trim().chars().count() >= *n,
            Rule::Email => EMAIL_RE.is_match(value.as_text().trim()),
            Rule::MinDigits(n) => {
                value.as_text().chars().filter(char::is_ascii_digit).count() >= *n
            }
            Rule::Selected => value.as_choice().is_some_and(|c| !c.is_empty()),
            Rule::AtLeast(min) => value.as_number() >= *min,
            Rule::NonEmptySet => !value.as_set().is_empty(),
        }
    }
}

/// Validate one step (1-based). Returns an empty map iff the step is valid.
pub fn validate_step(fields: &FieldStore, staged_files: usize, step: usize) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let Some(spec) = fields.variant().step(step) else {
        return errors;
    };

    for field in spec.fields.iter().filter(|f| fields.is_visible(f)) {
        let Some(value) = fields.get(field.name) else {
            continue;
        };
        if let Some((_, message)) = field.rules.iter().find(|(rule, _)| !rule.check(value)) {
            errors.insert(field.name, message.to_string());
        }
    }

    if let Attachments::Required(message) = spec.attachments {
        if staged_files == 0 {
            errors.insert(FILES_FIELD, message.to_string());
        }
    }

    errors
}

/// Earliest step (in fixed order) with any error, together with its errors
pub fn first_invalid_step(fields: &FieldStore, staged_files: usize) -> Option<(usize, ErrorMap)> {
    let variant: FormVariant = fields.variant();
    (1..=variant.total_steps())
        .map(|step| (step, validate_step(fields, staged_files, step)))
        .find(|(_, errors)| !errors.is_empty())
}
