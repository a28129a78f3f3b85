//! Typed field record built from a variant schema

use std::collections::BTreeMap;

use thiserror::Error;

use super::field::{FieldKind, FieldValue};
use super::schema::{FieldSpec, FormVariant};

/// Errors raised when mutating a form session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown field `{0}` for this form")]
    UnknownField(String),
    #[error("field `{field}` expects a {expected:?} value")]
    KindMismatch { field: String, expected: FieldKind },
    #[error("the quote request has already been submitted")]
    Closed,
}

/// Holds every field value of every step for one form variant
#[derive(Debug, Clone)]
pub struct FieldStore {
    variant: FormVariant,
    values: BTreeMap<&'static str, FieldValue>,
}

impl FieldStore {
    pub fn new(variant: FormVariant) -> Self {
        let values = variant
            .fields()
            .map(|spec| (spec.name, FieldValue::empty(spec.kind)))
            .collect();
        Self { variant, values }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Replace a value after checking the key and kind against the schema
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), SessionError> {
        let spec = self.spec(name)?;
        if !value.fits(spec.kind) {
            return Err(SessionError::KindMismatch {
                field: name.to_string(),
                expected: spec.kind,
            });
        }
        self.values.insert(spec.name, value);
        Ok(())
    }

    fn spec(&self, name: &str) -> Result<&'static FieldSpec, SessionError> {
        self.variant
            .field(name)
            .ok_or_else(|| SessionError::UnknownField(name.to_string()))
    }

    /// Whether a field is shown given the current flag values
    pub fn is_visible(&self, spec: &FieldSpec) -> bool {
        match spec.visible_when {
            Some(flag) => self.get(flag).is_some_and(FieldValue::as_flag),
            None => true,
        }
    }

    /// Visible fields with their values, in schema order
    pub fn visible_values(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> {
        self.variant
            .fields()
            .filter(|spec| self.is_visible(spec))
            .filter_map(|spec| self.values.get(spec.name).map(|v| (spec, v)))
    }
}
