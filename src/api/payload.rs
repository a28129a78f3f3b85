//! Serialization of a form session into a submission body

use serde_json::{Map, Value};

use crate::state::{FieldValue, FormSession, FormVariant, StagedFile};

/// Snapshot of everything a quote request sends
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    pub variant: FormVariant,
    /// Visible fields in schema order
    pub fields: Vec<(&'static str, FieldValue)>,
    pub files: Vec<StagedFile>,
    /// RFC 3339 time the request was assembled
    pub submitted_at: String,
}

impl SubmissionPayload {
    pub fn from_session(session: &FormSession) -> Self {
        let fields = session
            .fields()
            .visible_values()
            .map(|(spec, value)| (spec.name, value.clone()))
            .collect();

        Self {
            variant: session.variant(),
            fields,
            files: session.files().to_vec(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Text parts for a multipart body
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut parts: Vec<(String, String)> = self
            .fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_form_string()))
            .collect();
        parts.push(("submittedAt".to_string(), self.submitted_at.clone()));
        parts
    }

    /// JSON body; attachments are described by name, size and type
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        for (name, value) in &self.fields {
            body.insert(name.to_string(), value.to_json());
        }
        let files: Vec<Value> = self
            .files
            .iter()
            .map(|f| {
                serde_json::json!({
                    "name": f.name,
                    "size": f.size,
                    "type": f.mime_type,
                })
            })
            .collect();
        body.insert("files".to_string(), Value::Array(files));
        body.insert(
            "submittedAt".to_string(),
            Value::String(self.submitted_at.clone()),
        );
        Value::Object(body)
    }
}
