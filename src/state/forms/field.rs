//! Form field value objects

use serde_json::Value;

/// The kind of value a field holds, fixed by the variant schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Number,
    Flag,
    Choice,
    MultiChoice,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
    Flag(bool),
    Choice(Option<String>),
    Set(Vec<String>),
}

impl FieldValue {
    /// Empty value for a given kind
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Multiline => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Choice => FieldValue::Choice(None),
            FieldKind::MultiChoice => FieldValue::Set(Vec::new()),
        }
    }

    /// Whether this value can be stored in a field of `kind`
    pub fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text | FieldKind::Multiline)
                | (FieldValue::Number(_), FieldKind::Number)
                | (FieldValue::Flag(_), FieldKind::Flag)
                | (FieldValue::Choice(_), FieldKind::Choice)
                | (FieldValue::Set(_), FieldKind::MultiChoice)
        )
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Choice(Some(s)) => s,
            _ => "",
        }
    }

    pub fn as_number(&self) -> u32 {
        match self {
            FieldValue::Number(n) => *n,
            _ => 0,
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(c) => c.as_deref(),
            _ => None,
        }
    }

    pub fn as_set(&self) -> &[String] {
        match self {
            FieldValue::Set(items) => items,
            _ => &[],
        }
    }

    /// True when nothing has been entered or chosen
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => *n == 0,
            FieldValue::Flag(_) => false,
            FieldValue::Choice(c) => c.is_none(),
            FieldValue::Set(items) => items.is_empty(),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match self {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(n) => {
                if let Some(d) = c.to_digit(10) {
                    *n = n.saturating_mul(10).saturating_add(d);
                }
            }
            _ => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match self {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(n) => *n /= 10,
            _ => {}
        }
    }

    /// Add or remove `item` from a set value, keeping insertion order
    pub fn toggle_member(&mut self, item: &str) {
        if let FieldValue::Set(items) = self {
            if let Some(pos) = items.iter().position(|i| i == item) {
                items.remove(pos);
            } else {
                items.push(item.to_string());
            }
        }
    }

    /// Value as a multipart form field: primitives coerced to strings,
    /// collections JSON-encoded
    pub fn to_form_string(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Choice(c) => c.clone().unwrap_or_default(),
            FieldValue::Set(items) => {
                serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }

    /// Value as a JSON body member
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::from(s.as_str()),
            FieldValue::Number(n) => Value::from(*n),
            FieldValue::Flag(b) => Value::from(*b),
            FieldValue::Choice(c) => c.as_deref().map(Value::from).unwrap_or(Value::Null),
            FieldValue::Set(items) => Value::from(items.clone()),
        }
    }
}
