//! Read-only option catalogs used to populate select fields

use serde::{Deserialize, Serialize};

use super::forms::OptionSource;

/// A language/country pair offered in language selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub language_name: String,
    #[serde(default)]
    pub country_name: Option<String>,
}

impl Locale {
    pub fn is_english(&self) -> bool {
        if self.language_name.is_empty() {
            self.label.starts_with("English")
        } else {
            self.language_name.eq_ignore_ascii_case("english")
        }
    }
}

/// A plain value/label option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

/// Options fetched once per mounted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    pub locales: Vec<Locale>,
    pub document_types: Vec<OptionItem>,
    pub intended_uses: Vec<OptionItem>,
    pub languages: Vec<OptionItem>,
}

impl OptionCatalog {
    /// Options for a select as (value, label) pairs
    pub fn options(&self, source: OptionSource) -> Vec<(String, String)> {
        fn pairs(items: &[OptionItem]) -> Vec<(String, String)> {
            items
                .iter()
                .map(|o| (o.value.clone(), o.label.clone()))
                .collect()
        }

        match source {
            OptionSource::Static(values) => values
                .iter()
                .map(|v| (v.to_string(), v.to_string()))
                .collect(),
            OptionSource::Locales => self
                .locales
                .iter()
                .map(|l| (l.value.clone(), l.label.clone()))
                .collect(),
            OptionSource::DocumentTypes => pairs(&self.document_types),
            OptionSource::IntendedUses => pairs(&self.intended_uses),
            OptionSource::Languages => pairs(&self.languages),
        }
    }

    /// Display label for a stored value, falling back to the value itself
    pub fn label_for(&self, source: OptionSource, value: &str) -> String {
        self.options(source)
            .into_iter()
            .find(|(v, _)| v == value)
            .map(|(_, label)| label)
            .unwrap_or_else(|| value.to_string())
    }

    /// Locale matching a stored value or its label
    pub fn find_locale(&self, value: &str) -> Option<&Locale> {
        self.locales
            .iter()
            .find(|l| l.value == value || l.label == value)
    }

    /// First locale whose language is English
    pub fn first_english_locale(&self) -> Option<&Locale> {
        self.locales.iter().find(|l| l.is_english())
    }
}
