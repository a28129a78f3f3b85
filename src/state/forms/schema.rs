//! Declarative step/field schemas for each quote form variant

use super::field::FieldKind;
use super::files::{DOCUMENT_MIME_TYPES, MEDIA_MIME_TYPES};

/// A single validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming
    Required,
    /// Trimmed length of at least n characters
    MinLength(usize),
    /// Loose e-mail shape check
    Email,
    /// At least n ASCII digits anywhere in the value
    MinDigits(usize),
    /// A choice has been made
    Selected,
    /// Numeric lower bound
    AtLeast(u32),
    /// Multi-select has at least one entry
    NonEmptySet,
}

/// Where a choice field gets its options from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    Static(&'static [&'static str]),
    Locales,
    DocumentTypes,
    IntendedUses,
    Languages,
}

impl OptionSource {
    /// Whether the options come from the remote catalog
    pub fn is_remote(&self) -> bool {
        !matches!(self, OptionSource::Static(_))
    }
}

/// Schema entry for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub options: Option<OptionSource>,
    pub rules: &'static [(Rule, &'static str)],
    /// Name of a flag field that must be set for this field to be shown
    pub visible_when: Option<&'static str>,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            options: None,
            rules: &[],
            visible_when: None,
        }
    }

    const fn rules(mut self, rules: &'static [(Rule, &'static str)]) -> Self {
        self.rules = rules;
        self
    }

    const fn options(mut self, source: OptionSource) -> Self {
        self.options = Some(source);
        self
    }

    const fn visible_when(mut self, flag: &'static str) -> Self {
        self.visible_when = Some(flag);
        self
    }

    pub fn is_required(&self) -> bool {
        !self.rules.is_empty()
    }
}

/// How a step treats file attachments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachments {
    None,
    Optional,
    Required(&'static str),
}

/// Schema for one wizard step
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub attachments: Attachments,
}

/// Remote catalogs a variant needs at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Locales,
    DocumentTypes,
    IntendedUses,
    Languages,
}

/// Submission body encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Multipart,
    Json,
}

/// The four quote forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormVariant {
    CertifiedDocument,
    Interpretation,
    LifeSciences,
    Transcription,
}

impl FormVariant {
    pub const ALL: [FormVariant; 4] = [
        FormVariant::CertifiedDocument,
        FormVariant::Interpretation,
        FormVariant::LifeSciences,
        FormVariant::Transcription,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::CertifiedDocument => "Certified Document Translation",
            Self::Interpretation => "Interpretation",
            Self::LifeSciences => "Life Sciences Translation",
            Self::Transcription => "Transcription",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::CertifiedDocument => "Birth certificates, diplomas, immigration and legal documents",
            Self::Interpretation => "On-site, phone and video interpreters for meetings and events",
            Self::LifeSciences => "Clinical, regulatory and medical device content",
            Self::Transcription => "Audio and video transcripts, with optional translation",
        }
    }

    /// Submission endpoint path
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::CertifiedDocument => "/api/certified-quote",
            Self::Interpretation => "/api/interpretation-quote",
            Self::LifeSciences => "/api/quote",
            Self::Transcription => "/api/transcription-quote",
        }
    }

    pub fn body_format(&self) -> BodyFormat {
        match self {
            Self::Transcription => BodyFormat::Json,
            _ => BodyFormat::Multipart,
        }
    }

    pub fn catalogs(&self) -> &'static [CatalogKind] {
        match self {
            Self::CertifiedDocument => &[
                CatalogKind::Locales,
                CatalogKind::DocumentTypes,
                CatalogKind::IntendedUses,
            ],
            _ => &[CatalogKind::Languages],
        }
    }

    /// MIME types accepted by the file stager (empty when the form takes no files)
    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            Self::CertifiedDocument | Self::LifeSciences => DOCUMENT_MIME_TYPES,
            Self::Transcription => MEDIA_MIME_TYPES,
            Self::Interpretation => &[],
        }
    }

    pub fn steps(&self) -> &'static [StepSpec] {
        match self {
            Self::CertifiedDocument => CERTIFIED_STEPS,
            Self::Interpretation => INTERPRETATION_STEPS,
            Self::LifeSciences => LIFE_SCIENCES_STEPS,
            Self::Transcription => TRANSCRIPTION_STEPS,
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    /// Look up a step by 1-based number
    pub fn step(&self, number: usize) -> Option<&'static StepSpec> {
        number.checked_sub(1).and_then(|i| self.steps().get(i))
    }

    /// Every field of every step, in step order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.steps().iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.name == name)
    }
}

const FULL_NAME: FieldSpec = FieldSpec::new("fullName", "Full name", FieldKind::Text)
    .rules(&[(Rule::MinLength(2), "Please enter your full name")]);
const EMAIL: FieldSpec = FieldSpec::new("email", "Email", FieldKind::Text)
    .rules(&[(Rule::Email, "Please enter a valid email address")]);
const PHONE: FieldSpec = FieldSpec::new("phone", "Phone", FieldKind::Text)
    .rules(&[(Rule::MinDigits(10), "Please enter a valid phone number")]);
const COMPANY: FieldSpec = FieldSpec::new("company", "Company (optional)", FieldKind::Text);
const NOTES: FieldSpec = FieldSpec::new("notes", "Additional notes", FieldKind::Multiline);

const CONTACT_FIELDS: &[FieldSpec] = &[FULL_NAME, EMAIL, PHONE, COMPANY];

static CERTIFIED_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Contact Information",
        fields: CONTACT_FIELDS,
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Document Details",
        fields: &[
            FieldSpec::new("sourceLanguage", "Source language", FieldKind::Choice)
                .options(OptionSource::Locales)
                .rules(&[(Rule::Selected, "Please select the source language")]),
            FieldSpec::new("targetLanguage", "Target language", FieldKind::Choice)
                .options(OptionSource::Locales)
                .rules(&[(Rule::Selected, "Please select the target language")]),
            FieldSpec::new("documentType", "Document type", FieldKind::Choice)
                .options(OptionSource::DocumentTypes)
                .rules(&[(Rule::Selected, "Please select a document type")]),
            FieldSpec::new("intendedUse", "Intended use", FieldKind::Choice)
                .options(OptionSource::IntendedUses)
                .rules(&[(Rule::Selected, "Please select how the translation will be used")]),
            FieldSpec::new("pageCount", "Number of pages", FieldKind::Number)
                .rules(&[(Rule::AtLeast(1), "Please enter at least 1 page")]),
            FieldSpec::new("rushService", "Rush service (24h)", FieldKind::Flag),
        ],
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Upload Documents",
        fields: &[NOTES],
        attachments: Attachments::Required("Please upload at least one document"),
    },
];

static INTERPRETATION_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Contact Information",
        fields: CONTACT_FIELDS,
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Assignment",
        fields: &[
            FieldSpec::new("interpretationType", "Interpretation type", FieldKind::Choice)
                .options(OptionSource::Static(&[
                    "Consecutive",
                    "Simultaneous",
                    "Over-the-phone",
                    "Video remote",
                ]))
                .rules(&[(Rule::Selected, "Please select an interpretation type")]),
            FieldSpec::new("sourceLanguage", "Source language", FieldKind::Choice)
                .options(OptionSource::Languages)
                .rules(&[(Rule::Selected, "Please select the source language")]),
            FieldSpec::new("targetLanguages", "Target languages", FieldKind::MultiChoice)
                .options(OptionSource::Languages)
                .rules(&[(Rule::NonEmptySet, "Please select at least one target language")]),
            FieldSpec::new("participants", "Number of participants", FieldKind::Number)
                .rules(&[(Rule::AtLeast(1), "Please enter at least 1 participant")]),
        ],
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Logistics",
        fields: &[
            FieldSpec::new("eventDate", "Event date", FieldKind::Text)
                .rules(&[(Rule::Required, "Please enter the event date")]),
            FieldSpec::new("durationHours", "Duration (hours)", FieldKind::Number)
                .rules(&[(Rule::AtLeast(1), "Please enter a duration of at least 1 hour")]),
            FieldSpec::new("location", "Location or platform", FieldKind::Text)
                .rules(&[(Rule::Required, "Please enter a location or platform")]),
            NOTES,
        ],
        attachments: Attachments::None,
    },
];

static LIFE_SCIENCES_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Contact Information",
        fields: &[
            FULL_NAME,
            EMAIL,
            PHONE,
            FieldSpec::new("company", "Company", FieldKind::Text)
                .rules(&[(Rule::MinLength(2), "Please enter your company name")]),
        ],
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Project Details",
        fields: &[
            FieldSpec::new("serviceType", "Service", FieldKind::Choice)
                .options(OptionSource::Static(&[
                    "Clinical trial documents",
                    "Regulatory submissions",
                    "Medical device labeling",
                    "Pharmacovigilance",
                    "Linguistic validation",
                ]))
                .rules(&[(Rule::Selected, "Please select a service")]),
            FieldSpec::new("sourceLanguage", "Source language", FieldKind::Choice)
                .options(OptionSource::Languages)
                .rules(&[(Rule::Selected, "Please select the source language")]),
            FieldSpec::new("targetLanguages", "Target languages", FieldKind::MultiChoice)
                .options(OptionSource::Languages)
                .rules(&[(Rule::NonEmptySet, "Please select at least one target language")]),
            FieldSpec::new("wordCount", "Approximate word count", FieldKind::Number)
                .rules(&[(Rule::AtLeast(1), "Please enter an approximate word count")]),
        ],
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Files & Timeline",
        fields: &[
            FieldSpec::new("deadline", "Deadline (optional)", FieldKind::Text),
            NOTES,
        ],
        attachments: Attachments::Optional,
    },
];

static TRANSCRIPTION_STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Contact Information",
        fields: CONTACT_FIELDS,
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Media Details",
        fields: &[
            FieldSpec::new("mediaLanguage", "Spoken language", FieldKind::Choice)
                .options(OptionSource::Languages)
                .rules(&[(Rule::Selected, "Please select the spoken language")]),
            FieldSpec::new("durationMinutes", "Total duration (minutes)", FieldKind::Number)
                .rules(&[(Rule::AtLeast(1), "Please enter a duration of at least 1 minute")]),
            FieldSpec::new("transcriptType", "Transcript style", FieldKind::Choice)
                .options(OptionSource::Static(&[
                    "Clean verbatim",
                    "Full verbatim",
                    "Timestamped",
                ]))
                .rules(&[(Rule::Selected, "Please select a transcript style")]),
            FieldSpec::new("needsTranslation", "Also translate the transcript", FieldKind::Flag),
            FieldSpec::new("targetLanguages", "Translate into", FieldKind::MultiChoice)
                .options(OptionSource::Languages)
                .rules(&[(Rule::NonEmptySet, "Please select at least one target language")])
                .visible_when("needsTranslation"),
        ],
        attachments: Attachments::None,
    },
    StepSpec {
        title: "Upload Media",
        fields: &[NOTES],
        attachments: Attachments::Required("Please upload at least one audio or video file"),
    },
];
