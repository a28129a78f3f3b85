//! Form domain layer
//!
//! One schema-driven wizard engine shared by every quote form:
//! - `schema`: declarative steps and fields per variant
//! - `store`: typed field record built from a schema
//! - `validator`: per-step rules
//! - `files`: attachment staging
//! - `session`: step controller and submission state

mod field;
mod files;
mod schema;
mod session;
mod store;
mod validator;

pub use field::{FieldKind, FieldValue};
pub use files::{
    format_size, FileCandidate, FileRejection, FileStager, StagedFile, DOCUMENT_MIME_TYPES,
    MAX_FILE_SIZE, MEDIA_MIME_TYPES,
};
pub use schema::{
    Attachments, BodyFormat, CatalogKind, FieldSpec, FormVariant, OptionSource, Rule, StepSpec,
};
pub use session::{FormSession, SubmissionState};
pub use store::{FieldStore, SessionError};
pub use validator::{first_invalid_step, validate_step, ErrorMap, FILES_FIELD};
