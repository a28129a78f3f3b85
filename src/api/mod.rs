//! Quote API client module for HTTP communication

mod client;
mod error;
mod loader;
mod payload;
mod submit;
mod traits;

pub use client::HttpQuoteApi;
pub use error::{ApiError, GENERIC_SUBMIT_ERROR};
pub use loader::{load_catalog, CatalogLoad};
pub use payload::SubmissionPayload;
pub use submit::send_submission;
pub use traits::QuoteApiTrait;

#[cfg(test)]
pub use traits::MockQuoteApiTrait;
