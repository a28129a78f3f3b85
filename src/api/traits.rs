//! Trait abstraction for the quote API to enable mocking in tests

use async_trait::async_trait;

use super::error::ApiError;
use super::payload::SubmissionPayload;
use crate::state::{Locale, OptionItem};

/// Quote API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteApiTrait: Send + Sync {
    /// `GET /api/locales`
    async fn fetch_locales(&self) -> Result<Vec<Locale>, ApiError>;

    /// `GET /api/document-types`
    async fn fetch_document_types(&self) -> Result<Vec<OptionItem>, ApiError>;

    /// `GET /api/intended-uses`
    async fn fetch_intended_uses(&self) -> Result<Vec<OptionItem>, ApiError>;

    /// `GET /api/languages`
    async fn fetch_languages(&self) -> Result<Vec<OptionItem>, ApiError>;

    /// POST a completed quote request to its variant endpoint
    async fn submit_quote(&self, payload: SubmissionPayload) -> Result<(), ApiError>;
}
