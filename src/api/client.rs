//! HTTP client for the Cethos quote API
//!
//! Fetches option catalogs and posts quote requests to the same routes the
//! marketing site uses.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use super::payload::SubmissionPayload;
use super::traits::QuoteApiTrait;
use crate::state::{BodyFormat, Locale, OptionItem};

/// User-Agent sent with every request
const USER_AGENT: &str = concat!("cethos-quote/", env!("CARGO_PKG_VERSION"));

/// Body returned by the submission routes
#[derive(Debug, Default, Deserialize)]
struct SubmitResponse {
    success: Option<bool>,
    error: Option<String>,
}

/// Client for the quote API
#[derive(Debug, Clone)]
pub struct HttpQuoteApi {
    client: Client,
    base_url: String,
}

impl HttpQuoteApi {
    /// Create a client for `base_url`. No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a catalog route and pull the array stored under `key`.
    /// A missing key is an empty catalog, not an error.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                message: None,
            });
        }

        let body: Value = response.json().await.map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let Some(items) = body.get(key) else {
            debug!(%url, key, "catalog key missing, treating as empty");
            return Ok(Vec::new());
        };

        serde_json::from_value(items.clone()).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }

    async fn multipart_body(payload: &SubmissionPayload) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in payload.form_fields() {
            form = form.text(name, value);
        }

        for file in &payload.files {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|source| ApiError::Attachment {
                    name: file.name.clone(),
                    source,
                })?;
            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| ApiError::Attachment {
                    name: file.name.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
                })?;
            form = form.part("files", part);
        }

        Ok(form)
    }

    /// Map a submission response to success or an error carrying the
    /// server's reason
    async fn read_submit_response(url: String, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body: SubmitResponse = serde_json::from_str(&text).unwrap_or_default();

        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                message: body.error,
            });
        }

        match (body.success, body.error) {
            (Some(false), error) => Err(ApiError::Rejected(error.unwrap_or_default())),
            (None, Some(error)) => Err(ApiError::Rejected(error)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl QuoteApiTrait for HttpQuoteApi {
    async fn fetch_locales(&self) -> Result<Vec<Locale>, ApiError> {
        self.fetch_list("/api/locales", "locales").await
    }

    async fn fetch_document_types(&self) -> Result<Vec<OptionItem>, ApiError> {
        self.fetch_list("/api/document-types", "documentTypes").await
    }

    async fn fetch_intended_uses(&self) -> Result<Vec<OptionItem>, ApiError> {
        self.fetch_list("/api/intended-uses", "intendedUses").await
    }

    async fn fetch_languages(&self) -> Result<Vec<OptionItem>, ApiError> {
        self.fetch_list("/api/languages", "languages").await
    }

    async fn submit_quote(&self, payload: SubmissionPayload) -> Result<(), ApiError> {
        let url = self.url(payload.variant.endpoint());
        let request = self.client.post(&url);

        let request = match payload.variant.body_format() {
            BodyFormat::Multipart => request.multipart(Self::multipart_body(&payload).await?),
            BodyFormat::Json => request.json(&payload.to_json()),
        };

        debug!(%url, files = payload.files.len(), "posting quote request");
        let response = request.send().await.map_err(|e| ApiError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        Self::read_submit_response(url, response).await
    }
}
