//! Errors returned by the quote API

use thiserror::Error;

/// Shown when the server gives no usable reason
pub const GENERIC_SUBMIT_ERROR: &str =
    "We couldn't send your request. Please try again or give us a call.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: u16,
        message: Option<String>,
    },

    #[error("server rejected the request: {0}")]
    Rejected(String),

    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("cannot read attachment {name}: {source}")]
    Attachment {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Text suitable for the failure banner: the server's own message when
    /// it sent one, otherwise a generic fallback
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Attachment { name, .. } => {
                format!("Could not read {name}. Please remove it and attach it again.")
            }
            _ => GENERIC_SUBMIT_ERROR.to_string(),
        }
    }
}
