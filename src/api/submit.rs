//! Sending a completed form session

use tracing::{info, instrument, warn};

use super::payload::SubmissionPayload;
use super::traits::QuoteApiTrait;

/// POST one snapshot and map the result to what the user is shown.
/// No retry is attempted on failure.
#[instrument(skip_all, fields(variant = ?payload.variant, files = payload.files.len()))]
pub async fn send_submission(
    api: &dyn QuoteApiTrait,
    payload: SubmissionPayload,
) -> Result<(), String> {
    match api.submit_quote(payload).await {
        Ok(()) => {
            info!("quote request submitted");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "quote request failed");
            Err(e.user_message())
        }
    }
}
