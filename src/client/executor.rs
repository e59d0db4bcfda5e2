//! Submission executor: runs a request and classifies the outcome.

use super::request::{build_request, MemoHttpRequest};
use super::transport::Transport;
use crate::domain::{MemoError, MemoResponse, Settings, SubmissionOutcome};
use std::sync::Arc;
use tracing::Instrument;

/// Description used when the transport produced no HTTP status.
const INVALID_RESPONSE: &str = "invalid response";

/// Maps an HTTP status to a submission outcome.
///
/// 2xx is success, 401 and 403 are authorization failures, everything else is a
/// server error carrying the status.
///
/// # Examples
///
/// ```
/// use memodrop::client::classify_status;
/// use memodrop::MemoError;
///
/// assert_eq!(classify_status(201), Ok(()));
/// assert_eq!(classify_status(403), Err(MemoError::Unauthorized));
/// assert_eq!(classify_status(302), Err(MemoError::Server(302)));
/// ```
pub fn classify_status(status: u16) -> SubmissionOutcome {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(MemoError::Unauthorized),
        other => Err(MemoError::Server(other)),
    }
}

/// Sends memos through an injected [`Transport`].
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct MemoService {
    transport: Arc<dyn Transport>,
}

impl MemoService {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Builds the request for `content` from `settings` and submits it.
    ///
    /// `content` is sent as given; tag insertion is the caller's job.
    pub async fn create_memo(&self, settings: &Settings, content: &str) -> SubmissionOutcome {
        let endpoint = settings.endpoint_url();
        let request = build_request(endpoint.as_ref(), &settings.access_token, content)?;
        self.submit(&request).await
    }

    /// Executes `request` once and classifies the result.
    pub async fn submit(&self, request: &MemoHttpRequest) -> SubmissionOutcome {
        let span = tracing::info_span!(
            "submit_memo",
            endpoint = %request.url,
            body_len = request.body.len()
        );
        self.execute_and_classify(request).instrument(span).await
    }

    async fn execute_and_classify(&self, request: &MemoHttpRequest) -> SubmissionOutcome {
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "memo submission failed in transport");
                return Err(MemoError::Network(e.0));
            }
        };

        let Some(status) = response.status else {
            tracing::warn!("transport returned no HTTP status");
            return Err(MemoError::Network(INVALID_RESPONSE.to_string()));
        };

        let outcome = classify_status(status);
        match &outcome {
            Ok(()) => {
                let memo_id = MemoResponse::parse(&response.body).and_then(|memo| memo.id);
                tracing::info!(status, memo_id = ?memo_id, "memo created");
            }
            Err(e) => tracing::warn!(status, error = %e, "memo rejected by server"),
        }
        outcome
    }
}

impl std::fmt::Debug for MemoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoService").finish_non_exhaustive()
    }
}
