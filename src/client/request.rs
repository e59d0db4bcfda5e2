//! Request builder for the memo creation call.

use crate::domain::{MemoError, MemoRequest};
use reqwest::{Method, Url};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Transport-independent description of one HTTP request.
///
/// Pure data: building it performs no I/O, and any [`Transport`](super::Transport)
/// can execute it.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoHttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl MemoHttpRequest {
    /// Value of the first header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Body as UTF-8 text. Bodies built here are always valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }
}

// Keeps the bearer token out of debug logs.
impl std::fmt::Debug for MemoHttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(AUTHORIZATION) {
                    (*key, "Bearer <redacted>")
                } else {
                    (*key, value.as_str())
                }
            })
            .collect();

        f.debug_struct("MemoHttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// Builds the authenticated `POST` that creates a memo with `content`.
///
/// Checks run in order: a missing endpoint yields [`MemoError::InvalidUrl`], an empty
/// token [`MemoError::MissingConfiguration`]. Empty content is accepted; rejecting it
/// is the caller's decision.
///
/// # Errors
///
/// Returns [`MemoError::InvalidUrl`], [`MemoError::MissingConfiguration`] or
/// [`MemoError::Encoding`] as described above.
///
/// # Examples
///
/// ```
/// use memodrop::client::build_request;
/// use reqwest::Url;
///
/// let url = Url::parse("https://memos.example.com/api/v1/memos").ok();
/// let request = build_request(url.as_ref(), "abc", "hello")?;
///
/// assert_eq!(request.header("Authorization"), Some("Bearer abc"));
/// assert_eq!(request.body_text(), r#"{"content":"hello"}"#);
/// # Ok::<(), memodrop::MemoError>(())
/// ```
pub fn build_request(
    endpoint: Option<&Url>,
    access_token: &str,
    content: &str,
) -> Result<MemoHttpRequest, MemoError> {
    let url = endpoint.ok_or(MemoError::InvalidUrl)?;

    if access_token.is_empty() {
        return Err(MemoError::MissingConfiguration);
    }

    let body = serde_json::to_vec(&MemoRequest::new(content)).map_err(|e| {
        tracing::warn!(error = %e, "failed to encode memo body");
        MemoError::Encoding
    })?;

    Ok(MemoHttpRequest {
        method: Method::POST,
        url: url.clone(),
        headers: vec![
            (AUTHORIZATION, format!("Bearer {access_token}")),
            (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
        ],
        body,
    })
}
