//! Wire payloads exchanged with the Memos API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/memos`.
///
/// Built fresh for every submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoRequest {
    pub content: String,
}

impl MemoRequest {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Response body of a created memo.
///
/// Only read for diagnostics; a successful status is enough to report success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemoResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
}

impl MemoResponse {
    /// Parses a response body, returning `None` if it is not the expected JSON shape.
    #[must_use]
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_content_object() {
        let json = serde_json::to_string(&MemoRequest::new("hello")).unwrap();
        assert_eq!(json, r#"{"content":"hello"}"#);
    }

    #[test]
    fn response_tolerates_missing_and_null_fields() {
        let full = MemoResponse::parse(br#"{"id": 7, "content": "hi"}"#).unwrap();
        assert_eq!(full.id, Some(7));
        assert_eq!(full.content.as_deref(), Some("hi"));

        let sparse = MemoResponse::parse(br#"{"id": null, "name": "memos/7"}"#).unwrap();
        assert_eq!(sparse, MemoResponse::default());

        assert!(MemoResponse::parse(b"<html>").is_none());
    }
}
