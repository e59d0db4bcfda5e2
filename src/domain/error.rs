//! Error types for memodrop.
//!
//! Two error types live here, both derived with `thiserror`:
//!
//! - [`MemoError`]: the flat outcome taxonomy of a single memo submission. It is pure
//!   data (`Clone + Eq`) so the presentation layer can map each kind to localized text
//!   (see [`crate::ui::messages`]). Its `Display` output is English and meant for logs.
//! - [`MemodropError`]: infrastructure failures outside the submission pipeline, such as
//!   reading or writing the settings file.

use thiserror::Error;

/// Failure kinds of a memo submission.
///
/// The set is exhaustive. Request building raises [`InvalidUrl`](Self::InvalidUrl),
/// [`MissingConfiguration`](Self::MissingConfiguration) and
/// [`Encoding`](Self::Encoding); the submission executor raises the rest.
///
/// # Examples
///
/// ```
/// use memodrop::MemoError;
///
/// let err = MemoError::Server(502);
/// assert_eq!(err.to_string(), "server responded with HTTP 502");
/// assert!(MemoError::InvalidUrl.is_configuration_problem());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// Server URL is missing or cannot be parsed into an absolute URL.
    #[error("invalid server URL")]
    InvalidUrl,

    /// The server rejected the access token (HTTP 401 or 403).
    #[error("unauthorized")]
    Unauthorized,

    /// Any non-2xx status that is not an authorization failure.
    #[error("server responded with HTTP {0}")]
    Server(u16),

    /// Transport-level failure or a response without an HTTP status.
    ///
    /// Carries a description of the underlying failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("failed to encode memo")]
    Encoding,

    /// The access token is empty.
    #[error("missing configuration")]
    MissingConfiguration,
}

impl MemoError {
    /// Returns `true` for errors the user can only fix by editing the settings.
    #[must_use]
    pub const fn is_configuration_problem(&self) -> bool {
        matches!(self, Self::InvalidUrl | Self::MissingConfiguration)
    }
}

/// Result of one submission: `Ok(())` on success, otherwise the failure kind.
pub type SubmissionOutcome = std::result::Result<(), MemoError>;

/// Infrastructure errors for settings storage, filesystem access and client setup.
#[derive(Debug, Error)]
pub enum MemodropError {
    /// Reading, parsing or writing the settings file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value was rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// A specialized `Result` type for memodrop infrastructure operations.
pub type Result<T> = std::result::Result<T, MemodropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_status_and_description() {
        assert_eq!(MemoError::Server(500).to_string(), "server responded with HTTP 500");
        assert_eq!(
            MemoError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }

    #[test]
    fn classifies_configuration_problems() {
        assert!(MemoError::InvalidUrl.is_configuration_problem());
        assert!(MemoError::MissingConfiguration.is_configuration_problem());
        assert!(!MemoError::Unauthorized.is_configuration_problem());
        assert!(!MemoError::Server(404).is_configuration_problem());
    }

    #[test]
    fn io_errors_convert() {
        let err: MemodropError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, MemodropError::Io(_)));
    }
}
