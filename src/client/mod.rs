//! Request building and submission against the Memos API.
//!
//! # Modules
//!
//! - [`request`]: Builds the authenticated `POST /api/v1/memos` descriptor
//! - [`transport`]: The [`Transport`] seam and its `reqwest` implementation
//! - [`executor`]: [`MemoService`], which runs a request and classifies the status
//!
//! # Flow
//!
//! ```text
//! Settings + final content → build_request → MemoHttpRequest
//!                                                  │
//!                               Transport::execute ▼
//!                                         TransportResponse → classify_status → SubmissionOutcome
//! ```

pub mod executor;
pub mod request;
pub mod transport;

pub use executor::{classify_status, MemoService};
pub use request::{build_request, MemoHttpRequest};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
