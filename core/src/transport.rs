//! The I/O seam between the deterministic core and the host.
//!
//! The resource clients only build and parse; something still has to carry an
//! [`HttpRequest`] to a server and bring an [`HttpResponse`] back. That
//! something is the host's [`Transport`] implementation — a ureq agent in the
//! integration tests, a scripted stub in unit tests. The page workflows take
//! `&dyn Transport` so they stay oblivious to which one is behind the seam.

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip on behalf of the core.
///
/// Implementations must return `Ok` for any response the server produced,
/// including 4xx/5xx — status interpretation belongs to the parse methods.
/// `Err` is reserved for failures where no response exists (connection
/// refused, timeout, DNS).
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A transport-level failure: the round-trip never produced a response.
#[derive(Debug, Clone, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);
