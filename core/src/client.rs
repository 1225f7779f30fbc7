//! The seam between the value model and a transport engine.
//!
//! # Design
//! One capability: execute a [`Request`], return a [`Response`] or a
//! [`TransportError`]. How request fields map onto an engine's wire
//! representation, and engine responses back onto [`Response`], is
//! entirely the adapter's business. Transport failures pass through to
//! the caller unretried and unswallowed — retry and backoff policy
//! belongs to the engine or the caller, never to this layer.
//!
//! Resource release is scoped to the value: each client owns its engine
//! resources (connection pools and the like) independently and releases
//! them on `Drop`, so dropping one client never affects another.

use crate::error::TransportError;
use crate::request::Request;
use crate::response::Response;

/// A backend that can perform the network round-trip for a [`Request`].
///
/// `execute` may block the calling thread for the duration of the I/O; the
/// value model itself is immutable and safe to share across threads while
/// that happens.
pub trait HttpClient {
    fn execute(&self, request: &Request) -> Result<Response, TransportError>;
}
