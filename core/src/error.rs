//! Error types for the value model.
//!
//! # Design
//! Three disjoint failure classes, surfaced immediately to the direct
//! caller and never retried or logged here:
//! - [`BuildError`]: builder misuse, detected synchronously at `build()`
//!   (or at `url()` for malformed URL strings).
//! - [`UnknownMethodError`]: a method name lookup that only recognizes the
//!   RFC 2616 / RFC 5789 verbs.
//! - [`TransportError`]: anything the underlying engine reports, passed
//!   through unmodified by adapters.
//!
//! Header lookup is deliberately total and has no error type.

use std::fmt;

/// Errors reported by [`RequestBuilder`](crate::RequestBuilder).
#[derive(Debug)]
pub enum BuildError {
    /// A required field (URI, Method or Body) was never set.
    MissingField(&'static str),

    /// The method declares no body semantics but a non-empty body was set.
    BodyNotAllowed { method: String },

    /// The URL string passed to the builder could not be parsed.
    InvalidUrl(url::ParseError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField(field) => write!(f, "{field} was not set"),
            BuildError::BodyNotAllowed { method } => {
                write!(f, "method '{method}' should not have a body")
            }
            BuildError::InvalidUrl(err) => write!(f, "invalid URL: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::InvalidUrl(err) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for BuildError {
    fn from(err: url::ParseError) -> BuildError {
        BuildError::InvalidUrl(err)
    }
}

/// A method name that [`Method::from_name`](crate::Method::from_name) does
/// not recognize.
#[derive(Debug)]
pub struct UnknownMethodError {
    pub name: String,
}

impl fmt::Display for UnknownMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognised method '{}', use Method::new to say whether the method has a body",
            self.name
        )
    }
}

impl std::error::Error for UnknownMethodError {}

/// A failure reported by the underlying transport engine.
///
/// Adapters wrap whatever the engine raised (connection refused, timeout,
/// malformed response) without retrying or suppressing it. The message
/// carries the engine's own description.
#[derive(Debug)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> TransportError {
        TransportError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.message)
    }
}

impl std::error::Error for TransportError {}
