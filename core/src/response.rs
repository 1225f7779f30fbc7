//! The HTTP response value produced by executing a request.

use std::fmt;

use crate::headers::Headers;

/// An immutable HTTP response: status code, body string and headers.
///
/// Adapters construct one from whatever their engine returned, preserving
/// the engine's header-name casing and per-name value ordering. The body
/// is decoded per the response's own charset, defaulting to UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    headers: Headers,
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(headers: Headers, status: u16, body: impl Into<String>) -> Response {
        Response {
            headers,
            status,
            body: body.into(),
        }
    }

    /// The combined value of the header `name`, empty string if absent.
    pub fn header(&self, name: &str) -> String {
        self.headers.value(name)
    }

    /// The raw ordered values of the header `name`, empty slice if absent.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers.values(name)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
