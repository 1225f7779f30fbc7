//! The HTTP request value and its builder.
//!
//! # Design
//! `Request` is immutable; the only way to construct one is through
//! [`RequestBuilder`], which validates once, at [`RequestBuilder::build`].
//! Intermediate builder states may be temporarily inconsistent (body set
//! before method, say) without error — that matches a staged-construction
//! workflow. Any failure is deterministic and terminal for that `build()`
//! call: the caller fixes inputs and rebuilds.
//!
//! The one cross-field invariant lives here: a method without body
//! semantics must not carry a non-empty body.

use url::Url;

use crate::error::BuildError;
use crate::header::{header_name, Header};
use crate::headers::Headers;
use crate::media_type::{ContentType, MediaType};
use crate::method::Method;

/// An immutable HTTP request: target URL, method, body and headers.
///
/// Invariant, enforced at construction: if the method has no body
/// semantics, the body is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: Url,
    method: Method,
    body: String,
    headers: Headers,
}

impl Request {
    /// Start building a request with no fields set.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Start building a GET request (body already cleared to empty).
    pub fn get() -> RequestBuilder {
        RequestBuilder::new().method(Method::GET)
    }

    /// Start building a POST request.
    pub fn post() -> RequestBuilder {
        RequestBuilder::new().method(Method::POST)
    }

    /// Seed a new builder with this request's fields.
    pub fn modify(&self) -> RequestBuilder {
        RequestBuilder {
            url: Some(self.url.clone()),
            method: Some(self.method.clone()),
            body: Some(self.body.clone()),
            headers: self.headers.iter().cloned().collect(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The combined value of the header `name`, empty string if absent.
    pub fn header(&self, name: &str) -> String {
        self.headers.value(name)
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} HTTP/1.1\n{}\n{}",
            self.method, self.url, self.headers, self.body
        )
    }
}

/// Mutable staging state that accumulates fields and produces a [`Request`].
///
/// Consuming fluent style: each call takes and returns the builder. Not
/// thread-safe by design — confine it to one thread/task until `build()`.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    url: Option<Url>,
    method: Option<Method>,
    body: Option<String>,
    headers: Vec<Header>,
}

impl RequestBuilder {
    pub fn new() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Set the method. Methods without body semantics also clear the body
    /// to empty and drop any Content-Type header, so `Request::get()`
    /// builds without an explicit [`no_body`](Self::no_body) call.
    pub fn method(mut self, method: Method) -> RequestBuilder {
        let bodyless = !method.has_body();
        self.method = Some(method);
        if bodyless {
            self.no_body()
        } else {
            self
        }
    }

    /// Parse and set the target URL, failing immediately on malformed input.
    pub fn url(self, url: &str) -> Result<RequestBuilder, BuildError> {
        Ok(self.url_parsed(Url::parse(url)?))
    }

    /// Set an already-parsed target URL.
    pub fn url_parsed(mut self, url: Url) -> RequestBuilder {
        self.url = Some(url);
        self
    }

    /// Set the body and append a Content-Type header for `media_type`.
    pub fn body(self, body: impl Into<String>, media_type: MediaType) -> RequestBuilder {
        self.raw_body(body)
            .header(header_name::CONTENT_TYPE, media_type.to_string())
    }

    /// Set the body and append a Content-Type header for `media_type` with
    /// an explicit charset.
    pub fn body_with_charset(
        self,
        body: impl Into<String>,
        media_type: MediaType,
        charset: &str,
    ) -> RequestBuilder {
        let content_type = ContentType::new(media_type, charset);
        self.raw_body(body)
            .header(header_name::CONTENT_TYPE, content_type.to_string())
    }

    /// Clear the body to empty and remove any Content-Type header. Used for
    /// verbs with no body semantics.
    pub fn no_body(mut self) -> RequestBuilder {
        self.headers
            .retain(|header| header.name != header_name::CONTENT_TYPE);
        self.raw_body("")
    }

    fn raw_body(mut self, body: impl Into<String>) -> RequestBuilder {
        self.body = Some(body.into());
        self
    }

    /// Append a header. Never deduplicates: repeated calls with the same
    /// name produce repeated entries, consistent with [`Headers`] grouping.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> RequestBuilder {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Append every entry of an existing collection.
    pub fn headers(mut self, headers: &Headers) -> RequestBuilder {
        self.headers.extend(headers.iter().cloned());
        self
    }

    /// Validate the accumulated fields and produce an immutable [`Request`].
    ///
    /// Required fields are checked in order URI, Method, Body; the first
    /// one missing is named in the error. Then the body/method invariant is
    /// checked. No partial `Request` is ever returned.
    pub fn build(self) -> Result<Request, BuildError> {
        let url = self.url.ok_or(BuildError::MissingField("URI"))?;
        let method = self.method.ok_or(BuildError::MissingField("Method"))?;
        let body = self.body.ok_or(BuildError::MissingField("Body"))?;
        if !method.has_body() && !body.is_empty() {
            return Err(BuildError::BodyNotAllowed {
                method: method.name().to_string(),
            });
        }
        Ok(Request {
            url,
            method,
            body,
            headers: Headers::new(self.headers),
        })
    }
}
