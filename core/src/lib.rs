//! Backend-agnostic HTTP client abstraction.
//!
//! # Overview
//! A common [`Request`]/[`Response`]/[`Headers`]/[`Method`] value model plus
//! the [`HttpClient`] trait that any transport engine adapter must satisfy.
//! This crate never touches the network: callers build a `Request`, hand it
//! to an `HttpClient` implementation, and get back a `Response` or a
//! [`TransportError`].
//!
//! # Design
//! - Every value type is constructed once, fully, and never mutated;
//!   "modification" produces a new instance via [`Request::modify`].
//! - Validation happens once, at [`RequestBuilder::build`], so intermediate
//!   builder states may be temporarily inconsistent without error.
//! - Header lookup is total: absent names return an empty string / empty
//!   slice rather than an error.
//! - Connection management, TLS, retries, timeouts, redirects and streaming
//!   bodies are all engine concerns, out of scope here.

pub mod client;
pub mod error;
pub mod header;
pub mod headers;
pub mod media_type;
pub mod method;
pub mod request;
pub mod response;

pub use client::HttpClient;
pub use error::{BuildError, TransportError, UnknownMethodError};
pub use header::{header_name, Header};
pub use headers::Headers;
pub use media_type::{ContentType, MediaType};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use url::Url;
