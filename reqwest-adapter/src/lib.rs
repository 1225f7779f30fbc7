//! [`HttpClient`] adapter over `reqwest::blocking`.
//!
//! # Design
//! Pure field mapping, like the ureq adapter: method token, URL, the full
//! ordered header list (repeated names appended, not collapsed; reqwest's
//! `HeaderMap` keeps them) and the body, encoded per its declared charset,
//! go out; status, headers in engine order, and the charset-decoded body
//! (`text()`, UTF-8 default) come back.
//! reqwest already reports 4xx/5xx as data, so only transport failures map
//! to [`TransportError`]. The wrapped client drops its connection pool when
//! this value is dropped.

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thinwire_core::{header_name, Header, Headers, HttpClient, Request, Response, TransportError};

/// A [`HttpClient`] backed by a `reqwest::blocking::Client`.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> ReqwestClient {
        ReqwestClient {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Wrap a preconfigured client (timeouts, proxy, TLS choices are the
    /// caller's business).
    pub fn with_client(client: reqwest::blocking::Client) -> ReqwestClient {
        ReqwestClient { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> ReqwestClient {
        ReqwestClient::new()
    }
}

impl HttpClient for ReqwestClient {
    fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        debug!("executing {} {}", request.method().name(), request.url());
        let method = reqwest::Method::from_bytes(request.method().name().as_bytes())
            .map_err(|err| TransportError::new(err.to_string()))?;

        let mut builder = self
            .client
            .request(method, request.url().clone())
            .headers(adapt_headers(request.headers())?);
        if request.method().has_body() {
            builder = builder.body(encode_body(request));
        }

        let response = builder
            .send()
            .map_err(|err| TransportError::new(err.to_string()))?;

        let status = response.status().as_u16();
        let entries: Vec<Header> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                Header::new(
                    name.as_str(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .map_err(|err| TransportError::new(err.to_string()))?;
        Ok(Response::new(Headers::new(entries), status, body))
    }
}

/// The outbound body bytes, encoded per the charset declared in the
/// request's Content-Type header. Absent or unknown charsets fall back to
/// UTF-8.
fn encode_body(request: &Request) -> Vec<u8> {
    let content_type = request.header(header_name::CONTENT_TYPE);
    let encoding = charset_label(&content_type)
        .and_then(|label| encoding_rs::Encoding::for_label(label.as_bytes()))
        .unwrap_or(encoding_rs::UTF_8);
    encoding.encode(request.body()).0.into_owned()
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').map(str::trim).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.eq_ignore_ascii_case("charset").then_some(value.trim())
    })
}

fn adapt_headers(headers: &Headers) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    for header in headers {
        let name = HeaderName::from_bytes(header.name.as_bytes())
            .map_err(|err| TransportError::new(err.to_string()))?;
        let value = HeaderValue::from_str(&header.value)
            .map_err(|err| TransportError::new(err.to_string()))?;
        map.append(name, value);
    }
    Ok(map)
}
