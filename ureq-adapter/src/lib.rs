//! [`HttpClient`] adapter over the blocking ureq agent.
//!
//! # Design
//! Pure field mapping: the request's method token, URL, headers and body go
//! onto a `ureq::Request`; the engine's status, headers and decoded body
//! come back as a [`Response`]. 4xx/5xx statuses are data here, not errors
//! (`ureq::Error::Status` is unwrapped back into a response); only genuine
//! transport failures become [`TransportError`]. Connection pooling, TLS,
//! and redirect handling stay with the agent, which releases its resources
//! on drop.
//!
//! ureq's `set` replaces repeated header names rather than appending, so
//! outbound headers are sent as one line per distinct name carrying the
//! model's comma-joined value — the same combination RFC 2616 4.2
//! prescribes for repeated fields.

use log::debug;
use thinwire_core::{Header, Headers, HttpClient, Request, Response, TransportError};

/// A [`HttpClient`] backed by a `ureq::Agent`.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> UreqClient {
        UreqClient {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Wrap a preconfigured agent (timeouts, proxy, TLS choices are the
    /// caller's business).
    pub fn with_agent(agent: ureq::Agent) -> UreqClient {
        UreqClient { agent }
    }
}

impl Default for UreqClient {
    fn default() -> UreqClient {
        UreqClient::new()
    }
}

impl HttpClient for UreqClient {
    fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        debug!("executing {} {}", request.method().name(), request.url());
        let mut ureq_request = self
            .agent
            .request_url(request.method().name(), request.url());
        for (name, value) in combined_header_lines(request.headers()) {
            ureq_request = ureq_request.set(name, &value);
        }

        let result = if request.method().has_body() {
            ureq_request.send_string(request.body())
        } else {
            ureq_request.call()
        };

        match result {
            Ok(response) => adapt_response(response),
            Err(ureq::Error::Status(_, response)) => adapt_response(response),
            Err(err) => Err(TransportError::new(err.to_string())),
        }
    }
}

/// One (name, combined value) line per distinct header name, in first
/// appearance order.
fn combined_header_lines(headers: &Headers) -> Vec<(&str, String)> {
    let mut lines: Vec<(&str, String)> = Vec::new();
    for header in headers {
        if lines.iter().any(|(name, _)| *name == header.name) {
            continue;
        }
        lines.push((&header.name, headers.value(&header.name)));
    }
    lines
}

fn adapt_response(response: ureq::Response) -> Result<Response, TransportError> {
    let status = response.status();
    let mut entries = Vec::new();
    for name in response.headers_names() {
        for value in response.all(&name) {
            entries.push(Header::new(name.as_str(), value));
        }
    }
    let body = response
        .into_string()
        .map_err(|err| TransportError::new(err.to_string()))?;
    Ok(Response::new(Headers::new(entries), status, body))
}
