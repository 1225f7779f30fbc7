//! A single HTTP message-header field.

use std::fmt;

/// An immutable (name, value) header pair.
///
/// A missing value is represented as the empty string, never as an option:
/// `"name: "` on the wire round-trips as `value == ""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Header {
        Header {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// The RFC 2616 section 14 header field names.
///
/// A convenience vocabulary, not a closed set: [`Headers`](crate::Headers)
/// accepts any name string, and matching is case-sensitive on the stored
/// strings.
pub mod header_name {
    pub const ACCEPT: &str = "Accept";
    pub const ACCEPT_CHARSET: &str = "Accept-Charset";
    pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
    pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
    pub const ACCEPT_RANGES: &str = "Accept-Ranges";
    pub const AGE: &str = "Age";
    pub const ALLOW: &str = "Allow";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const CONNECTION: &str = "Connection";
    pub const CONTENT_ENCODING: &str = "Content-Encoding";
    pub const CONTENT_LANGUAGE: &str = "Content-Language";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_LOCATION: &str = "Content-Location";
    pub const CONTENT_MD5: &str = "Content-MD5";
    pub const CONTENT_RANGE: &str = "Content-Range";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const DATE: &str = "Date";
    pub const ETAG: &str = "ETag";
    pub const EXPECT: &str = "Expect";
    pub const EXPIRES: &str = "Expires";
    pub const FROM: &str = "From";
    pub const HOST: &str = "Host";
    pub const IF_MATCH: &str = "If-Match";
    pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
    pub const IF_NONE_MATCH: &str = "If-None-Match";
    pub const IF_RANGE: &str = "If-Range";
    pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
    pub const LAST_MODIFIED: &str = "Last-Modified";
    pub const LOCATION: &str = "Location";
    pub const MAX_FORWARDS: &str = "Max-Forwards";
    pub const PRAGMA: &str = "Pragma";
    pub const PROXY_AUTHENTICATE: &str = "Proxy-Authenticate";
    pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";
    pub const RANGE: &str = "Range";
    pub const REFERER: &str = "Referer";
    pub const RETRY_AFTER: &str = "Retry-After";
    pub const SERVER: &str = "Server";
    pub const TE: &str = "TE";
    pub const TRAILER: &str = "Trailer";
    pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
    pub const UPGRADE: &str = "Upgrade";
    pub const USER_AGENT: &str = "User-Agent";
    pub const VARY: &str = "Vary";
    pub const VIA: &str = "Via";
    pub const WARNING: &str = "Warning";
    pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
}
