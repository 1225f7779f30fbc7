//! Media type and content type value wrappers.

use std::borrow::Cow;
use std::fmt;

/// An HTTP media type name such as `application/json`, without charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    name: Cow<'static, str>,
}

impl MediaType {
    pub const APPLICATION_JSON: MediaType = MediaType::known("application/json");
    pub const APPLICATION_XML: MediaType = MediaType::known("application/xml");
    pub const TEXT_PLAIN: MediaType = MediaType::known("text/plain");

    const fn known(name: &'static str) -> MediaType {
        MediaType {
            name: Cow::Borrowed(name),
        }
    }

    pub fn new(name: impl Into<String>) -> MediaType {
        MediaType {
            name: Cow::Owned(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A media type paired with a character-encoding name, as carried by the
/// Content-Type header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub media_type: MediaType,
    pub charset: String,
}

impl ContentType {
    pub fn new(media_type: MediaType, charset: impl Into<String>) -> ContentType {
        ContentType {
            media_type,
            charset: charset.into(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; charset={}", self.media_type, self.charset)
    }
}
