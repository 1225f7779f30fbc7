//! HTTP method tokens per RFC 2616 and RFC 5789.
//!
//! # Design
//! A `Method` is a (name, has-body) value, not a closed enum: the nine
//! known verbs are associated constants, and [`Method::new`] constructs ad
//! hoc verbs for anything else. Looking a name up with
//! [`Method::from_name`] only succeeds for the known verbs, since the
//! model cannot guess whether an unknown verb carries a body.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownMethodError;

/// An HTTP method token and whether it conventionally carries a body.
///
/// Two methods are equal iff both the name and the has-body flag match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    name: Cow<'static, str>,
    has_body: bool,
}

impl Method {
    pub const OPTIONS: Method = Method::known("OPTIONS", false);
    pub const GET: Method = Method::known("GET", false);
    pub const HEAD: Method = Method::known("HEAD", false);
    pub const POST: Method = Method::known("POST", true);
    pub const PUT: Method = Method::known("PUT", true);
    pub const DELETE: Method = Method::known("DELETE", false);
    pub const TRACE: Method = Method::known("TRACE", false);
    pub const CONNECT: Method = Method::known("CONNECT", false);
    pub const PATCH: Method = Method::known("PATCH", true);

    const fn known(name: &'static str, has_body: bool) -> Method {
        Method {
            name: Cow::Borrowed(name),
            has_body,
        }
    }

    /// Construct an ad hoc method, stating explicitly whether it has a body.
    pub fn new(name: impl Into<String>, has_body: bool) -> Method {
        Method {
            name: Cow::Owned(name.into()),
            has_body,
        }
    }

    /// Look up one of the known method constants by name.
    ///
    /// Fails for anything outside the RFC 2616 / RFC 5789 verbs; use
    /// [`Method::new`] for custom verbs.
    pub fn from_name(name: &str) -> Result<Method, UnknownMethodError> {
        match name {
            "OPTIONS" => Ok(Method::OPTIONS),
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "TRACE" => Ok(Method::TRACE),
            "CONNECT" => Ok(Method::CONNECT),
            "PATCH" => Ok(Method::PATCH),
            _ => Err(UnknownMethodError {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_body(&self) -> bool {
        self.has_body
    }
}

impl FromStr for Method {
    type Err = UnknownMethodError;

    fn from_str(name: &str) -> Result<Method, UnknownMethodError> {
        Method::from_name(name)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
