//! HTTP method as a typed enum.
//!
//! Covers the nine RFC 9110 standard methods. A route restricted to a method
//! carries `Some(Method)`; `None` on the route means "match any method".
//! Unknown method strings are rejected when parsed, so a bad verb is a
//! startup failure rather than a surprise at dispatch time. At the server
//! level an unrecognized wire method gets `405 Method Not Allowed` before it
//! ever reaches a handler.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A known HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
        }
    }
}

/// Parses an uppercase method string (e.g. `"GET"`). Case-sensitive per
/// RFC 9110 §9.1. Anything outside the allow-list is [`Error::InvalidMethod`].
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONNECT" => Ok(Self::Connect),
            "DELETE"  => Ok(Self::Delete),
            "GET"     => Ok(Self::Get),
            "HEAD"    => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "PATCH"   => Ok(Self::Patch),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "TRACE"   => Ok(Self::Trace),
            _         => Err(Error::InvalidMethod(s.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_standard_verb() {
        for verb in [
            "CONNECT", "DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT", "TRACE",
        ] {
            let method: Method = verb.parse().unwrap();
            assert_eq!(method.as_str(), verb);
        }
    }

    #[test]
    fn rejects_unknown_verbs() {
        for bad in ["", "get", "BREW", "GETT"] {
            match bad.parse::<Method>() {
                Err(Error::InvalidMethod(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidMethod, got {other:?}"),
            }
        }
    }
}
