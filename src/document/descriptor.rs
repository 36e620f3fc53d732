//! Structured representation of a parsed request document.

use std::fmt;

/// HTTP method of a request document. Defaults to GET when the document
/// declares none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Head,
    Options,
    Delete,
    Put,
    Patch,
    Trace,
    Connect,
}

impl Method {
    /// Canonical upper-case token, as written on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Delete => "DELETE",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
        }
    }

    /// Parse a method token, case-insensitively. Returns `None` for
    /// anything outside the fixed enumeration.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            "DELETE" => Some(Method::Delete),
            "PUT" => Some(Method::Put),
            "PATCH" => Some(Method::Patch),
            "TRACE" => Some(Method::Trace),
            "CONNECT" => Some(Method::Connect),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request document.
///
/// Header names are kept case-sensitive as written; a repeated name keeps
/// only the last occurrence. Body lines are stored verbatim and joined
/// with `\n` only when the request is materialized for transmission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<String>,
}

impl RequestDescriptor {
    /// A descriptor can only be executed once it carries a URL.
    pub fn is_executable(&self) -> bool {
        !self.url.is_empty()
    }

    /// Exact, case-sensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Insert a header, overwriting an earlier occurrence of the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// The body lines joined with newlines, ready for transmission.
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }
}
