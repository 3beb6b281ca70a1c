//! Generic HTTP request representation.

use crate::body::Body;
use crate::method::Method;

/// A single header entry, ordered as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    /// Header name as transmitted.
    pub name: String,
    /// Header value as transmitted.
    pub value: String,
}

impl HeaderField {
    /// Create a new header field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The request handed to a registered handler.
#[derive(Debug)]
pub struct Request {
    /// HTTP method of the exchange.
    pub method: Method,
    /// Request path, taken verbatim from the incoming URL.
    pub path: String,
    /// Raw query string, if the URL carried one.
    pub query: Option<String>,
    /// Headers in the order the platform delivered them.
    pub header_fields: Vec<HeaderField>,
    /// Materialized request body, absent when nothing was sent.
    pub body: Option<Body>,
}

impl Request {
    /// Create a request with no query, headers, or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            header_fields: Vec::new(),
            body: None,
        }
    }

    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request() {
        let request = Request::new(Method::Get, "/tasks");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/tasks");
        assert!(request.query.is_none());
        assert!(request.header_fields.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut request = Request::new(Method::Post, "/tasks");
        request
            .header_fields
            .push(HeaderField::new("Content-Type", "application/json"));

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.header("x-missing").is_none());
    }

    #[test]
    fn test_header_lookup_returns_first_match() {
        let mut request = Request::new(Method::Get, "/");
        request.header_fields.push(HeaderField::new("accept", "a"));
        request.header_fields.push(HeaderField::new("Accept", "b"));

        assert_eq!(request.header("accept"), Some("a"));
    }
}
