//! Generic HTTP response representation.

use crate::body::Body;
use crate::request::HeaderField;

/// The response a registered handler produces.
#[derive(Debug)]
pub struct Response {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Headers in the order they should be written.
    pub header_fields: Vec<HeaderField>,
    /// Response payload, absent for an empty-bodied response.
    pub body: Option<Body>,
}

impl Response {
    /// Create a response with the given status and no headers or body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            header_fields: Vec::new(),
            body: None,
        }
    }

    /// Append a header field.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_fields.push(HeaderField::new(name, value));
        self
    }

    /// Attach a body.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}
