//! Error types for the edge transport.
//!
//! [`TransportError`] covers the failures that can abort a request or
//! response translation. Errors surface to whoever invoked the conversion
//! and are never retried internally.

use thiserror::Error;

/// Errors raised while translating between the platform router's
/// representation and the generic request/response model.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP method has no counterpart on the other side of the
    /// translation.
    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod {
        /// Textual name of the offending method.
        method: String,
    },

    /// A path parameter declared by the route pattern was not extracted by
    /// the platform router.
    #[error("Missing required path parameter: {name}")]
    MissingRequiredPathParameter {
        /// The declared parameter name.
        name: String,
    },

    /// The same parameter name appears more than once in a route pattern.
    #[error("Duplicate path parameter in pattern: {names:?}")]
    DuplicatePathParameter {
        /// All parameter names declared by the pattern, duplicates included.
        names: Vec<String>,
    },

    /// Reading the platform's body stream failed.
    #[error("Failed to read request body: {reason}")]
    BodyRead {
        /// Description of the read failure.
        reason: String,
    },
}

impl TransportError {
    /// Create a new `UnsupportedMethod` error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create a new `MissingRequiredPathParameter` error.
    pub fn missing_path_parameter(name: impl Into<String>) -> Self {
        Self::MissingRequiredPathParameter { name: name.into() }
    }

    /// Create a new `DuplicatePathParameter` error.
    pub fn duplicate_path_parameter(names: Vec<String>) -> Self {
        Self::DuplicatePathParameter { names }
    }

    /// Create a new `BodyRead` error.
    pub fn body_read(reason: impl Into<String>) -> Self {
        Self::BodyRead {
            reason: reason.into(),
        }
    }
}
