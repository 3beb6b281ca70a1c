//! HTTP method translation between the platform router and the generic
//! model.
//!
//! Both directions are pure functions over the seven supported methods;
//! anything else fails with the original method's textual name.

use axum::http;
use openapi_edge_core::Method;

use crate::error::TransportError;

/// Convert a generic method into the platform representation.
///
/// # Errors
///
/// Returns [`TransportError::UnsupportedMethod`] for a method outside the
/// seven the transport supports.
pub fn to_axum(method: Method) -> Result<http::Method, TransportError> {
    match method {
        Method::Get => Ok(http::Method::GET),
        Method::Put => Ok(http::Method::PUT),
        Method::Post => Ok(http::Method::POST),
        Method::Delete => Ok(http::Method::DELETE),
        Method::Options => Ok(http::Method::OPTIONS),
        Method::Head => Ok(http::Method::HEAD),
        Method::Patch => Ok(http::Method::PATCH),
        Method::Trace | Method::Connect | Method::Query => {
            Err(TransportError::unsupported_method(method.as_str()))
        }
    }
}

/// Convert a platform method into the generic representation.
///
/// # Errors
///
/// Returns [`TransportError::UnsupportedMethod`] for a method outside the
/// seven the transport supports.
pub fn from_axum(method: &http::Method) -> Result<Method, TransportError> {
    match method.as_str() {
        "GET" => Ok(Method::Get),
        "PUT" => Ok(Method::Put),
        "POST" => Ok(Method::Post),
        "DELETE" => Ok(Method::Delete),
        "OPTIONS" => Ok(Method::Options),
        "HEAD" => Ok(Method::Head),
        "PATCH" => Ok(Method::Patch),
        other => Err(TransportError::unsupported_method(other)),
    }
}
