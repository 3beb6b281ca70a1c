//! The server-transport capability contract.
//!
//! A handler framework calls [`ServerTransport::register`] once per
//! operation in an API description, before traffic arrives; the transport
//! wires each handler into the platform router it fronts and performs the
//! request/response conversion on every invocation afterward.

use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::BoxError;
use crate::metadata::ServerRequestMetadata;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;

/// Boxed future returned by a request handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, BoxError>> + Send>>;

/// A registered operation handler.
///
/// Handlers receive the converted request plus its metadata and produce the
/// generic response; they are shared across invocations and must be safe to
/// call concurrently.
pub type RequestHandler = Arc<dyn Fn(Request, ServerRequestMetadata) -> HandlerFuture + Send + Sync>;

/// Wrap an async function as a [`RequestHandler`].
pub fn request_handler<F, Fut>(f: F) -> RequestHandler
where
    F: Fn(Request, ServerRequestMetadata) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
    Arc::new(move |request, metadata| Box::pin(f(request, metadata)))
}

/// The capability a handler framework requires of an HTTP server
/// integration.
pub trait ServerTransport {
    /// Error returned when a registration cannot be completed.
    type Error;

    /// Register `handler` for `method` on `path`.
    ///
    /// `path` uses `{name}` bracket syntax for parameter segments.
    /// `query_item_names` declares the query parameters the operation wants
    /// extracted into its metadata.
    ///
    /// # Errors
    ///
    /// Implementations reject registrations whose route pattern is invalid;
    /// what counts as invalid is implementation-defined.
    fn register(
        &mut self,
        handler: RequestHandler,
        method: Method,
        path: &str,
        query_item_names: BTreeSet<String>,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_handler_wraps_async_fn() {
        let handler = request_handler(|request: Request, _metadata| async move {
            Ok(Response::new(if request.path == "/ok" { 200 } else { 404 }))
        });

        let response = tokio_test::block_on(handler(
            Request::new(Method::Get, "/ok"),
            ServerRequestMetadata::default(),
        ))
        .unwrap();
        assert_eq!(response.status, 200);
    }
}
