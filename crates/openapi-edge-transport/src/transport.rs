//! Route registration and dispatch on the platform router.
//!
//! [`EdgeTransport`] implements the [`ServerTransport`] capability on top of
//! an axum [`Router`]. Registration installs one route per operation, and
//! each invocation afterward runs a single request/response conversion cycle
//! around the registered handler.

use std::collections::BTreeSet;
use std::mem;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body as PlatformBody;
use axum::extract::RawPathParams;
use axum::http::{Request as PlatformRequest, StatusCode};
use axum::response::Response as PlatformResponse;
use axum::routing::{MethodFilter, on};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use openapi_edge_core::{Method, PathPattern, RequestHandler, ServerTransport};

use crate::error::TransportError;
use crate::{method, path, request, response};

/// Conversion limits for the transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Maximum bytes read when materializing a request body.
    #[serde(default = "defaults::max_request_body_bytes")]
    pub max_request_body_bytes: usize,

    /// Maximum bytes read from an unknown-length response body.
    #[serde(default = "defaults::max_response_body_bytes")]
    pub max_response_body_bytes: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_request_body_bytes: defaults::max_request_body_bytes(),
            max_response_body_bytes: defaults::max_response_body_bytes(),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn max_request_body_bytes() -> usize {
        2 * 1024 * 1024
    }

    pub const fn max_response_body_bytes() -> usize {
        2 * 1024 * 1024
    }
}

/// Server transport backed by an axum router.
///
/// The router is held for registration at startup and handed back with
/// [`into_router`](Self::into_router) once every operation is registered;
/// dispatch afterward is driven entirely by the router.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use openapi_edge_core::{Method, ServerTransport, request_handler};
/// use openapi_edge_transport::EdgeTransport;
///
/// let mut transport = EdgeTransport::new(Router::new());
/// transport.register(
///     request_handler(|_request, metadata| async move { /* ... */ }),
///     Method::Get,
///     "/tasks/{id}",
///     Default::default(),
/// )?;
/// let app = transport.into_router();
/// ```
pub struct EdgeTransport {
    router: Router,
    config: TransportConfig,
}

impl EdgeTransport {
    /// Create a transport over `router` with default limits.
    pub fn new(router: Router) -> Self {
        Self::with_config(router, TransportConfig::default())
    }

    /// Create a transport over `router` with explicit limits.
    pub fn with_config(router: Router, config: TransportConfig) -> Self {
        Self { router, config }
    }

    /// The transport's conversion limits.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Hand the router back for serving.
    pub fn into_router(self) -> Router {
        self.router
    }
}

impl ServerTransport for EdgeTransport {
    type Error = TransportError;

    /// Register `handler` for `method` on `path`.
    ///
    /// A method outside the supported set makes the registration a no-op:
    /// the route is silently not added and `Ok(())` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::DuplicatePathParameter`] when the pattern
    /// declares the same parameter name twice.
    fn register(
        &mut self,
        handler: RequestHandler,
        method: Method,
        path: &str,
        query_item_names: BTreeSet<String>,
    ) -> Result<(), TransportError> {
        let Ok(platform_method) = method::to_axum(method) else {
            warn!(method = %method, path, "Skipping route with unsupported HTTP method");
            return Ok(());
        };
        let Ok(filter) = MethodFilter::try_from(platform_method) else {
            warn!(method = %method, path, "Skipping route the platform router cannot filter");
            return Ok(());
        };

        let pattern = PathPattern::parse(path);
        if pattern.has_duplicate_parameters() {
            let names = pattern
                .parameter_names()
                .iter()
                .map(ToString::to_string)
                .collect();
            return Err(TransportError::duplicate_path_parameter(names));
        }

        let platform_path = path::to_axum_path(&pattern);
        let pattern = Arc::new(pattern);
        let query_item_names = Arc::new(query_item_names);
        let config = self.config.clone();

        let route = move |path_params: RawPathParams,
                          platform_request: PlatformRequest<PlatformBody>| {
            let handler = handler.clone();
            let pattern = pattern.clone();
            let query_item_names = query_item_names.clone();
            let config = config.clone();
            async move {
                dispatch(
                    handler,
                    &pattern,
                    &query_item_names,
                    &config,
                    path_params,
                    platform_request,
                )
                .await
            }
        };

        self.router = mem::take(&mut self.router).route(&platform_path, on(filter, route));
        Ok(())
    }
}

/// Run one request/response cycle for a registered operation.
#[instrument(
    skip_all,
    fields(
        method = %platform_request.method(),
        path = %platform_request.uri().path(),
    )
)]
async fn dispatch(
    handler: RequestHandler,
    pattern: &PathPattern,
    query_item_names: &BTreeSet<String>,
    config: &TransportConfig,
    path_params: RawPathParams,
    platform_request: PlatformRequest<PlatformBody>,
) -> PlatformResponse {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let query = platform_request.uri().query().map(str::to_string);
    let metadata = match request::metadata_from_request(
        &path_params,
        query.as_deref(),
        pattern,
        query_item_names,
    ) {
        Ok(metadata) => metadata,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Request metadata conversion failed");
            return error_response(&e);
        }
    };

    let generic_request =
        match request::from_axum(platform_request, config.max_request_body_bytes).await {
            Ok(request) => request,
            Err(e) => {
                error!(request_id = %request_id, error = %e, "Request conversion failed");
                return error_response(&e);
            }
        };

    let result = handler(generic_request, metadata).await;
    let duration = start.elapsed();

    match result {
        Ok(generic_response) => {
            info!(
                request_id = %request_id,
                status = generic_response.status,
                duration_ms = duration.as_millis() as u64,
                "Request completed"
            );
            response::into_axum(generic_response, config.max_response_body_bytes).await
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                error = %e,
                duration_ms = duration.as_millis() as u64,
                "Handler failed"
            );
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Map a translation error onto the platform's error channel.
fn error_response(error: &TransportError) -> PlatformResponse {
    let status = match error {
        TransportError::BodyRead { .. } => StatusCode::BAD_REQUEST,
        TransportError::UnsupportedMethod { .. } => StatusCode::METHOD_NOT_ALLOWED,
        TransportError::MissingRequiredPathParameter { .. }
        | TransportError::DuplicatePathParameter { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    status_response(status)
}

fn status_response(status: StatusCode) -> PlatformResponse {
    let mut response = PlatformResponse::new(PlatformBody::empty());
    *response.status_mut() = status;
    response
}
