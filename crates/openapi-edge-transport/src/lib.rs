//! axum server transport for OpenAPI generated handlers.
//!
//! This crate adapts an axum router to the [`ServerTransport`] capability
//! from `openapi-edge-core`. It handles:
//!
//! - HTTP method translation in both directions
//! - Route pattern rendering for the platform router
//! - Request conversion and metadata extraction
//! - Response conversion back to the platform
//!
//! The adapter performs structural conversion only: routing, connection
//! handling, timeouts, and retries all belong to the platform and the
//! handlers.
//!
//! # Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use openapi_edge_core::{Method, Response, ServerTransport, request_handler};
//! use openapi_edge_transport::EdgeTransport;
//!
//! let mut transport = EdgeTransport::new(Router::new());
//! transport.register(
//!     request_handler(|_request, metadata| async move {
//!         let id = metadata.path_parameters["id"].clone();
//!         Ok(Response::new(200))
//!     }),
//!     Method::Get,
//!     "/tasks/{id}",
//!     Default::default(),
//! )?;
//!
//! axum::serve(listener, transport.into_router()).await?;
//! ```
//!
//! [`ServerTransport`]: openapi_edge_core::ServerTransport

pub mod error;
pub mod method;
pub mod path;
pub mod request;
pub mod response;
pub mod transport;

pub use error::TransportError;
pub use transport::{EdgeTransport, TransportConfig};
