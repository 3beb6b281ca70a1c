//! Generic HTTP model for generated server handlers.
//!
//! This crate defines the protocol-agnostic vocabulary that generated server
//! code consumes, independent of any concrete HTTP server:
//! - [`Request`] / [`Response`]: per-exchange value objects
//! - [`Body`]: buffered or streamed payload with a length hint
//! - [`ServerRequestMetadata`]: extracted path and query parameters
//! - [`PathPattern`]: route templates of constant and parameter segments
//! - [`ServerTransport`]: the capability a server integration implements
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Platform router                       │
//! │  (External: receives requests, matches routes)          │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │              ServerTransport implementation             │
//! │  (Converts platform request → Request + metadata,       │
//! │   Response → platform response)                         │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                   RequestHandler                        │
//! │  (Generated from an API description, business logic)    │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod body;
pub mod metadata;
pub mod method;
pub mod path;
pub mod request;
pub mod response;
pub mod transport;

/// Boxed error carried by handler results and body streams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub use body::{Body, BodyLength};
pub use metadata::{QueryItem, ServerRequestMetadata};
pub use method::Method;
pub use path::{PathComponent, PathPattern};
pub use request::{HeaderField, Request};
pub use response::Response;
pub use transport::{HandlerFuture, RequestHandler, ServerTransport, request_handler};
