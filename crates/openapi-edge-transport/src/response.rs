//! Generic-to-platform response conversion.

use axum::body::Body as PlatformBody;
use axum::http::{HeaderName, HeaderValue, Response as PlatformResponse, StatusCode};
use tracing::error;

use openapi_edge_core::{BodyLength, Response};

/// Write a generic response into the platform representation.
///
/// The numeric status is applied first (values outside the valid range fall
/// back to 500), then every header field in response order; entries that are
/// not valid platform header names or values are skipped. A missing body
/// ends the response with zero bytes. A known-length body is read to exactly
/// its declared length; an unknown-length body is read up to
/// `max_body_bytes`.
pub async fn into_axum(
    response: Response,
    max_body_bytes: usize,
) -> PlatformResponse<PlatformBody> {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = PlatformResponse::builder().status(status);
    for field in &response.header_fields {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(field.name.as_str()),
            HeaderValue::try_from(field.value.as_str()),
        ) {
            builder = builder.header(name, value);
        }
    }

    let payload = match response.body {
        None => PlatformBody::empty(),
        Some(body) => {
            let limit = match body.length() {
                BodyLength::Known(length) => usize::try_from(length).unwrap_or(usize::MAX),
                BodyLength::Unknown => max_body_bytes,
            };
            match body.collect(limit).await {
                Ok(bytes) => PlatformBody::from(bytes),
                Err(e) => {
                    error!(error = %e, "Failed to read response body");
                    return server_error();
                }
            }
        }
    };

    builder.body(payload).unwrap_or_else(|_| server_error())
}

fn server_error() -> PlatformResponse<PlatformBody> {
    PlatformResponse::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .body(PlatformBody::empty())
        .unwrap()
}
