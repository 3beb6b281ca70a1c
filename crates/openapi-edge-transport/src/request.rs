//! Platform-to-generic request conversion.
//!
//! Builds the generic request and its metadata from what the platform
//! router hands a matched route: the request itself, the extracted path
//! parameters, and the route's declared pattern and query parameter names.

use std::collections::{BTreeSet, HashMap};

use axum::body::Body as PlatformBody;
use axum::extract::RawPathParams;
use axum::http::{Request as PlatformRequest, header};

use openapi_edge_core::{
    Body, BodyLength, HeaderField, PathComponent, PathPattern, QueryItem, Request,
    ServerRequestMetadata,
};

use crate::error::TransportError;
use crate::method;

/// Convert an incoming platform request into the generic representation.
///
/// The path and query are taken verbatim from the URI. Headers are copied
/// in platform order, dropping entries whose value is not valid UTF-8. The
/// body is fully materialized, reading at most `max_body_bytes`; a
/// `content-length` header sets the known-length hint, otherwise the body
/// length is unknown. An empty body with no `content-length` converts to
/// no body at all.
///
/// # Errors
///
/// Returns [`TransportError::UnsupportedMethod`] for a method outside the
/// supported set and [`TransportError::BodyRead`] when the platform body
/// stream fails or exceeds `max_body_bytes`.
pub async fn from_axum(
    request: PlatformRequest<PlatformBody>,
    max_body_bytes: usize,
) -> Result<Request, TransportError> {
    let (parts, body) = request.into_parts();

    let method = method::from_axum(&parts.method)?;
    let path = parts.uri.path().to_string();
    let query = parts.uri.query().map(str::to_string);

    let header_fields: Vec<HeaderField> = parts
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| HeaderField::new(name.as_str(), value))
        })
        .collect();

    let content_length = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    let bytes = axum::body::to_bytes(body, max_body_bytes)
        .await
        .map_err(|e| TransportError::body_read(e.to_string()))?;

    let body = match content_length {
        Some(length) => Some(Body::full_with_length(bytes, BodyLength::Known(length))),
        None if bytes.is_empty() => None,
        None => Some(Body::full_with_length(bytes, BodyLength::Unknown)),
    };

    Ok(Request {
        method,
        path,
        query,
        header_fields,
        body,
    })
}

/// Extract the declared path parameters through the platform's lookup.
///
/// Each parameter segment in `pattern` is resolved by name via `lookup`.
///
/// # Errors
///
/// Returns [`TransportError::MissingRequiredPathParameter`] when the
/// platform has no value for a declared name, and
/// [`TransportError::DuplicatePathParameter`] listing every declared
/// parameter name when a name appears more than once in the pattern.
pub fn extract_path_parameters<F>(
    pattern: &PathPattern,
    mut lookup: F,
) -> Result<HashMap<String, String>, TransportError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut parameters = HashMap::new();
    for component in pattern.components() {
        let PathComponent::Parameter(name) = component else {
            continue;
        };
        let value =
            lookup(name).ok_or_else(|| TransportError::missing_path_parameter(name.clone()))?;
        if parameters.insert(name.clone(), value).is_some() {
            let names = pattern
                .parameter_names()
                .iter()
                .map(ToString::to_string)
                .collect();
            return Err(TransportError::duplicate_path_parameter(names));
        }
    }
    Ok(parameters)
}

/// Extract the declared query parameters from the request's query string.
///
/// Names are processed in sorted order; names absent from the query string
/// are omitted. When a name occurs more than once in the query string, the
/// first occurrence wins.
pub fn extract_query_parameters(
    query: Option<&str>,
    query_item_names: &BTreeSet<String>,
) -> Vec<QueryItem> {
    let Some(query) = query else {
        return Vec::new();
    };

    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    query_item_names
        .iter()
        .filter_map(|name| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| QueryItem::new(name.clone(), value.clone()))
        })
        .collect()
}

/// Build the metadata for one route invocation.
///
/// # Errors
///
/// Propagates the path parameter extraction errors of
/// [`extract_path_parameters`].
pub fn metadata_from_request(
    path_params: &RawPathParams,
    query: Option<&str>,
    pattern: &PathPattern,
    query_item_names: &BTreeSet<String>,
) -> Result<ServerRequestMetadata, TransportError> {
    let path_parameters = extract_path_parameters(pattern, |name| {
        path_params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    })?;
    let query_parameters = extract_query_parameters(query, query_item_names);

    Ok(ServerRequestMetadata {
        path_parameters,
        query_parameters,
    })
}
