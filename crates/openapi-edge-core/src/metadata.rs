//! Per-request metadata extracted for a handler invocation.

use std::collections::HashMap;

/// A query parameter that was declared by the operation and present in the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    /// Declared parameter name.
    pub name: String,
    /// Extracted value.
    pub value: String,
}

impl QueryItem {
    /// Create a new query item.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parameters extracted from the matched route and query string.
///
/// Path parameters hold exactly one value per parameter declared by the
/// route pattern. Query parameters cover the operation's declared name set,
/// sorted by name, with absent names omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRequestMetadata {
    /// Declared path parameter names mapped to their extracted values.
    pub path_parameters: HashMap<String, String>,
    /// Declared query parameters present in the request.
    pub query_parameters: Vec<QueryItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let metadata = ServerRequestMetadata::default();
        assert!(metadata.path_parameters.is_empty());
        assert!(metadata.query_parameters.is_empty());
    }

    #[test]
    fn test_query_item() {
        let item = QueryItem::new("limit", "10");
        assert_eq!(item.name, "limit");
        assert_eq!(item.value, "10");
    }
}
