//! HTTP method vocabulary for the generic request model.

use std::fmt;

/// HTTP methods known to the handler framework.
///
/// A server integration is only required to support the first seven;
/// [`Trace`], [`Connect`], and [`Query`] exist so a registration call that
/// carries one of them can be observed and declined rather than failing to
/// type-check.
///
/// [`Trace`]: Method::Trace
/// [`Connect`]: Method::Connect
/// [`Query`]: Method::Query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
    Connect,
    Query,
}

impl Method {
    /// The uppercase wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
            Self::Query => "QUERY",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
