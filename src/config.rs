//! Gateway configuration.
//!
//! Settings come from an optional TOML file; CLI flags override individual
//! values on top. [`GatewayConfig::load`] is the only entry point the binary
//! uses.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use openapi_edge_transport::TransportConfig;

/// Complete gateway configuration.
///
/// # Example
///
/// ```toml
/// [http]
/// listen = "127.0.0.1:3000"
/// request_timeout_ms = 15000
///
/// [transport]
/// max_request_body_bytes = 1048576
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Transport conversion limits.
    #[serde(default)]
    pub transport: TransportConfig,
}

impl GatewayConfig {
    /// Load the configuration, reading `path` when given and falling back to
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Malformed`] when it is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Address the gateway listens on.
    #[serde(default = "defaults::listen")]
    pub listen: SocketAddr,

    /// Per-request timeout in milliseconds.
    #[serde(default = "defaults::request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Drain in-flight requests on SIGTERM/SIGINT instead of aborting.
    #[serde(default = "defaults::graceful_shutdown")]
    pub graceful_shutdown: bool,
}

impl HttpConfig {
    /// The per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen: defaults::listen(),
            request_timeout_ms: defaults::request_timeout_ms(),
            graceful_shutdown: defaults::graceful_shutdown(),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read config file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("Malformed config file")]
    Malformed(#[from] toml::de::Error),
}

/// Default value functions for serde.
mod defaults {
    use std::net::{Ipv4Addr, SocketAddr};

    pub fn listen() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
    }

    pub const fn request_timeout_ms() -> u64 {
        30_000
    }

    pub const fn graceful_shutdown() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = GatewayConfig::load(None).unwrap();

        assert_eq!(config.http.listen.port(), 8080);
        assert_eq!(config.http.request_timeout(), Duration::from_secs(30));
        assert!(config.http.graceful_shutdown);
        assert_eq!(config.transport.max_request_body_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = GatewayConfig::load(Some(Path::new("/nonexistent/gateway.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_sections_fill_in_independently() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [transport]
            max_request_body_bytes = 4096
            "#,
        )
        .unwrap();

        assert_eq!(config.transport.max_request_body_bytes, 4096);
        assert_eq!(config.transport.max_response_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.http.listen.port(), 8080);
    }

    #[test]
    fn test_full_http_section() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [http]
            listen = "127.0.0.1:3000"
            request_timeout_ms = 5000
            graceful_shutdown = false
            "#,
        )
        .unwrap();

        assert_eq!(config.http.listen.to_string(), "127.0.0.1:3000");
        assert_eq!(config.http.request_timeout(), Duration::from_secs(5));
        assert!(!config.http.graceful_shutdown);
    }

    #[test]
    fn test_rejects_invalid_listen_address() {
        let result: Result<GatewayConfig, _> = toml::from_str(
            r#"
            [http]
            listen = "not-an-address"
            "#,
        );
        assert!(result.is_err());
    }
}
