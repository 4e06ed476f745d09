// Configuration module entry point
// Loads typed configuration and holds the shared application state

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::{Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Default config file (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable prefix, e.g. `CONTACTS__SERVER__PORT=4000`
const ENV_PREFIX: &str = "CONTACTS";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables override it and
    /// built-in defaults fill whatever is left.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    fn defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("performance.backlog", 128)?
            .set_default("performance.shutdown_grace_period", 5)?
            .set_default("http.server_name", "contact-api")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 102_400) // 100KB
    }

    /// Listen address; `server.host` must be an IPv4 or IPv6 literal
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        self.server
            .host
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.server.port))
            .map_err(|e| format!("Invalid address '{}': {e}", self.server.host))
    }
}

#[cfg(test)]
impl Config {
    /// Defaults only, without reading files or the environment
    pub fn for_tests() -> Self {
        Self::defaults()
            .and_then(|builder| builder.build())
            .and_then(|settings| settings.try_deserialize())
            .expect("built-in defaults must deserialize")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::for_tests();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.http.max_body_size, 102_400);
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::for_tests();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "::1".to_string();
        assert_eq!(cfg.get_socket_addr().unwrap().to_string(), "[::1]:3000");

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = Config::load_from("/nonexistent/contact-api-config").unwrap();
        assert_eq!(cfg.performance.backlog, 128);
    }
}
