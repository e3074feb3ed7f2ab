//! Listener settings for the inventory API.
//!
//! Read from the `server` section of the JSON config file; `serve --port`
//! replaces `port` after loading. Every key may be omitted.
//!
//! ```json
//! { "server": { "host": "127.0.0.1", "port": 5000, "cors_origins": [] } }
//! ```

use serde::{Deserialize, Serialize};

/// `server` section of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface or hostname to listen on
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by the CORS layer; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, resolved by the listener so hostnames work too
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_is_default() {
        let config: HttpServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HttpServerConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:5000");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_port_only_keeps_default_host() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config, HttpServerConfig::with_port(9000));
    }

    #[test]
    fn test_hostname_kept_verbatim() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            ..HttpServerConfig::with_port(8080)
        };
        assert_eq!(config.socket_addr(), "localhost:8080");
    }
}
