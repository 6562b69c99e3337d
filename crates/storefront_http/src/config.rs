//! Server configuration.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use storefront_core::validation::DEFAULT_MAX_TEXT_LEN;
use storefront_core::Validator;

/// Listener and request-limit settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Cap applied to every text field before per-field constraints.
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_text_len() -> usize {
    DEFAULT_MAX_TEXT_LEN
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_text_len: default_max_text_len(),
        }
    }
}

impl ServerConfig {
    /// Parses `host:port` into a socket address.
    ///
    /// Returns an error message when `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|err| format!("invalid host `{}`: {err}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.max_text_len)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn defaults_bind_loopback_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.validator().max_text_len(), 255);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_text_len, 255);
    }

    #[test]
    fn non_ip_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        let err = config.socket_addr().unwrap_err();
        assert!(err.contains("invalid host"));
    }
}
