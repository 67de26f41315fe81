//! Bind address of the journal server, read from the environment
//!

use std::env;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV};
use crate::error::JournalError;

pub fn host() -> String {
    env::var(HOST_ENV).unwrap_or_else(|_| String::from(DEFAULT_HOST))
}

pub fn port() -> String {
    env::var(PORT_ENV).unwrap_or_else(|_| String::from(DEFAULT_PORT))
}

pub fn parse_port(port: impl AsRef<str>) -> Result<u16, JournalError> {
    let port = port.as_ref();
    port.trim()
        .parse::<u16>()
        .map_err(|_| JournalError::invalid_port(port))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl AsRef<str>, port: impl AsRef<str>) -> Result<ServerConfig, JournalError> {
        let host = host.as_ref().trim();
        if host.is_empty() {
            return Err(JournalError::invalid_config("Host must not be empty"));
        }

        Ok(ServerConfig {
            host: host.to_string(),
            port: parse_port(port)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::endpoint::{parse_port, ServerConfig};
    use crate::error::JournalError;

    #[test]
    fn test_parse_port() -> Result<(), JournalError> {
        assert_eq!(parse_port("3000")?, 3000);
        assert_eq!(parse_port(" 8080 ")?, 8080);
        Ok(())
    }

    #[test]
    fn test_parse_port_invalid() {
        assert!(matches!(parse_port("abc"), Err(JournalError::InvalidConfig { .. })));
        assert!(matches!(parse_port("70000"), Err(JournalError::InvalidConfig { .. })));
        assert!(matches!(parse_port(""), Err(JournalError::InvalidConfig { .. })));
    }

    #[test]
    fn test_server_config_new() -> Result<(), JournalError> {
        let config = ServerConfig::new("127.0.0.1", "4000")?;
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4000);
        assert_eq!(config.addr(), "127.0.0.1:4000");
        Ok(())
    }

    #[test]
    fn test_server_config_rejects_empty_host() {
        let result = ServerConfig::new("  ", "4000");
        assert!(matches!(result, Err(JournalError::InvalidConfig { .. })));
    }
}
