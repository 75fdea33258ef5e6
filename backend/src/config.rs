use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

/// Runtime settings read from the process environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub sentry_dsn: Option<String>,
    pub environment: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset, so `PORT=` falls back to the default
    /// the same way an absent variable does.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let host = match var("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Self {
            host,
            port,
            sentry_dsn: var("SENTRY_DSN"),
            environment: var("ENVIRONMENT"),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_port_10000_on_all_interfaces() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 10000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:10000");
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn port_comes_from_environment() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn empty_port_uses_default() {
        let config = config_from(&[("PORT", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert_eq!(
            config_from(&[("PORT", "ochenta")]),
            Err(ConfigError::InvalidPort("ochenta".to_string()))
        );
        assert!(matches!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn host_and_sentry_are_read() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:10000");
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
        assert_eq!(config.environment.as_deref(), Some("production"));
    }

    #[test]
    fn invalid_host_is_an_error() {
        assert!(matches!(
            config_from(&[("HOST", "localhost:80")]),
            Err(ConfigError::InvalidHost(_))
        ));
    }
}
