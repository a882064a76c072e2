use std::{env, net::AddrParseError, net::SocketAddr, num::ParseIntError};

/// Tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "ecclesia_backend=info,tower_http=info";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub app_host: String,
    pub app_port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid APP_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let app_port = match lookup("APP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { app_host, app_port })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.app_host, self.app_port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidAddr { addr, source })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.app_host, "127.0.0.1");
        assert_eq!(cfg.app_port, 8000);
    }

    #[test]
    fn reads_host_and_port() {
        let cfg =
            Config::from_lookup(lookup_from(&[("APP_HOST", "0.0.0.0"), ("APP_PORT", "9090")]))
                .unwrap();
        assert_eq!(cfg.app_host, "0.0.0.0");
        assert_eq!(cfg.app_port, 9090);
        assert_eq!(cfg.listen_addr().unwrap().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup_from(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    }

    #[test]
    fn rejects_out_of_range_port() {
        let err = Config::from_lookup(lookup_from(&[("APP_PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn rejects_unparsable_host() {
        let cfg = Config {
            app_host: "not a host".to_string(),
            app_port: 8000,
        };
        let err = cfg.listen_addr().unwrap_err();
        assert!(err.to_string().contains("not a host:8000"));
    }
}
