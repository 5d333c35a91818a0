//! Server settings read from the process environment.

use std::env;

pub const DEFAULT_DATABASE_URL: &str = "app.db";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;

/// Runtime settings for the HTTP server and the SQLite store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `ADDRESS` and `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT value {raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "/tmp/catalog.db"),
            ("ADDRESS", "0.0.0.0"),
            ("PORT", "8080"),
        ]));

        assert_eq!(config.database_url, "/tmp/catalog.db");
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_uses_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert_eq!(config.port, DEFAULT_PORT);
    }
}
