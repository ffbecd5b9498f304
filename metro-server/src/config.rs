//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::planner::{Algorithm, UnknownAlgorithm};

/// Errors from reading server settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid listen address {value:?}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var}: {error}")]
    InvalidAlgorithm {
        var: &'static str,
        error: UnknownAlgorithm,
    },

    #[error("{var}: expected a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Settings for the metro server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Network description file
    pub network_path: PathBuf,

    /// Optional station position file
    pub positions_path: Option<PathBuf>,

    /// Listen address
    pub bind: SocketAddr,

    /// Static asset directory
    pub static_dir: PathBuf,

    /// Shortest path algorithm
    pub algorithm: Algorithm,

    /// How often to reload the network file, if at all
    pub reload_interval: Option<Duration>,

    /// Maximum number of cached single-source results
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from("data/metro.txt"),
            positions_path: None,
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            algorithm: Algorithm::default(),
            reload_interval: None,
            cache_capacity: 256,
        }
    }
}

impl ServerConfig {
    /// Read settings from `METRO_*` environment variables.
    ///
    /// Unset or empty variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("METRO_NETWORK") {
            config.network_path = PathBuf::from(path);
        }
        config.positions_path = get("METRO_POSITIONS").map(PathBuf::from);
        if let Some(dir) = get("METRO_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(value) = get("METRO_BIND") {
            config.bind = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBind {
                    var: "METRO_BIND",
                    value,
                })?;
        }

        if let Some(value) = get("METRO_ALGORITHM") {
            config.algorithm =
                value
                    .parse()
                    .map_err(|error| ConfigError::InvalidAlgorithm {
                        var: "METRO_ALGORITHM",
                        error,
                    })?;
        }

        if let Some(value) = get("METRO_RELOAD_SECS") {
            let secs = positive("METRO_RELOAD_SECS", value)?;
            config.reload_interval = Some(Duration::from_secs(secs));
        }

        if let Some(value) = get("METRO_CACHE_CAPACITY") {
            config.cache_capacity = positive("METRO_CACHE_CAPACITY", value)?;
        }

        Ok(config)
    }
}

fn positive(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.algorithm, Algorithm::Dijkstra);
        assert_eq!(config.cache_capacity, 256);
        assert!(config.reload_interval.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("METRO_NETWORK", "/srv/metro.txt"),
            ("METRO_POSITIONS", "/srv/pospoints.txt"),
            ("METRO_BIND", "0.0.0.0:8080"),
            ("METRO_STATIC_DIR", "/srv/static"),
            ("METRO_ALGORITHM", "bellman-ford"),
            ("METRO_RELOAD_SECS", "300"),
            ("METRO_CACHE_CAPACITY", "32"),
        ])
        .unwrap();

        assert_eq!(config.network_path, PathBuf::from("/srv/metro.txt"));
        assert_eq!(
            config.positions_path,
            Some(PathBuf::from("/srv/pospoints.txt"))
        );
        assert_eq!(config.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.algorithm, Algorithm::BellmanFord);
        assert_eq!(config.reload_interval, Some(Duration::from_secs(300)));
        assert_eq!(config.cache_capacity, 32);
    }

    #[test]
    fn empty_values_keep_defaults() {
        let config = from_pairs(&[("METRO_BIND", ""), ("METRO_POSITIONS", "  ")]).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            from_pairs(&[("METRO_BIND", "localhost")]),
            Err(ConfigError::InvalidBind { .. })
        ));
        assert!(matches!(
            from_pairs(&[("METRO_ALGORITHM", "a-star")]),
            Err(ConfigError::InvalidAlgorithm { .. })
        ));
        assert!(matches!(
            from_pairs(&[("METRO_RELOAD_SECS", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            from_pairs(&[("METRO_CACHE_CAPACITY", "-4")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
