//! Planner configuration.

use std::fmt;
use std::str::FromStr;

/// Single-source shortest path algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Binary-heap Dijkstra, O(E log V).
    #[default]
    Dijkstra,

    /// Repeated relaxation of every edge, O(V·E).
    ///
    /// Gives the same distances as Dijkstra, but may pick a different
    /// path when two paths have equal length.
    BellmanFord,
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"dijkstra\" or \"bellman-ford\")")]
pub struct UnknownAlgorithm(String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::BellmanFord => f.write_str("bellman-ford"),
        }
    }
}

/// Configuration parameters for network queries.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Shortest path algorithm.
    pub algorithm: Algorithm,
}

impl PlannerConfig {
    /// Create a new configuration with the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.algorithm, Algorithm::Dijkstra);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(Algorithm::BellmanFord);
        assert_eq!(config.algorithm, Algorithm::BellmanFord);
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("dijkstra".parse(), Ok(Algorithm::Dijkstra));
        assert_eq!(" Dijkstra ".parse(), Ok(Algorithm::Dijkstra));
        assert_eq!("bellman-ford".parse(), Ok(Algorithm::BellmanFord));
        assert_eq!("BELLMAN_FORD".parse(), Ok(Algorithm::BellmanFord));
        assert!("a-star".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }
}
