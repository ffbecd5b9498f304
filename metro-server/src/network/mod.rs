//! Network model and loading.
//!
//! The network description is read once into an immutable [`Network`].
//! Reloading never touches a published network: a new one is built off to
//! the side and swapped in through [`SharedNetwork`].

mod graph;
mod parser;
mod positions;
mod snapshot;

use std::path::{Path, PathBuf};

use tracing::info;

pub use graph::{Edge, Neighbor, Network, NetworkBuilder};
pub use parser::{ParseIssue, ParseReport, SkippedLine, parse_network};
pub use positions::{StationPosition, StationPositions};
pub use snapshot::{SharedNetwork, Snapshot};

#[cfg(test)]
pub(crate) use graph::test_support;

/// Errors from reading network input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file holds no station records
    #[error("{path} declares no stations")]
    EmptyNetwork { path: PathBuf },
}

/// Read and parse a network description file.
pub fn load_network(path: &Path) -> Result<(Network, ParseReport), LoadError> {
    let text = read(path)?;
    let (network, report) = parse_network(&text);
    info!(
        path = %path.display(),
        stations = network.station_count(),
        edges = network.edge_count(),
        skipped = report.skipped.len(),
        "loaded network"
    );
    Ok((network, report))
}

/// Read and parse a network description file without blocking the runtime.
///
/// Unlike [`load_network`], a file that declares no stations is an error:
/// this is the path used to replace an already published network.
pub async fn fetch_network(path: &Path) -> Result<(Network, ParseReport), LoadError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let (network, report) = parse_network(&text);
    if network.is_empty() || report.vertex_records == 0 {
        return Err(LoadError::EmptyNetwork {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        stations = network.station_count(),
        edges = network.edge_count(),
        skipped = report.skipped.len(),
        "fetched network"
    );
    Ok((network, report))
}

/// Read and parse a station position file.
pub fn load_positions(path: &Path) -> Result<StationPositions, LoadError> {
    let text = read(path)?;
    let positions = StationPositions::parse(&text);
    info!(path = %path.display(), points = positions.len(), "loaded station positions");
    Ok(positions)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
