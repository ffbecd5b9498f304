//! Publication of network snapshots.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::graph::Network;
use super::{LoadError, fetch_network};

/// A published network and its generation number.
///
/// Generations start at 1 and grow by one with each published network, so
/// derived data (such as cached query results) can be tied to the snapshot
/// it was computed from.
#[derive(Debug)]
pub struct Snapshot {
    generation: u64,
    network: Network,
}

impl Snapshot {
    /// Returns the generation number.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the network.
    pub fn network(&self) -> &Network {
        &self.network
    }
}

/// Thread-safe holder of the current network snapshot.
///
/// Readers take a cheap `Arc` clone of the current snapshot and query it
/// without holding any lock. Publishing replaces the pointer in one step, so
/// a reader sees either the old network or the new one, never a mix.
#[derive(Clone)]
pub struct SharedNetwork {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl SharedNetwork {
    /// Create a holder publishing `network` as generation 1.
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(Snapshot {
                generation: 1,
                network,
            }))),
        }
    }

    /// Returns the current snapshot.
    pub async fn current(&self) -> Arc<Snapshot> {
        let guard = self.inner.read().await;
        Arc::clone(&*guard)
    }

    /// Publish a new network, returning its generation.
    pub async fn publish(&self, network: Network) -> u64 {
        let mut guard = self.inner.write().await;
        let generation = guard.generation + 1;
        *guard = Arc::new(Snapshot {
            generation,
            network,
        });
        generation
    }

    /// Reload the network from a description file.
    ///
    /// On success, publishes the new network and returns its station count.
    /// On failure, including a file with no stations, the current network
    /// stays published and the error is returned.
    pub async fn reload(&self, path: &Path) -> Result<usize, LoadError> {
        let (network, _report) = fetch_network(path).await?;
        let count = network.station_count();
        self.publish(network).await;
        Ok(count)
    }
}
