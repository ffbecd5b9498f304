//! Network connectivity check.

use std::collections::VecDeque;

use crate::network::Network;

/// Returns true if every station can reach every other station.
///
/// Runs a breadth-first search from the first declared station and compares
/// the number of visited stations with the station count. An empty network
/// is connected.
pub fn is_connected(network: &Network) -> bool {
    let n = network.station_count();
    if n == 0 {
        return true;
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([0usize]);
    visited[0] = true;
    let mut count = 1;

    while let Some(u) = queue.pop_front() {
        for nb in network.neighbors_at(u) {
            if !visited[nb.index] {
                visited[nb.index] = true;
                count += 1;
                queue.push_back(nb.index);
            }
        }
    }

    count == n
}
