//! Minimum spanning tree.
//!
//! Lazy Prim: grow a tree from the first declared station, always taking
//! the lightest edge that leaves it. On a disconnected network only the
//! start station's component is covered; [`SpanningTree::spans_network`]
//! tells the caller whether that is the whole network.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::domain::StationId;
use crate::network::Network;

/// One edge of the tree, oriented away from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent: StationId,
    pub child: StationId,
    /// Traversal time in seconds
    pub weight: u32,
}

/// A minimum spanning tree of one connected component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    /// Edges in the order they were added
    pub edges: Vec<TreeEdge>,
    /// Sum of edge weights in seconds
    pub total_weight: u64,
    /// Number of stations the tree covers (0 for an empty network)
    pub covered: usize,
    /// Number of stations in the network
    pub station_count: usize,
}

impl SpanningTree {
    /// Returns true if the tree covers every station in the network.
    pub fn spans_network(&self) -> bool {
        self.covered == self.station_count
    }
}

/// Build the minimum spanning tree of the first station's component.
///
/// Edges of equal weight leave the heap in (weight, parent, child) dense
/// index order.
pub fn build_spanning_tree(network: &Network) -> SpanningTree {
    let n = network.station_count();
    if n == 0 {
        return SpanningTree::default();
    }

    let mut visited = vec![false; n];
    let mut heap: BinaryHeap<Reverse<(u32, usize, usize)>> = BinaryHeap::new();
    let mut tree = SpanningTree {
        covered: 1,
        station_count: n,
        ..SpanningTree::default()
    };

    visited[0] = true;
    push_incident(network, 0, &visited, &mut heap);

    while let Some(Reverse((weight, parent, child))) = heap.pop() {
        if visited[child] {
            continue;
        }
        visited[child] = true;
        tree.edges.push(TreeEdge {
            parent: network.station_at(parent).id,
            child: network.station_at(child).id,
            weight,
        });
        tree.total_weight += u64::from(weight);
        tree.covered += 1;

        push_incident(network, child, &visited, &mut heap);
    }

    debug!(
        edges = tree.edges.len(),
        total_weight = tree.total_weight,
        covered = tree.covered,
        stations = n,
        "built spanning tree"
    );
    tree
}

fn push_incident(
    network: &Network,
    from: usize,
    visited: &[bool],
    heap: &mut BinaryHeap<Reverse<(u32, usize, usize)>>,
) {
    for nb in network.neighbors_at(from) {
        if !visited[nb.index] {
            heap.push(Reverse((nb.weight, from, nb.index)));
        }
    }
}
