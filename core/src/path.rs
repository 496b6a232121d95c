use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::QueryError;
use crate::graph::{GraphIndex, NodeId};

/// Minimum-weight path between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Source to destination, both inclusive.
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`.
    pub distance: f64,
}

impl WeightedPath {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Tentative distance ordered with `total_cmp` so it can live in a heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dijkstra shortest path from `src` to `dst` over positive edge weights.
///
/// Returns `Ok(None)` when `dst` is not reachable from `src`. Both endpoints
/// must be in the node set, otherwise `NodeNotFound` is returned before any
/// search. A non-positive or non-finite weight met while relaxing edges
/// aborts the search with `InvalidWeight`, and a path total that no longer
/// fits in an `f64` aborts it with `DistanceOverflow`.
///
/// The heap may hold several entries for one node; stale entries are skipped
/// when popped because the node is already finalized.
pub fn shortest_path(
    graph: &GraphIndex,
    src: NodeId,
    dst: NodeId,
) -> Result<Option<WeightedPath>, QueryError> {
    if !graph.contains(src) {
        return Err(QueryError::NodeNotFound(src));
    }
    if !graph.contains(dst) {
        return Err(QueryError::NodeNotFound(dst));
    }

    // Absent from `dist` means infinite.
    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();

    dist.insert(src, 0.0);
    heap.push(Reverse((Distance(0.0), src)));

    while let Some(Reverse((Distance(d), current))) = heap.pop() {
        if !finalized.insert(current) {
            continue;
        }
        if current == dst {
            break;
        }

        for edge in graph.neighbors_out(current) {
            if !(edge.weight.is_finite() && edge.weight > 0.0) {
                return Err(QueryError::InvalidWeight {
                    src: current,
                    dst: edge.target,
                    weight: edge.weight,
                });
            }
            if finalized.contains(&edge.target) {
                continue;
            }

            let candidate = d + edge.weight;
            if !candidate.is_finite() {
                return Err(QueryError::DistanceOverflow {
                    src: current,
                    dst: edge.target,
                });
            }
            let improves = dist
                .get(&edge.target)
                .map_or(true, |&known| candidate < known);
            if improves {
                dist.insert(edge.target, candidate);
                predecessor.insert(edge.target, current);
                heap.push(Reverse((Distance(candidate), edge.target)));
            }
        }
    }

    let Some(&distance) = dist.get(&dst).filter(|d| d.is_finite()) else {
        return Ok(None);
    };

    Ok(Some(WeightedPath {
        path: reconstruct(&predecessor, src, dst),
        distance,
    }))
}

/// Walk predecessor links from `dst` back to `src`, then reverse.
fn reconstruct(predecessor: &HashMap<NodeId, NodeId>, src: NodeId, dst: NodeId) -> Vec<NodeId> {
    let mut path = vec![dst];
    let mut current = dst;

    while current != src {
        match predecessor.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
