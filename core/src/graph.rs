use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage-assigned node identifier.
pub type NodeId = u64;

/// A directed, weighted edge as supplied by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: NodeId,
    pub dst: NodeId,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(src: NodeId, dst: NodeId, weight: f64) -> Self {
        Self { src, dst, weight }
    }
}

/// An outgoing entry in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Read-only adjacency index built for a single query.
///
/// Every node in the supplied node set is a key, even with no outgoing
/// edges. Outgoing lists keep the order the edges were supplied in, and
/// parallel edges are kept as separate entries.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    outgoing: HashMap<NodeId, Vec<Edge>>,
    node_order: Vec<NodeId>,
    edge_count: usize,
    dangling_edges: usize,
}

impl GraphIndex {
    /// Build the index from the full node set and edge set.
    ///
    /// Edges with an endpoint outside the node set are skipped and counted
    /// in [`GraphIndex::dangling_edges`].
    pub fn build<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = NodeId>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let nodes = nodes.into_iter();
        let mut outgoing: HashMap<NodeId, Vec<Edge>> = HashMap::with_capacity(nodes.size_hint().0);
        let mut node_order = Vec::with_capacity(nodes.size_hint().0);

        for id in nodes {
            if outgoing.insert(id, Vec::new()).is_none() {
                node_order.push(id);
            }
        }

        let mut edge_count = 0;
        let mut dangling_edges = 0;
        for record in edges {
            let EdgeRecord { src, dst, weight } = record;
            if !outgoing.contains_key(&dst) {
                tracing::warn!(src, dst, "skipping edge: destination not in node set");
                dangling_edges += 1;
                continue;
            }
            match outgoing.get_mut(&src) {
                Some(list) => {
                    list.push(Edge { target: dst, weight });
                    edge_count += 1;
                }
                None => {
                    tracing::warn!(src, dst, "skipping edge: source not in node set");
                    dangling_edges += 1;
                }
            }
        }

        Self {
            outgoing,
            node_order,
            edge_count,
            dangling_edges,
        }
    }

    /// Whether `id` belongs to the node set.
    pub fn contains(&self, id: NodeId) -> bool {
        self.outgoing.contains_key(&id)
    }

    /// Outgoing edges for a node, in insertion order. Unknown nodes have none.
    pub fn neighbors_out(&self, id: NodeId) -> &[Edge] {
        self.outgoing.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Node ids in the order they were supplied (duplicates collapsed).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_order.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges dropped during build because an endpoint was not a known node.
    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let keys = self.outgoing.len() * (size_of::<NodeId>() + size_of::<Vec<Edge>>());
        let edges: usize = self
            .outgoing
            .values()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();
        let order = self.node_order.capacity() * size_of::<NodeId>();

        keys + edges + order
    }
}
