//! Storage-side collaborator: the seam the query layer reads from, plus an
//! in-memory store that enforces the node/edge rules of the persisted tables.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{EdgeId, StoreError};
use crate::graph::{EdgeRecord, NodeId};

/// Supplies the full node and edge set for one query.
///
/// Implementations must return a consistent snapshot: every edge endpoint
/// should be in the node list.
pub trait GraphSource {
    fn list_nodes(&self) -> Vec<NodeId>;
    fn list_edges(&self) -> Vec<EdgeRecord>;
}

/// A stored node row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRow {
    pub id: NodeId,
    pub name: String,
}

/// A stored edge row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub id: EdgeId,
    pub src_id: NodeId,
    pub dst_id: NodeId,
    pub weight: f64,
}

impl EdgeRow {
    pub fn record(&self) -> EdgeRecord {
        EdgeRecord::new(self.src_id, self.dst_id, self.weight)
    }
}

/// In-memory node/edge tables.
///
/// Node names are unique, edge weights are positive, and deleting a node
/// deletes every edge that touches it. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    nodes: BTreeMap<NodeId, NodeRow>,
    names: HashMap<String, NodeId>,
    edges: BTreeMap<EdgeId, EdgeRow>,
    next_node_id: NodeId,
    next_edge_id: EdgeId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            names: HashMap::new(),
            edges: BTreeMap::new(),
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    /// Insert a node. The name is trimmed and must be non-empty and unique.
    pub fn create_node(&mut self, name: &str) -> Result<NodeRow, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.names.contains_key(name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let id = self.next_node_id;
        self.next_node_id += 1;

        let row = NodeRow {
            id,
            name: name.to_string(),
        };
        self.names.insert(row.name.clone(), id);
        self.nodes.insert(id, row.clone());
        Ok(row)
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRow> {
        self.nodes.get(&id)
    }

    pub fn node_by_name(&self, name: &str) -> Option<&NodeRow> {
        self.names.get(name.trim()).and_then(|id| self.nodes.get(id))
    }

    /// Node rows ordered by id.
    pub fn list_nodes_detailed(&self) -> impl Iterator<Item = &NodeRow> {
        self.nodes.values()
    }

    /// Delete a node and every edge that starts or ends at it.
    /// Returns the number of edges removed with it.
    pub fn delete_node(&mut self, id: NodeId) -> Result<usize, StoreError> {
        let row = self.nodes.remove(&id).ok_or(StoreError::NodeNotFound(id))?;
        self.names.remove(&row.name);

        let before = self.edges.len();
        self.edges.retain(|_, e| e.src_id != id && e.dst_id != id);
        let removed = before - self.edges.len();

        tracing::debug!(node = id, edges_removed = removed, "deleted node");
        Ok(removed)
    }

    /// Insert a directed edge. Both endpoints must exist and the weight must
    /// be positive and finite. Parallel edges are allowed.
    pub fn create_edge(
        &mut self,
        src_id: NodeId,
        dst_id: NodeId,
        weight: f64,
    ) -> Result<EdgeRow, StoreError> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(StoreError::InvalidWeight(weight));
        }
        for id in [src_id, dst_id] {
            if !self.nodes.contains_key(&id) {
                return Err(StoreError::NodeNotFound(id));
            }
        }

        let id = self.next_edge_id;
        self.next_edge_id += 1;

        let row = EdgeRow {
            id,
            src_id,
            dst_id,
            weight,
        };
        self.edges.insert(id, row.clone());
        Ok(row)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeRow> {
        self.edges.get(&id)
    }

    /// Edge rows ordered by id.
    pub fn list_edges_detailed(&self) -> impl Iterator<Item = &EdgeRow> {
        self.edges.values()
    }

    pub fn delete_edge(&mut self, id: EdgeId) -> Result<EdgeRow, StoreError> {
        self.edges.remove(&id).ok_or(StoreError::EdgeNotFound(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSource for MemoryStore {
    fn list_nodes(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    fn list_edges(&self) -> Vec<EdgeRecord> {
        self.edges.values().map(EdgeRow::record).collect()
    }
}
