//! Response shapes handed to the API layer.

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;
use crate::path::WeightedPath;
use crate::traversal::BfsTraversal;

/// One row of the BFS tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsTreeNode {
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsResult {
    pub order: Vec<NodeId>,
    /// Tree rows in visitation order.
    pub tree: Vec<BfsTreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathOut {
    pub path: Vec<NodeId>,
    pub distance: f64,
}

pub fn format_bfs(traversal: &BfsTraversal) -> BfsResult {
    BfsResult {
        order: traversal.order().to_vec(),
        tree: traversal
            .iter()
            .map(|(node_id, parent_id, depth)| BfsTreeNode {
                node_id,
                parent_id,
                depth,
            })
            .collect(),
    }
}

pub fn format_path(path: WeightedPath) -> ShortestPathOut {
    ShortestPathOut {
        path: path.path,
        distance: path.distance,
    }
}

impl From<&BfsTraversal> for BfsResult {
    fn from(traversal: &BfsTraversal) -> Self {
        format_bfs(traversal)
    }
}

impl From<WeightedPath> for ShortestPathOut {
    fn from(path: WeightedPath) -> Self {
        format_path(path)
    }
}
