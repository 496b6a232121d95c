use thiserror::Error;

use crate::graph::NodeId;

/// Failure of a traversal or shortest-path query.
///
/// An unreachable destination is not an error: shortest path reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The start, source or destination is not in the node set.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// A non-positive or non-finite weight was reached during relaxation.
    #[error("edge {src} -> {dst} has invalid weight {weight}; weights must be positive")]
    InvalidWeight { src: NodeId, dst: NodeId, weight: f64 },

    /// Following `src -> dst` pushed the path total past the largest `f64`.
    #[error("path distance overflows at edge {src} -> {dst}")]
    DistanceOverflow { src: NodeId, dst: NodeId },
}

/// Storage-layer identifier for an edge row.
pub type EdgeId = u64;

/// Failure of a [`MemoryStore`](crate::MemoryStore) mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("node name must not be empty")]
    EmptyName,

    #[error("node name '{0}' already exists")]
    DuplicateName(String),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("weight must be a positive number, got {0}")]
    InvalidWeight(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_messages() {
        assert_eq!(QueryError::NodeNotFound(7).to_string(), "node 7 not found");
        let err = QueryError::InvalidWeight {
            src: 1,
            dst: 2,
            weight: -1.0,
        };
        assert!(err.to_string().contains("1 -> 2"));
        let err = QueryError::DistanceOverflow { src: 2, dst: 3 };
        assert_eq!(err.to_string(), "path distance overflows at edge 2 -> 3");
    }

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::DuplicateName("A".into()).to_string(),
            "node name 'A' already exists"
        );
        assert_eq!(StoreError::EdgeNotFound(3).to_string(), "edge 3 not found");
    }
}
