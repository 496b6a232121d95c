//! pathfinder-core: per-query weighted graph index and traversal engine.
//!
//! Builds a read-only adjacency index from a flat node set and edge set,
//! then answers breadth-first traversal and Dijkstra shortest-path queries
//! against it. The index is rebuilt for every query and never shared, so
//! nothing here needs locking.
//!
//! Storage, transport and auth live outside this crate; they meet it through
//! [`GraphSource`] and the response types in [`result`].

mod error;
mod graph;
mod path;
pub mod query;
pub mod result;
mod store;
mod traversal;

pub use error::{EdgeId, QueryError, StoreError};
pub use graph::{Edge, EdgeRecord, GraphIndex, NodeId};
pub use path::{shortest_path, WeightedPath};
pub use query::{load_index, run_bfs, run_bfs_bounded, run_shortest_path};
pub use result::{format_bfs, format_path, BfsResult, BfsTreeNode, ShortestPathOut};
pub use store::{EdgeRow, GraphSource, MemoryStore, NodeRow};
pub use traversal::{bfs, bfs_bounded, BfsTraversal};
