//! Query entry points for the API layer.
//!
//! Each call pulls the full node and edge set from the source, builds a
//! fresh [`GraphIndex`], runs one algorithm and formats the result. Nothing
//! is cached between calls.

use std::time::Instant;

use crate::error::QueryError;
use crate::graph::{GraphIndex, NodeId};
use crate::path::shortest_path;
use crate::result::{format_bfs, format_path, BfsResult, ShortestPathOut};
use crate::store::GraphSource;
use crate::traversal::bfs_bounded;

/// Snapshot the source into a fresh index.
pub fn load_index<S: GraphSource + ?Sized>(source: &S) -> GraphIndex {
    GraphIndex::build(source.list_nodes(), source.list_edges())
}

/// Breadth-first order and tree from `start`.
pub fn run_bfs<S: GraphSource + ?Sized>(
    source: &S,
    start: NodeId,
) -> Result<BfsResult, QueryError> {
    run_bfs_bounded(source, start, None)
}

/// Like [`run_bfs`], but edges are not followed past `max_depth` hops.
pub fn run_bfs_bounded<S: GraphSource + ?Sized>(
    source: &S,
    start: NodeId,
    max_depth: Option<u32>,
) -> Result<BfsResult, QueryError> {
    let span = tracing::debug_span!("bfs", start, ?max_depth);
    let _enter = span.enter();
    let t = Instant::now();

    let graph = load_index(source);
    let traversal = bfs_bounded(&graph, start, max_depth)?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        visited = traversal.len(),
        elapsed_us = t.elapsed().as_micros() as u64,
        "bfs complete"
    );
    Ok(format_bfs(&traversal))
}

/// Minimum-weight path from `src` to `dst`. `Ok(None)` means no path exists.
pub fn run_shortest_path<S: GraphSource + ?Sized>(
    source: &S,
    src: NodeId,
    dst: NodeId,
) -> Result<Option<ShortestPathOut>, QueryError> {
    let span = tracing::debug_span!("shortest_path", src, dst);
    let _enter = span.enter();
    let t = Instant::now();

    let graph = load_index(source);
    let found = shortest_path(&graph, src, dst)?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        reachable = found.is_some(),
        elapsed_us = t.elapsed().as_micros() as u64,
        "shortest path complete"
    );
    Ok(found.map(format_path))
}
