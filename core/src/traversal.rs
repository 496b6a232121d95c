use std::collections::{HashMap, VecDeque};

use crate::error::QueryError;
use crate::graph::{GraphIndex, NodeId};

/// Breadth-first traversal from a single start node.
///
/// Holds the visit order plus, for every visited node, the parent it was
/// first discovered from and its hop distance from the start.
#[derive(Debug, Clone)]
pub struct BfsTraversal {
    start: NodeId,
    order: Vec<NodeId>,
    // node → (parent, depth). The start node has no parent.
    tree: HashMap<NodeId, (Option<NodeId>, u32)>,
}

impl BfsTraversal {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Nodes in visitation order. Each visited node appears exactly once.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.tree.contains_key(&id)
    }

    /// Parent of a visited node. `None` for the start node and for nodes
    /// that were not reached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(&id).and_then(|&(parent, _)| parent)
    }

    /// Hop distance from the start, or `None` if the node was not reached.
    pub fn depth(&self, id: NodeId) -> Option<u32> {
        self.tree.get(&id).map(|&(_, depth)| depth)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(node, parent, depth)` for every visited node, in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<NodeId>, u32)> + '_ {
        self.order.iter().map(move |&id| {
            let (parent, depth) = self.tree[&id];
            (id, parent, depth)
        })
    }
}

/// Full breadth-first traversal of everything reachable from `start`.
///
/// Neighbors are discovered in edge insertion order and a node's parent is
/// the first node it was discovered from.
pub fn bfs(graph: &GraphIndex, start: NodeId) -> Result<BfsTraversal, QueryError> {
    bfs_bounded(graph, start, None)
}

/// Breadth-first traversal that stops expanding at `max_depth` hops.
///
/// Nodes at exactly `max_depth` are visited but their edges are not
/// followed. `None` means no bound.
pub fn bfs_bounded(
    graph: &GraphIndex,
    start: NodeId,
    max_depth: Option<u32>,
) -> Result<BfsTraversal, QueryError> {
    if !graph.contains(start) {
        return Err(QueryError::NodeNotFound(start));
    }

    let mut tree: HashMap<NodeId, (Option<NodeId>, u32)> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut order = Vec::new();

    tree.insert(start, (None, 0));
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        order.push(current);

        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for edge in graph.neighbors_out(current) {
            if !tree.contains_key(&edge.target) {
                tree.insert(edge.target, (Some(current), depth + 1));
                queue.push_back((edge.target, depth + 1));
            }
        }
    }

    Ok(BfsTraversal { start, order, tree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeRecord;

    fn build(nodes: impl IntoIterator<Item = NodeId>, edges: &[(NodeId, NodeId)]) -> GraphIndex {
        GraphIndex::build(
            nodes,
            edges.iter().map(|&(s, d)| EdgeRecord::new(s, d, 1.0)),
        )
    }

    fn make_chain(n: u64) -> GraphIndex {
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        build(0..n, &edges)
    }

    fn make_star(center: u64, leaves: u64) -> GraphIndex {
        let edges: Vec<_> = (1..=leaves).map(|i| (center, i)).collect();
        build(std::iter::once(center).chain(1..=leaves), &edges)
    }

    fn make_cycle(n: u64) -> GraphIndex {
        let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        build(0..n, &edges)
    }

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(6);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.order(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(result.depth(5), Some(5));
        assert_eq!(result.parent(5), Some(4));
    }

    #[test]
    fn test_bfs_scenario_order_and_tree() {
        let g = GraphIndex::build(
            [1, 2, 3, 4],
            [
                EdgeRecord::new(1, 2, 1.0),
                EdgeRecord::new(2, 3, 2.0),
                EdgeRecord::new(1, 3, 5.0),
                EdgeRecord::new(3, 4, 1.0),
            ],
        );
        let result = bfs(&g, 1).unwrap();
        assert_eq!(result.order(), &[1, 2, 3, 4]);
        let tree: Vec<_> = result.iter().collect();
        assert_eq!(
            tree,
            vec![
                (1, None, 0),
                (2, Some(1), 1),
                (3, Some(1), 1),
                (4, Some(3), 2),
            ]
        );
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(0, 100);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.len(), 101);
        assert!(result.order()[1..].iter().all(|&n| result.depth(n) == Some(1)));
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_bfs_directed_only() {
        let g = make_chain(3);
        let result = bfs(&g, 2).unwrap();
        assert_eq!(result.order(), &[2]);
        assert!(!result.contains(0));
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_chain(3);
        let err = bfs(&g, 999).unwrap_err();
        assert_eq!(err, QueryError::NodeNotFound(999));
    }

    #[test]
    fn test_bfs_empty_graph() {
        let g = GraphIndex::default();
        assert!(bfs(&g, 0).is_err());
    }

    #[test]
    fn test_bfs_isolated_start() {
        let g = build([1, 2], &[]);
        let result = bfs(&g, 1).unwrap();
        assert_eq!(result.order(), &[1]);
        assert_eq!(result.parent(1), None);
        assert_eq!(result.depth(1), Some(0));
    }

    #[test]
    fn test_bfs_self_loop() {
        let g = build([0], &[(0, 0)]);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.order(), &[0]);
    }

    #[test]
    fn test_bfs_parallel_edges() {
        let g = build([0, 1], &[(0, 1), (0, 1), (0, 1)]);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.order(), &[0, 1]);
        assert_eq!(result.depth(1), Some(1));
    }

    #[test]
    fn test_bfs_first_discovered_parent_wins() {
        // 0 → 1, 0 → 2, both reach 3 at depth 2. 1 is expanded first.
        let g = build([0, 1, 2, 3], &[(0, 1), (0, 2), (2, 3), (1, 3)]);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.parent(3), Some(1));

        let g = build([0, 1, 2, 3], &[(0, 2), (0, 1), (1, 3), (2, 3)]);
        let result = bfs(&g, 0).unwrap();
        assert_eq!(result.parent(3), Some(2));
    }

    #[test]
    fn test_bfs_unreachable_absent() {
        let g = build([0, 1, 2], &[(0, 1)]);
        let result = bfs(&g, 0).unwrap();
        assert!(!result.contains(2));
        assert_eq!(result.depth(2), None);
    }

    #[test]
    fn test_bfs_bounded_depth() {
        let g = make_chain(10);
        let result = bfs_bounded(&g, 0, Some(3)).unwrap();
        assert_eq!(result.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_bfs_bounded_depth_zero() {
        let g = make_chain(5);
        let result = bfs_bounded(&g, 0, Some(0)).unwrap();
        assert_eq!(result.order(), &[0]);
    }

    #[test]
    fn test_bfs_depths_non_decreasing() {
        let g = build(
            0..8,
            &[(0, 4), (0, 1), (4, 5), (1, 2), (2, 3), (5, 6), (6, 7), (3, 0)],
        );
        let result = bfs(&g, 0).unwrap();
        let depths: Vec<u32> = result.iter().map(|(_, _, d)| d).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}
