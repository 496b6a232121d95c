use pathfinder_core::{EdgeRecord, GraphIndex, NodeId};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: pathfinder-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Ternary tree (deep paths, single route to each node)");
        println!("  smallworld  Ring lattice + weighted shortcuts");
        println!("  random      Uniform random weighted edges");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default node_count: 1000000");
        return;
    }

    if node_count < 32 {
        eprintln!("node_count must be at least 32");
        return;
    }

    println!("pathfinder-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Workload)> = match mode {
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "random" => vec![("Uniform random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Ternary tree", gen_tree as fn(u64) -> Workload),
            ("Small-world ring", gen_small_world),
            ("Uniform random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

/// Flat node and edge lists, the same shape the storage layer hands over.
struct Workload {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeRecord>,
}

impl Workload {
    fn with_nodes(node_count: u64, edge_capacity: usize) -> Self {
        Self {
            nodes: (0..node_count).collect(),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    fn push(&mut self, src: NodeId, dst: NodeId, weight: f64) {
        self.edges.push(EdgeRecord::new(src, dst, weight));
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Workload, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let workload = generator(node_count);
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        workload.nodes.len(),
        workload.edges.len()
    );

    // Each query rebuilds the index, so build cost is part of every request.
    let t = Instant::now();
    let graph = GraphIndex::build(workload.nodes, workload.edges);
    println!(
        "Index built in {:.1}ms (~{:.0}MB)",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    match pathfinder_core::bfs(&graph, 0) {
        Ok(result) => {
            let max_depth = result.iter().map(|(_, _, d)| d).max().unwrap_or(0);
            println!(
                "BFS from 0: {} visited, max depth {} in {:.1}ms",
                result.len(),
                max_depth,
                t.elapsed().as_secs_f64() * 1000.0
            );
        }
        Err(e) => println!("BFS from 0: {}", e),
    }

    let far_node = graph.node_count() as u64 - 1;
    let t = Instant::now();
    let path = pathfinder_core::shortest_path(&graph, 0, far_node);
    let elapsed = t.elapsed();
    match path {
        Ok(Some(p)) => println!(
            "Shortest path 0 → {}: {} hops, distance {:.2} in {:.1}ms",
            far_node,
            p.hops(),
            p.distance,
            elapsed.as_secs_f64() * 1000.0
        ),
        Ok(None) => println!(
            "Shortest path 0 → {}: no path ({:.1}ms)",
            far_node,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => println!("Shortest path 0 → {}: {}", far_node, e),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, O(nodes + edges)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Edge weight in (0.5, 10.5].
    fn weight(&mut self) -> f64 {
        10.5 - self.next_f64() * 10.0
    }
}

/// Ternary tree rooted at 0. One route to every node, depth ~log3(n).
fn gen_tree(node_count: u64) -> Workload {
    let mut w = Workload::with_nodes(node_count, node_count as usize);
    let mut rng = FastRng::new(42);

    for child in 1..node_count {
        let parent = (child - 1) / 3;
        w.push(parent, child, rng.weight());
    }

    w
}

/// Ring lattice where each node links to its K successors, plus a small
/// share of long-range shortcuts. Heavy shortcuts keep many equal-hop
/// routes with different weights.
fn gen_small_world(node_count: u64) -> Workload {
    let k = 6u64;
    let p = 0.05f64;
    let mut w = Workload::with_nodes(node_count, (node_count * k) as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let weight = rng.weight();
            if rng.next_f64() < p {
                let shortcut = rng.next(node_count);
                if shortcut != i {
                    w.push(i, shortcut, weight);
                    continue;
                }
            }
            w.push(i, (i + j) % node_count, weight);
        }
    }

    w
}

/// Uniform random edges, ~8 per node on average.
fn gen_random(node_count: u64) -> Workload {
    let target_edges = node_count * 8;
    let mut w = Workload::with_nodes(node_count, target_edges as usize);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            w.push(from, to, rng.weight());
        }
    }

    w
}

/// Two dense clusters joined by a chain of bridge nodes. Every path from
/// the first cluster to the second runs through the bridge.
fn gen_barbell(node_count: u64) -> Workload {
    let bridge_len = 10u64;
    let cluster = (node_count - bridge_len) / 2;
    let fanout = 20u64.min(cluster - 1);
    let mut w = Workload::with_nodes(node_count, (cluster * fanout * 2 + bridge_len + 1) as usize);
    let mut rng = FastRng::new(99999);

    let b_start = cluster + bridge_len;
    for base in [0, b_start] {
        for i in 0..cluster {
            for _ in 0..fanout {
                let target = rng.next(cluster);
                if target != i {
                    w.push(base + i, base + target, rng.weight());
                }
            }
        }
    }

    // Bridge: last node of A → bridge chain → first node of B.
    let mut prev = cluster - 1;
    for id in cluster..=b_start {
        w.push(prev, id, rng.weight());
        prev = id;
    }

    // Odd leftover node, if any, hangs off the end of B.
    for id in (b_start + cluster)..node_count {
        w.push(id - 1, id, rng.weight());
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_positive() {
        let mut rng = FastRng::new(1);
        for _ in 0..10_000 {
            let w = rng.weight();
            assert!(w > 0.5 && w <= 10.5);
        }
    }

    #[test]
    fn test_generators_reach_far_node() {
        for generator in [gen_tree, gen_small_world, gen_barbell] {
            let workload = generator(200);
            let graph = GraphIndex::build(workload.nodes, workload.edges);
            assert_eq!(graph.dangling_edges(), 0);
            let path = pathfinder_core::shortest_path(&graph, 0, 199).unwrap();
            assert!(path.is_some());
        }
    }
}
