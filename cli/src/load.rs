//! Seed loading from `nodes.csv` / `edges.csv`.
//!
//! Loading is idempotent: node names already in the store are reused and an
//! edge is skipped when the store already has an edge with the same
//! (src, dst) pair.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use pathfinder_core::{MemoryStore, NodeId};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

#[derive(Debug, Deserialize)]
struct NodeCsvRow {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EdgeCsvRow {
    src_name: String,
    dst_name: String,
    // Parsed by hand so one bad row is skipped instead of failing the load.
    weight: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub nodes_created: usize,
    pub nodes_skipped: usize,
    pub edges_created: usize,
    pub edges_skipped: usize,
    /// Edge rows naming an unknown node or carrying an invalid weight.
    pub edges_rejected: usize,
}

/// Load both seed files from the configured data directory.
pub fn load_seed(store: &mut MemoryStore, settings: &Settings) -> Result<LoadSummary> {
    let nodes_path = settings.nodes_file();
    let edges_path = settings.edges_file();

    let nodes = open(&nodes_path)?;
    let edges = open(&edges_path)?;

    let mut summary = LoadSummary::default();
    load_nodes(store, nodes, &mut summary)
        .with_context(|| format!("failed to load {}", nodes_path.display()))?;
    load_edges(store, edges, &mut summary)
        .with_context(|| format!("failed to load {}", edges_path.display()))?;

    tracing::info!(
        nodes_created = summary.nodes_created,
        nodes_skipped = summary.nodes_skipped,
        edges_created = summary.edges_created,
        edges_skipped = summary.edges_skipped,
        edges_rejected = summary.edges_rejected,
        "seed data loaded"
    );
    Ok(summary)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("seed file {} not found", path.display()))
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

pub fn load_nodes<R: Read>(
    store: &mut MemoryStore,
    input: R,
    summary: &mut LoadSummary,
) -> Result<()> {
    for row in reader(input).deserialize::<NodeCsvRow>() {
        let row = row?;
        if row.name.is_empty() {
            continue;
        }
        if store.node_by_name(&row.name).is_some() {
            summary.nodes_skipped += 1;
            continue;
        }
        store.create_node(&row.name)?;
        summary.nodes_created += 1;
    }
    Ok(())
}

pub fn load_edges<R: Read>(
    store: &mut MemoryStore,
    input: R,
    summary: &mut LoadSummary,
) -> Result<()> {
    let mut pairs: HashSet<(NodeId, NodeId)> = store
        .list_edges_detailed()
        .map(|e| (e.src_id, e.dst_id))
        .collect();

    for row in reader(input).deserialize::<EdgeCsvRow>() {
        let row = row?;

        let Some(src) = store.node_by_name(&row.src_name).map(|n| n.id) else {
            tracing::warn!(node = %row.src_name, "source node not found, skipping edge");
            summary.edges_rejected += 1;
            continue;
        };
        let Some(dst) = store.node_by_name(&row.dst_name).map(|n| n.id) else {
            tracing::warn!(node = %row.dst_name, "destination node not found, skipping edge");
            summary.edges_rejected += 1;
            continue;
        };

        if pairs.contains(&(src, dst)) {
            summary.edges_skipped += 1;
            continue;
        }

        let created = row
            .weight
            .parse::<f64>()
            .map_err(anyhow::Error::from)
            .and_then(|w| Ok(store.create_edge(src, dst, w)?));
        match created {
            Ok(_) => {
                pairs.insert((src, dst));
                summary.edges_created += 1;
            }
            Err(e) => {
                tracing::warn!(
                    src = %row.src_name,
                    dst = %row.dst_name,
                    weight = %row.weight,
                    error = %e,
                    "invalid weight, skipping edge"
                );
                summary.edges_rejected += 1;
            }
        }
    }
    Ok(())
}
