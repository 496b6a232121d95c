use anyhow::Result;
use pathfinder_core::MemoryStore;
use serde::Serialize;

use crate::load::LoadSummary;
use crate::settings::Settings;
use crate::util::print_json;

#[derive(Debug, Serialize)]
pub struct Status {
    pub data_dir: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub index_memory_bytes: usize,
    pub seed: LoadSummary,
}

pub fn collect(store: &MemoryStore, settings: &Settings, seed: LoadSummary) -> Status {
    let index = pathfinder_core::load_index(store);
    Status {
        data_dir: settings.data_dir.display().to_string(),
        node_count: index.node_count(),
        edge_count: index.edge_count(),
        index_memory_bytes: index.memory_usage(),
        seed,
    }
}

pub fn run(store: &MemoryStore, settings: &Settings, seed: LoadSummary) -> Result<()> {
    print_json(&collect(store, settings, seed), settings.output)
}
