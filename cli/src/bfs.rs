use anyhow::{Context, Result};
use pathfinder_core::{BfsResult, MemoryStore};

use crate::settings::Settings;
use crate::util::{print_json, resolve_node};

pub fn traverse(store: &MemoryStore, settings: &Settings, start: &str) -> Result<BfsResult> {
    let start_id = resolve_node(store, start)?;
    pathfinder_core::run_bfs_bounded(store, start_id, settings.max_depth)
        .with_context(|| format!("bfs from '{}' failed", start))
}

pub fn run(store: &MemoryStore, settings: &Settings, start: &str) -> Result<()> {
    let result = traverse(store, settings, start)?;
    print_json(&result, settings.output)
}
