use anyhow::{bail, Context, Result};
use pathfinder_core::{MemoryStore, ShortestPathOut};

use crate::settings::Settings;
use crate::util::{print_json, resolve_node};

pub fn find(store: &MemoryStore, src: &str, dst: &str) -> Result<ShortestPathOut> {
    let src_id = resolve_node(store, src)?;
    let dst_id = resolve_node(store, dst)?;

    match pathfinder_core::run_shortest_path(store, src_id, dst_id)
        .with_context(|| format!("shortest path '{}' -> '{}' failed", src, dst))?
    {
        Some(found) => Ok(found),
        None => bail!("no path from '{}' to '{}'", src, dst),
    }
}

pub fn run(store: &MemoryStore, settings: &Settings, src: &str, dst: &str) -> Result<()> {
    let found = find(store, src, dst)?;
    print_json(&found, settings.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        for name in ["A", "B", "C", "D", "E"] {
            store.create_node(name).unwrap();
        }
        store.create_edge(1, 2, 1.0).unwrap();
        store.create_edge(2, 3, 2.0).unwrap();
        store.create_edge(1, 3, 5.0).unwrap();
        store.create_edge(3, 4, 1.0).unwrap();
        store
    }

    #[test]
    fn test_find_by_name() {
        let found = find(&store(), "A", "D").unwrap();
        assert_eq!(found.path, vec![1, 2, 3, 4]);
        assert_eq!(found.distance, 4.0);
    }

    #[test]
    fn test_find_unreachable() {
        let err = find(&store(), "A", "E").unwrap_err();
        assert_eq!(err.to_string(), "no path from 'A' to 'E'");
    }

    #[test]
    fn test_find_unknown_node() {
        let err = find(&store(), "A", "Q").unwrap_err();
        assert_eq!(err.to_string(), "node 'Q' not found");
    }
}
