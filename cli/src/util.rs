use std::io::Write;

use anyhow::{bail, Result};
use pathfinder_core::{MemoryStore, NodeId};
use serde::Serialize;

use crate::settings::OutputFormat;

/// Resolve a node reference: try the node name first, then a numeric id
/// that must exist in the store.
pub fn resolve_node(store: &MemoryStore, reference: &str) -> Result<NodeId> {
    if let Some(node) = store.node_by_name(reference) {
        return Ok(node.id);
    }
    match reference.trim().parse::<NodeId>() {
        Ok(id) if store.node(id).is_some() => Ok(id),
        _ => bail!("node '{}' not found", reference),
    }
}

/// Write `value` as JSON to stdout, followed by a newline.
pub fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, value, format)
}

pub fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, value)?,
        OutputFormat::Compact => serde_json::to_writer(&mut *out, value)?,
    }
    writeln!(out)?;
    Ok(())
}
