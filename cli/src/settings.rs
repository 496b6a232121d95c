use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Upper bound accepted for `--max-depth`.
pub const MAX_DEPTH_LIMIT: u32 = 1024;

pub const DEFAULT_DATA_DIR: &str = "data";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

/// Process-wide settings. Each one can be set by flag or environment
/// variable; flags win.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Directory holding nodes.csv and edges.csv
    #[arg(
        long,
        global = true,
        env = "PATHFINDER_DATA_DIR",
        default_value = DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,

    /// Stop BFS expansion after this many hops (unbounded if unset)
    #[arg(
        long,
        global = true,
        env = "PATHFINDER_MAX_DEPTH",
        value_parser = clap::value_parser!(u32).range(0..=MAX_DEPTH_LIMIT as i64)
    )]
    pub max_depth: Option<u32>,

    /// JSON output style
    #[arg(
        long,
        global = true,
        env = "PATHFINDER_OUTPUT",
        value_enum,
        default_value_t = OutputFormat::Pretty
    )]
    pub output: OutputFormat,

    /// Log filter, e.g. "debug" or "pathfinder_core=debug". Overrides RUST_LOG.
    #[arg(long, global = true, env = "PATHFINDER_LOG")]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn nodes_file(&self) -> PathBuf {
        self.data_dir.join("nodes.csv")
    }

    pub fn edges_file(&self) -> PathBuf {
        self.data_dir.join("edges.csv")
    }
}
