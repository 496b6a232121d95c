//! pathfinder: load a seed graph and query it from the command line.
//!
//! Every invocation loads `nodes.csv` / `edges.csv` from the data directory
//! into an in-memory store, then runs one command against it. Results are
//! printed as JSON; not-found and unreachable cases exit non-zero.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pathfinder_core::MemoryStore;
use tracing_subscriber::EnvFilter;

mod bfs;
mod load;
mod path;
mod settings;
mod status;
mod util;

use settings::{Settings, DEFAULT_LOG_FILTER};

#[derive(Debug, Parser)]
#[command(name = "pathfinder", version, about = "Weighted graph BFS and shortest path queries")]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the seed files and print what was created or skipped
    Load,
    /// Breadth-first order and tree from a start node (name or id)
    Bfs { start: String },
    /// Minimum-weight path between two nodes (name or id)
    Path { src: String, dst: String },
    /// Node/edge counts and index size
    Status,
}

fn init_tracing(settings: &Settings) {
    let filter = match &settings.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.settings);

    let mut store = MemoryStore::new();
    let seed = load::load_seed(&mut store, &cli.settings)?;

    match &cli.command {
        Command::Load => util::print_json(&seed, cli.settings.output),
        Command::Bfs { start } => bfs::run(&store, &cli.settings, start),
        Command::Path { src, dst } => path::run(&store, &cli.settings, src, dst),
        Command::Status => status::run(&store, &cli.settings, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_with_settings() {
        let cli = Cli::try_parse_from([
            "pathfinder",
            "path",
            "A",
            "D",
            "--data-dir",
            "seed",
            "--output",
            "compact",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Path { ref src, ref dst } if src == "A" && dst == "D"
        ));
        assert_eq!(cli.settings.output, OutputFormat::Compact);
        assert_eq!(cli.settings.data_dir, std::path::PathBuf::from("seed"));
    }

    #[test]
    fn test_max_depth_bounds() {
        let ok = Cli::try_parse_from(["pathfinder", "bfs", "A", "--max-depth", "3"]).unwrap();
        assert_eq!(ok.settings.max_depth, Some(3));
        assert!(Cli::try_parse_from(["pathfinder", "bfs", "A", "--max-depth", "5000"]).is_err());
    }
}
