//! CLI binary for validating resolved dependency graphs.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use corecheck_graph::DependencyNode;
use corecheck_pipeline::{is_core_artifact, CompatibilityChecker, TransformPipeline};
use corecheck_types::{Result, TransformContext};
use corecheck_version::VersionRange;

#[derive(Parser)]
#[command(name = "corecheck", version, about = "Validate dependency graphs against a required core version range")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a dependency graph for incompatible core artifacts
    Check {
        /// Path to the dependency graph JSON file
        graph: PathBuf,

        /// Required version range for core artifacts, e.g. "[3.0,)"
        #[arg(short, long)]
        range: String,
    },

    /// Show information about a dependency graph
    Info {
        /// Path to the dependency graph JSON file
        graph: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check { graph, range } => cmd_check(&graph, &range),
        Commands::Info { graph } => cmd_info(&graph),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn cmd_check(path: &Path, range: &str) -> Result<()> {
    let range = VersionRange::parse(range)?;
    let root = DependencyNode::load(path)?;
    tracing::debug!(%range, root = %root.artifact(), "checking dependency graph");

    let pipeline = TransformPipeline::new().with(CompatibilityChecker::new(range.clone()));
    let checked = pipeline.run(&root, &TransformContext::new())?;

    println!(
        "OK: {} — {} nodes checked against {}",
        checked.artifact(),
        checked.node_count(),
        range
    );
    Ok(())
}

fn cmd_info(path: &Path) -> Result<()> {
    let root = DependencyNode::load(path)?;

    println!("Root:           {}", root.artifact());
    println!("Nodes:          {}", root.node_count());
    println!("Depth:          {}", root.depth());
    println!("Core artifacts: {}", count_core_artifacts(&root));
    Ok(())
}

fn count_core_artifacts(node: &DependencyNode) -> usize {
    let own = usize::from(is_core_artifact(node.artifact()));
    own + node
        .children()
        .iter()
        .map(count_core_artifacts)
        .sum::<usize>()
}
