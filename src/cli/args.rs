use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::graph::CyclePolicy;

#[derive(Parser)]
#[command(name = "lineage", version, about = "Explore lineage graphs and highlight node origins")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./lineage.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Load an additional dataset file (TOML or JSON)
    #[arg(long = "dataset-file", global = true, value_name = "FILE")]
    pub dataset_files: Vec<PathBuf>,
    /// Override the configured cycle policy
    #[arg(long, global = true, value_enum)]
    pub cycles: Option<CyclePolicy>,
    /// Output format for query commands
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List available datasets
    Datasets,
    /// Summarize a dataset's graph
    Show {
        #[arg(long, short)]
        dataset: Option<String>,
    },
    /// List every transitive origin of a node
    Ancestors {
        node: String,
        #[arg(long, short)]
        dataset: Option<String>,
    },
    /// Show the highlight overlay for a node click
    Highlight {
        node: String,
        #[arg(long, short)]
        dataset: Option<String>,
    },
    /// Print the renderer element list as JSON
    Elements {
        #[arg(long, short)]
        dataset: Option<String>,
        /// Emit a node-link snapshot instead
        #[arg(long)]
        node_link: bool,
    },
    /// Print the stylesheet for an optional selection as JSON
    Stylesheet {
        node: Option<String>,
        #[arg(long, short)]
        dataset: Option<String>,
    },
    /// Report cycles in one dataset or all of them
    Check {
        #[arg(long, short)]
        dataset: Option<String>,
    },
    /// Interactive session reading commands from stdin
    Session {
        #[arg(long, short)]
        dataset: Option<String>,
    },
}
