// src/cli/handlers.rs
//! Handlers for each subcommand.

use anyhow::Result;
use std::io;

use super::args::Cli;
use super::session_loop;
use crate::config::{Config, OutputFormat};
use crate::datasets::DatasetCatalog;
use crate::exit::LineageExit;
use crate::graph::cycles::detect_cycles;
use crate::graph::{AncestryEngine, CyclePolicy, Graph, GraphBuilder};
use crate::render;
use crate::reporting;
use crate::session::ViewSession;

/// Everything a handler needs, resolved once from flags and config.
pub struct Context {
    pub catalog: DatasetCatalog,
    pub policy: CyclePolicy,
    pub format: OutputFormat,
}

impl Context {
    /// Combines command-line overrides with the loaded config.
    ///
    /// # Errors
    /// Returns error if a dataset file fails to load or the default is unknown.
    pub fn new(cli: &Cli, config: &Config) -> Result<Self> {
        Ok(Self {
            catalog: config.catalog(&cli.dataset_files)?,
            policy: cli.cycles.unwrap_or(config.cycle_policy),
            format: cli.format.unwrap_or(config.output.format),
        })
    }

    fn graph(&self, dataset: Option<&str>) -> Result<(String, Graph)> {
        let name = self.catalog.resolve(dataset).to_string();
        let graph = GraphBuilder::build_checked(self.catalog.get(&name)?, self.policy)?;
        Ok((name, graph))
    }

    fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// # Errors
/// Returns error if JSON output fails.
pub fn handle_datasets(ctx: &Context) -> Result<LineageExit> {
    if ctx.json() {
        reporting::print_json(ctx.catalog.names())?;
    } else {
        reporting::print_datasets(&ctx.catalog);
    }
    Ok(LineageExit::Success)
}

/// # Errors
/// Returns error if the dataset cannot be built.
pub fn handle_show(ctx: &Context, dataset: Option<&str>) -> Result<LineageExit> {
    let (name, graph) = ctx.graph(dataset)?;
    if ctx.json() {
        reporting::print_json(&render::node_link(&graph))?;
    } else {
        reporting::print_graph_summary(&name, &graph);
    }
    Ok(LineageExit::Success)
}

/// # Errors
/// Returns error if the dataset cannot be built or the node is unknown.
pub fn handle_ancestors(ctx: &Context, node: &str, dataset: Option<&str>) -> Result<LineageExit> {
    let (_, graph) = ctx.graph(dataset)?;
    let ancestors = AncestryEngine::ancestors_of(&graph, node)?;
    if ctx.json() {
        reporting::print_json(&ancestors)?;
    } else {
        reporting::print_ancestors(node, &ancestors);
    }
    Ok(LineageExit::Success)
}

/// # Errors
/// Returns error if the dataset cannot be built or the node is unknown.
pub fn handle_highlight(ctx: &Context, node: &str, dataset: Option<&str>) -> Result<LineageExit> {
    let (_, graph) = ctx.graph(dataset)?;
    let highlight = AncestryEngine::highlight_for(&graph, node)?;
    if ctx.json() {
        reporting::print_json(&highlight)?;
    } else {
        reporting::print_highlight(&highlight);
    }
    Ok(LineageExit::Success)
}

/// # Errors
/// Returns error if the dataset cannot be built.
pub fn handle_elements(ctx: &Context, dataset: Option<&str>, node_link: bool) -> Result<LineageExit> {
    let (_, graph) = ctx.graph(dataset)?;
    if node_link {
        reporting::print_json(&render::node_link(&graph))?;
    } else {
        reporting::print_json(&render::elements(&graph))?;
    }
    Ok(LineageExit::Success)
}

/// # Errors
/// Returns error if the dataset cannot be built or the node is unknown.
pub fn handle_stylesheet(
    ctx: &Context,
    node: Option<&str>,
    dataset: Option<&str>,
) -> Result<LineageExit> {
    let mut session = ViewSession::open(ctx.catalog.clone(), dataset, ctx.policy)?;
    if let Some(node) = node {
        session.click(node)?;
    }
    reporting::print_json(&session.stylesheet())?;
    Ok(LineageExit::Success)
}

/// Checks one dataset, or every dataset when none is named. Cycles are
/// reported regardless of the configured policy.
///
/// # Errors
/// Returns error if a named dataset is unknown.
pub fn handle_check(ctx: &Context, dataset: Option<&str>) -> Result<LineageExit> {
    let names: Vec<String> = match dataset {
        Some(name) => vec![name.to_string()],
        None => ctx.catalog.names().to_vec(),
    };

    let mut total = 0;
    for name in &names {
        let graph = GraphBuilder::build(ctx.catalog.get(name)?);
        total += reporting::print_cycles(name, &detect_cycles(&graph));
    }

    Ok(if total == 0 {
        LineageExit::Success
    } else {
        LineageExit::CycleDetected
    })
}

/// # Errors
/// Returns error if the session cannot be opened or stdio fails.
pub fn handle_session(ctx: &Context, dataset: Option<&str>) -> Result<LineageExit> {
    let mut session = ViewSession::open(ctx.catalog.clone(), dataset, ctx.policy)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session_loop::run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(LineageExit::Success)
}
