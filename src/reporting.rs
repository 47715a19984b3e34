// src/reporting.rs
//! Terminal and JSON output for graphs, highlights, and cycle checks.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::datasets::DatasetCatalog;
use crate::graph::{Graph, HighlightResult};

/// Prints any serializable value as pretty JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_datasets(catalog: &DatasetCatalog) {
    for name in catalog.names() {
        if name == catalog.default_name() {
            println!("{} {}", name.bold(), "(default)".dimmed());
        } else {
            println!("{name}");
        }
    }
}

pub fn print_graph_summary(dataset: &str, graph: &Graph) {
    println!(
        "{} {} nodes, {} edges",
        dataset.bold(),
        graph.node_count(),
        graph.edge_count()
    );
    println!("{} {}", "roots:".dimmed(), graph.roots().join(", "));
    for edge in graph.edges() {
        println!("  {} -> {}", edge.ancestor, edge.descendant);
    }
}

pub fn print_ancestors(node: &str, ancestors: &BTreeSet<String>) {
    if ancestors.is_empty() {
        println!("{} has no recorded origins", node.bold());
        return;
    }
    println!("{} {}", node.bold(), pluralize(ancestors.len(), "ancestor").dimmed());
    for a in ancestors {
        println!("  {}", a.blue());
    }
}

pub fn print_highlight(h: &HighlightResult) {
    println!("{} {}", "selected:".dimmed(), h.selected_node.red().bold());
    for a in &h.ancestor_nodes {
        println!("  {} {}", "ancestor".dimmed(), a.blue());
    }
    for e in &h.highlighted_edges {
        println!("  {} {} -> {}", "edge".dimmed(), e.ancestor, e.descendant.yellow());
    }
}

/// Prints a cycle report and returns the number of cycles shown.
pub fn print_cycles(dataset: &str, cycles: &[Vec<String>]) -> usize {
    if cycles.is_empty() {
        println!("{} {}", "ok".green().bold(), dataset);
        return 0;
    }
    println!(
        "{} {}: {}",
        "cycle".red().bold(),
        dataset,
        pluralize(cycles.len(), "cycle")
    );
    for cycle in cycles {
        println!("  {}", cycle.join(" -> "));
    }
    cycles.len()
}

#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
