// src/graph/builder.rs
//! Graph construction from a lineage table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cycles::detect_cycles;
use super::model::{Edge, Graph};
use super::table::LineageTable;
use crate::error::{LineageError, Result};

/// What to do when a built graph turns out to contain a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Keep the graph; traversal guards make queries terminate anyway.
    #[default]
    Ignore,
    /// Keep the graph but log every cycle found.
    Warn,
    /// Refuse the graph with `CycleDetected`.
    Reject,
}

/// Converts lineage tables into graphs.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph for `table`. Every key and every origin becomes a node;
    /// each `(origin, item)` pair becomes an edge `origin -> item`.
    #[must_use]
    pub fn build(table: &LineageTable) -> Graph {
        let mut nodes = BTreeSet::new();
        let mut edges = BTreeSet::new();

        for (item, origins) in table.iter() {
            nodes.insert(item.to_string());
            for origin in origins {
                nodes.insert(origin.clone());
                edges.insert(Edge::new(origin.as_str(), item));
            }
        }

        let graph = Graph::from_parts(nodes, edges);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built lineage graph"
        );
        graph
    }

    /// Builds the graph and applies `policy` to any cycles it contains.
    ///
    /// # Errors
    /// Returns `CycleDetected` under [`CyclePolicy::Reject`] when a cycle exists.
    pub fn build_checked(table: &LineageTable, policy: CyclePolicy) -> Result<Graph> {
        let graph = Self::build(table);
        if policy == CyclePolicy::Ignore {
            return Ok(graph);
        }

        let cycles = detect_cycles(&graph);
        match (policy, cycles.into_iter().next()) {
            (_, None) => Ok(graph),
            (CyclePolicy::Reject, Some(cycle)) => Err(LineageError::CycleDetected { cycle }),
            (_, Some(cycle)) => {
                warn!(cycle = %cycle.join(" -> "), "lineage graph contains a cycle");
                Ok(graph)
            }
        }
    }
}
