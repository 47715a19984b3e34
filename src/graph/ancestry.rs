// src/graph/ancestry.rs
//! Transitive ancestor queries and the highlight overlay derived from them.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use super::model::{Edge, Graph};
use crate::error::{LineageError, Result};

/// Node and edge sets to emphasize after a node is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightResult {
    pub selected_node: String,
    /// Every node with a directed path to `selected_node`, excluding itself.
    pub ancestor_nodes: BTreeSet<String>,
    /// Edges of the graph whose endpoints are both highlighted.
    pub highlighted_edges: BTreeSet<Edge>,
}

impl HighlightResult {
    /// Ancestors plus the selected node.
    #[must_use]
    pub fn highlighted_nodes(&self) -> BTreeSet<String> {
        let mut nodes = self.ancestor_nodes.clone();
        nodes.insert(self.selected_node.clone());
        nodes
    }

    #[must_use]
    pub fn is_highlighted(&self, node: &str) -> bool {
        node == self.selected_node || self.ancestor_nodes.contains(node)
    }
}

/// Reachability queries over a built graph.
pub struct AncestryEngine;

impl AncestryEngine {
    /// Collects every ancestor of `node` by breadth-first traversal over
    /// incoming edges. Each node is visited at most once, so the walk is
    /// O(V + E) and terminates even if the graph contains a cycle.
    ///
    /// # Errors
    /// Returns `NotFound` if `node` is not in `graph`.
    pub fn ancestors_of(graph: &Graph, node: &str) -> Result<BTreeSet<String>> {
        if !graph.contains(node) {
            return Err(LineageError::not_found(node));
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(node);
        queue.push_back(node);

        while let Some(current) = queue.pop_front() {
            for parent in graph.parents_of(current) {
                if visited.insert(parent.as_str()) {
                    queue.push_back(parent.as_str());
                }
            }
        }

        // The start node is pre-marked, so a cycle through it never adds it.
        visited.remove(node);
        let ancestors: BTreeSet<String> = visited.into_iter().map(str::to_string).collect();
        debug!(node, ancestors = ancestors.len(), "computed ancestors");
        Ok(ancestors)
    }

    /// Computes the highlight overlay for a click on `node`.
    ///
    /// # Errors
    /// Returns `NotFound` if `node` is not in `graph`.
    pub fn highlight_for(graph: &Graph, node: &str) -> Result<HighlightResult> {
        let ancestor_nodes = Self::ancestors_of(graph, node)?;
        let in_set = |n: &str| n == node || ancestor_nodes.contains(n);

        let highlighted_edges = graph
            .edges()
            .iter()
            .filter(|e| in_set(e.ancestor.as_str()) && in_set(e.descendant.as_str()))
            .cloned()
            .collect();

        Ok(HighlightResult {
            selected_node: node.to_string(),
            ancestor_nodes,
            highlighted_edges,
        })
    }
}
