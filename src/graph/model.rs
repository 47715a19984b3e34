// src/graph/model.rs
//! The lineage graph structure.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A directed edge from an origin to the item derived from it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub ancestor: String,
    pub descendant: String,
}

impl Edge {
    #[must_use]
    pub fn new(ancestor: impl Into<String>, descendant: impl Into<String>) -> Self {
        Self {
            ancestor: ancestor.into(),
            descendant: descendant.into(),
        }
    }
}

/// Directed provenance graph. Read-only once built; replace, don't mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) nodes: BTreeSet<String>,
    pub(crate) edges: BTreeSet<Edge>,
    /// Incoming adjacency: descendant -> direct origins.
    pub(crate) parents: HashMap<String, Vec<String>>,
}

impl Graph {
    /// Assembles a graph from node and edge sets, indexing incoming edges.
    /// Edge endpoints missing from `nodes` are added.
    #[must_use]
    pub fn from_parts(mut nodes: BTreeSet<String>, edges: BTreeSet<Edge>) -> Self {
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();
        for edge in &edges {
            nodes.insert(edge.ancestor.clone());
            nodes.insert(edge.descendant.clone());
            parents
                .entry(edge.descendant.clone())
                .or_default()
                .push(edge.ancestor.clone());
        }
        Self {
            nodes,
            edges,
            parents,
        }
    }

    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    #[must_use]
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Direct origins of `node`. Empty for roots and unknown nodes.
    #[must_use]
    pub fn parents_of(&self, node: &str) -> &[String] {
        self.parents.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes with no incoming edges.
    #[must_use]
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| self.parents_of(n).is_empty())
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
