// src/render/elements.rs
//! Graph projections handed to a renderer or cached outside the process.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{LineageError, Result};
use crate::graph::{Edge, Graph};

/// One drawable element: either a node or an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub data: ElementData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ElementData {
    Node { id: String, label: String },
    Edge { source: String, target: String },
}

/// Nodes first, then edges, each in sorted order.
#[must_use]
pub fn elements(graph: &Graph) -> Vec<Element> {
    let nodes = graph.nodes().iter().map(|n| Element {
        data: ElementData::Node {
            id: n.clone(),
            label: n.clone(),
        },
    });
    let edges = graph.edges().iter().map(|e| Element {
        data: ElementData::Edge {
            source: e.ancestor.clone(),
            target: e.descendant.clone(),
        },
    });
    nodes.chain(edges).collect()
}

/// Node-link snapshot of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLink {
    pub directed: bool,
    pub multigraph: bool,
    pub nodes: Vec<NodeRef>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

#[must_use]
pub fn node_link(graph: &Graph) -> NodeLink {
    NodeLink {
        directed: true,
        multigraph: false,
        nodes: graph
            .nodes()
            .iter()
            .map(|id| NodeRef { id: id.clone() })
            .collect(),
        links: graph
            .edges()
            .iter()
            .map(|e| Link {
                source: e.ancestor.clone(),
                target: e.descendant.clone(),
            })
            .collect(),
    }
}

impl Graph {
    /// Restores a graph from a node-link snapshot.
    ///
    /// # Errors
    /// Returns `MalformedInput` for undirected or multigraph snapshots and
    /// for links whose endpoints are not listed as nodes.
    pub fn from_node_link(snapshot: &NodeLink) -> Result<Self> {
        if !snapshot.directed || snapshot.multigraph {
            return Err(LineageError::malformed(
                "node-link snapshot must be a directed simple graph",
            ));
        }
        let nodes: BTreeSet<String> = snapshot.nodes.iter().map(|n| n.id.clone()).collect();
        let mut edges = BTreeSet::new();
        for link in &snapshot.links {
            if !nodes.contains(&link.source) || !nodes.contains(&link.target) {
                return Err(LineageError::malformed(format!(
                    "link {} -> {} references an unknown node",
                    link.source, link.target
                )));
            }
            edges.insert(Edge::new(link.source.as_str(), link.target.as_str()));
        }
        Ok(Self::from_parts(nodes, edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, LineageTable};

    fn sample() -> Graph {
        let table = LineageTable::from_entries([
            ("B", vec!["A"]),
            ("C", vec!["A", "B"]),
        ])
        .unwrap();
        GraphBuilder::build(&table)
    }

    #[test]
    fn test_elements_shape() {
        let json = serde_json::to_value(elements(&sample())).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 3 + 3);
        assert_eq!(arr[0]["data"]["id"], "A");
        assert_eq!(arr[0]["data"]["label"], "A");
        assert_eq!(arr[3]["data"]["source"], "A");
        assert_eq!(arr[3]["data"]["target"], "B");
    }

    #[test]
    fn test_node_link_restores_graph() {
        let g = sample();
        let text = serde_json::to_string(&node_link(&g)).unwrap();
        let snapshot: NodeLink = serde_json::from_str(&text).unwrap();
        assert_eq!(Graph::from_node_link(&snapshot).unwrap(), g);
    }

    #[test]
    fn test_node_link_dangling_link_rejected() {
        let snapshot = NodeLink {
            directed: true,
            multigraph: false,
            nodes: vec![NodeRef { id: "A".into() }],
            links: vec![Link {
                source: "A".into(),
                target: "Z".into(),
            }],
        };
        assert!(Graph::from_node_link(&snapshot).is_err());
    }
}
