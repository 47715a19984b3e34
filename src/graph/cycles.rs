// src/graph/cycles.rs
//! Cycle detection for lineage graphs.
//!
//! Lineage is expected to be acyclic, but nothing in a table enforces it.
//! This module finds cycles with a depth-first search so the builder can
//! apply the configured policy.

use std::collections::{BTreeMap, HashSet};

use super::model::Graph;

/// Detects cycles in `graph`, following edges in the origin -> item direction.
/// Each cycle is returned as a node path that repeats its first node at the end.
/// Output order is deterministic.
#[must_use]
pub fn detect_cycles(graph: &Graph) -> Vec<Vec<String>> {
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for edge in graph.edges() {
        adjacency
            .entry(edge.ancestor.as_str())
            .or_default()
            .push(edge.descendant.as_str());
    }

    let mut state = DfsState::default();
    for node in graph.nodes() {
        if !state.visited.contains(node.as_str()) {
            dfs(node, &adjacency, &mut state);
        }
    }

    state.cycles
}

#[derive(Default)]
struct DfsState<'a> {
    visited: HashSet<&'a str>,
    recursion_stack: HashSet<&'a str>,
    path_stack: Vec<&'a str>,
    cycles: Vec<Vec<String>>,
}

fn dfs<'a>(node: &'a str, adjacency: &BTreeMap<&'a str, Vec<&'a str>>, state: &mut DfsState<'a>) {
    state.visited.insert(node);
    state.recursion_stack.insert(node);
    state.path_stack.push(node);

    if let Some(neighbors) = adjacency.get(node) {
        for &neighbor in neighbors {
            if !state.visited.contains(neighbor) {
                dfs(neighbor, adjacency, state);
            } else if state.recursion_stack.contains(neighbor) {
                record_cycle(neighbor, state);
            }
        }
    }

    state.recursion_stack.remove(node);
    state.path_stack.pop();
}

fn record_cycle(neighbor: &str, state: &mut DfsState<'_>) {
    if let Some(pos) = state.path_stack.iter().position(|x| *x == neighbor) {
        let mut cycle: Vec<String> = state
            .path_stack
            .iter()
            .skip(pos)
            .map(|s| (*s).to_string())
            .collect();
        cycle.push(neighbor.to_string());
        state.cycles.push(cycle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::DatasetCatalog;
    use crate::graph::{GraphBuilder, LineageTable};

    fn graph(entries: &[(&str, &[&str])]) -> Graph {
        let table =
            LineageTable::from_entries(entries.iter().map(|(k, v)| (*k, v.iter().copied())))
                .unwrap();
        GraphBuilder::build(&table)
    }

    #[test]
    fn test_builtin_datasets_are_acyclic() {
        let catalog = DatasetCatalog::builtin();
        for name in catalog.names() {
            let g = GraphBuilder::build(catalog.get(name).unwrap());
            assert!(detect_cycles(&g).is_empty(), "{name} has a cycle");
        }
    }

    #[test]
    fn test_shared_origin_is_not_a_cycle() {
        // Ink feeds both Cover and Printed Pages, which both feed Book.
        let g = graph(&[
            ("Book", &["Printed Pages", "Cover"]),
            ("Printed Pages", &["Ink"]),
            ("Cover", &["Ink"]),
        ]);
        assert!(detect_cycles(&g).is_empty());
    }

    #[test]
    fn test_recycling_loop_excludes_upstream_origins() {
        // Seed is an implicit origin feeding into the loop from outside it.
        let g = graph(&[
            ("Paper", &["Wood Pulp"]),
            ("Wood Pulp", &["Tree", "Recycled Paper"]),
            ("Recycled Paper", &["Paper"]),
            ("Tree", &["Seed"]),
        ]);
        let cycles = detect_cycles(&g);
        assert_eq!(
            cycles,
            vec![vec!["Paper", "Recycled Paper", "Wood Pulp", "Paper"]]
        );
    }

    #[test]
    fn test_item_listed_as_its_own_origin() {
        let g = graph(&[("Compost", &["Compost", "Scraps"])]);
        assert_eq!(detect_cycles(&g), vec![vec!["Compost", "Compost"]]);
    }

    #[test]
    fn test_independent_loops_reported_separately() {
        let g = graph(&[
            ("Chicken", &["Egg"]),
            ("Egg", &["Chicken"]),
            ("Sourdough", &["Starter", "Flour"]),
            ("Starter", &["Sourdough"]),
        ]);
        let cycles = detect_cycles(&g);
        assert_eq!(cycles.len(), 2);
        assert!(cycles.iter().all(|c| c.first() == c.last()));
        assert!(cycles.iter().all(|c| !c.iter().any(|n| n == "Flour")));
    }
}
