// tests/prop_ancestry.rs
//! Property tests for ancestor queries over random DAGs.

use lineage_core::graph::{AncestryEngine, Graph, GraphBuilder, LineageTable};
use proptest::prelude::*;
use std::collections::BTreeSet;

const MAX_NODES: usize = 24;

fn name(i: usize) -> String {
    format!("n{i:02}")
}

/// Random DAG as a lineage table: item `i` may only list origins `j < i`,
/// which rules out cycles by construction.
fn dag_strategy() -> impl Strategy<Value = LineageTable> {
    (1usize..=MAX_NODES).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(any::<prop::sample::Index>(), 0..4), n)
            .prop_map(move |rows| {
                let mut table = LineageTable::new();
                for (i, picks) in rows.into_iter().enumerate() {
                    let origins = if i == 0 {
                        Vec::new()
                    } else {
                        picks.iter().map(|p| name(p.index(i))).collect()
                    };
                    table.insert(name(i), origins);
                }
                table
            })
    })
}

/// Reference closure: repeat until no new ancestor appears.
fn naive_ancestors(graph: &Graph, node: &str) -> BTreeSet<String> {
    let mut found: BTreeSet<String> = graph.parents_of(node).iter().cloned().collect();
    loop {
        let next: BTreeSet<String> = found
            .iter()
            .flat_map(|n| graph.parents_of(n).iter().cloned())
            .collect();
        let before = found.len();
        found.extend(next);
        if found.len() == before {
            break;
        }
    }
    found.remove(node);
    found
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn ancestors_exclude_self(table in dag_strategy()) {
        let g = GraphBuilder::build(&table);
        for n in g.nodes() {
            prop_assert!(!AncestryEngine::ancestors_of(&g, n).unwrap().contains(n));
        }
    }

    #[test]
    fn ancestors_match_transitive_closure(table in dag_strategy()) {
        let g = GraphBuilder::build(&table);
        for n in g.nodes() {
            prop_assert_eq!(AncestryEngine::ancestors_of(&g, n).unwrap(), naive_ancestors(&g, n));
        }
    }

    #[test]
    fn roots_have_no_ancestors(table in dag_strategy()) {
        let g = GraphBuilder::build(&table);
        for root in g.roots() {
            prop_assert!(AncestryEngine::ancestors_of(&g, root).unwrap().is_empty());
        }
    }

    #[test]
    fn highlighted_edges_are_induced_subgraph(table in dag_strategy()) {
        let g = GraphBuilder::build(&table);
        for n in g.nodes() {
            let h = AncestryEngine::highlight_for(&g, n).unwrap();
            let nodes = h.highlighted_nodes();
            for e in g.edges() {
                let both = nodes.contains(&e.ancestor) && nodes.contains(&e.descendant);
                prop_assert_eq!(h.highlighted_edges.contains(e), both);
            }
        }
    }

    #[test]
    fn highlight_is_idempotent(table in dag_strategy()) {
        let g = GraphBuilder::build(&table);
        for n in g.nodes() {
            let first = AncestryEngine::highlight_for(&g, n).unwrap();
            let second = AncestryEngine::highlight_for(&g, n).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
