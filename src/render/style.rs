// src/render/style.rs
//! Stylesheet derivation.
//!
//! The stylesheet is always rebuilt from the fixed default rules, so a
//! previous selection can never leak into the next one.

use serde::Serialize;
use serde_json::{json, Value};

use crate::graph::HighlightResult;

pub const SELECTED_COLOR: &str = "#fc8d62";
pub const ANCESTOR_COLOR: &str = "#8da0cb";
pub const EDGE_COLOR: &str = "#fc8d62";

const CLASS_PREFIX: &str = ".highlighted";

/// A selector plus the style properties it applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: Value,
}

impl StyleRule {
    fn new(selector: impl Into<String>, style: Value) -> Self {
        Self {
            selector: selector.into(),
            style,
        }
    }
}

/// Base node and edge rules plus the highlight class rules.
#[must_use]
pub fn default_stylesheet() -> Vec<StyleRule> {
    vec![
        StyleRule::new(
            "node",
            json!({
                "background-color": "#66c2a5",
                "label": "data(label)",
                "font-size": "10px",
                "text-valign": "center",
                "text-halign": "center",
                "color": "#ffffff",
                "text-outline-width": 1,
                "text-outline-color": "#333333"
            }),
        ),
        StyleRule::new(
            "edge",
            json!({
                "line-color": "#cccccc",
                "width": 1,
                "curve-style": "bezier",
                "target-arrow-shape": "triangle",
                "target-arrow-color": "#cccccc"
            }),
        ),
        StyleRule::new(".highlighted_node", selected_style(2)),
        StyleRule::new(".highlighted_ancestor", ancestor_style()),
        StyleRule::new(".highlighted_edge", edge_style()),
    ]
}

/// Stylesheet for the current selection: the defaults when nothing is
/// selected, otherwise the base rules plus one rule per highlighted element.
#[must_use]
pub fn stylesheet(highlight: Option<&HighlightResult>) -> Vec<StyleRule> {
    let Some(h) = highlight else {
        return default_stylesheet();
    };

    let mut rules: Vec<StyleRule> = default_stylesheet()
        .into_iter()
        .filter(|r| !r.selector.starts_with(CLASS_PREFIX))
        .collect();

    rules.push(StyleRule::new(node_selector(&h.selected_node), selected_style(3)));
    rules.extend(
        h.ancestor_nodes
            .iter()
            .map(|a| StyleRule::new(node_selector(a), ancestor_style())),
    );
    rules.extend(h.highlighted_edges.iter().map(|e| {
        StyleRule::new(edge_selector(&e.ancestor, &e.descendant), edge_style())
    }));
    rules
}

#[must_use]
pub fn node_selector(id: &str) -> String {
    format!("node[id = \"{}\"]", escape(id))
}

#[must_use]
pub fn edge_selector(source: &str, target: &str) -> String {
    format!(
        "edge[source = \"{}\"][target = \"{}\"]",
        escape(source),
        escape(target)
    )
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn selected_style(border_width: u32) -> Value {
    json!({
        "background-color": SELECTED_COLOR,
        "color": "#000000",
        "text-outline-color": "#ffffff",
        "border-width": border_width,
        "border-color": "#e78ac3",
        "z-index": 9999
    })
}

fn ancestor_style() -> Value {
    json!({
        "background-color": ANCESTOR_COLOR,
        "color": "#000000",
        "text-outline-color": "#ffffff",
        "border-width": 2,
        "border-color": "#a6d854",
        "z-index": 9998
    })
}

fn edge_style() -> Value {
    json!({
        "line-color": EDGE_COLOR,
        "target-arrow-color": EDGE_COLOR,
        "width": 2,
        "z-index": 9997
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AncestryEngine, GraphBuilder, LineageTable};

    fn highlight(node: &str) -> HighlightResult {
        let table =
            LineageTable::from_entries([("B", vec!["A"]), ("C", vec!["B"]), ("D", vec!["A"])])
                .unwrap();
        AncestryEngine::highlight_for(&GraphBuilder::build(&table), node).unwrap()
    }

    #[test]
    fn test_no_selection_is_default() {
        assert_eq!(stylesheet(None), default_stylesheet());
    }

    #[test]
    fn test_rule_counts() {
        let rules = stylesheet(Some(&highlight("C")));
        // node + edge base, selected, 2 ancestors, 2 edges
        assert_eq!(rules.len(), 2 + 1 + 2 + 2);
        assert!(rules.iter().all(|r| !r.selector.starts_with(CLASS_PREFIX)));
        assert_eq!(rules[2].selector, "node[id = \"C\"]");
        assert_eq!(rules[2].style["border-width"], 3);
    }

    #[test]
    fn test_no_leak_between_selections() {
        let _first = stylesheet(Some(&highlight("C")));
        let second = stylesheet(Some(&highlight("D")));
        assert!(second.iter().all(|r| !r.selector.contains("\"C\"")));
        assert_eq!(second.len(), 2 + 1 + 1 + 1);
    }

    #[test]
    fn test_selector_escaping() {
        assert_eq!(node_selector("a\"b"), "node[id = \"a\\\"b\"]");
    }
}
