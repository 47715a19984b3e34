// src/session.rs
//! Interaction state for one viewer: the active dataset, its graph, and
//! the current selection.

use tracing::{info, warn};

use crate::datasets::DatasetCatalog;
use crate::error::Result;
use crate::graph::{AncestryEngine, CyclePolicy, Graph, GraphBuilder, HighlightResult};
use crate::render::{self, Element, StyleRule};

/// Whether a node is currently highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(HighlightResult),
}

impl Selection {
    #[must_use]
    pub fn highlight(&self) -> Option<&HighlightResult> {
        match self {
            Self::Unselected => None,
            Self::Selected(h) => Some(h),
        }
    }
}

/// Owns the graph for the active dataset. Switching datasets replaces the
/// graph wholesale and drops any selection.
#[derive(Debug)]
pub struct ViewSession {
    catalog: DatasetCatalog,
    policy: CyclePolicy,
    dataset: String,
    graph: Graph,
    selection: Selection,
}

impl ViewSession {
    /// Opens a session on `dataset`, or the catalog default when `None`.
    ///
    /// # Errors
    /// Returns `UnknownDataset` for an unknown name and `CycleDetected` if
    /// the policy rejects the dataset.
    pub fn open(catalog: DatasetCatalog, dataset: Option<&str>, policy: CyclePolicy) -> Result<Self> {
        let name = catalog.resolve(dataset).to_string();
        let graph = GraphBuilder::build_checked(catalog.get(&name)?, policy)?;
        info!(dataset = %name, nodes = graph.node_count(), "session opened");
        Ok(Self {
            catalog,
            policy,
            dataset: name,
            graph,
            selection: Selection::Unselected,
        })
    }

    /// Switches to another dataset. On failure the current state is kept.
    ///
    /// # Errors
    /// Returns `UnknownDataset` for an unknown name and `CycleDetected` if
    /// the policy rejects the dataset.
    pub fn select_dataset(&mut self, name: &str) -> Result<()> {
        let graph = GraphBuilder::build_checked(self.catalog.get(name)?, self.policy)?;
        info!(dataset = name, nodes = graph.node_count(), "dataset switched");
        self.dataset = name.to_string();
        self.graph = graph;
        self.selection = Selection::Unselected;
        Ok(())
    }

    /// Selects `node`, recomputing its highlight even if it is already selected.
    ///
    /// # Errors
    /// Returns `NotFound` if the node is not in the active graph; the
    /// session falls back to `Unselected`.
    pub fn click(&mut self, node: &str) -> Result<HighlightResult> {
        match AncestryEngine::highlight_for(&self.graph, node) {
            Ok(h) => {
                self.selection = Selection::Selected(h.clone());
                Ok(h)
            }
            Err(e) => {
                warn!(node, dataset = %self.dataset, "click on unknown node");
                self.selection = Selection::Unselected;
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.selection = Selection::Unselected;
    }

    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn catalog(&self) -> &DatasetCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn stylesheet(&self) -> Vec<StyleRule> {
        render::stylesheet(self.selection.highlight())
    }

    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        render::elements(&self.graph)
    }
}
