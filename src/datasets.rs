// src/datasets.rs
//! Named lineage tables: the built-in examples plus any loaded from disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{LineageError, Result};
use crate::graph::table::{decode, TableFormat};
use crate::graph::LineageTable;

pub const MANUFACTURING: &str = "Manufacturing Example";
pub const BOOK: &str = "Book Example";

/// Dataset names mapped to their tables, with one marked as the default.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    tables: BTreeMap<String, LineageTable>,
    order: Vec<String>,
    default_name: String,
}

/// On-disk dataset layout (TOML or JSON).
#[derive(Debug, Deserialize)]
struct DatasetFile {
    name: String,
    lineage: LineageTable,
}

impl DatasetCatalog {
    /// The catalog shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self {
            tables: BTreeMap::new(),
            order: Vec::new(),
            default_name: MANUFACTURING.to_string(),
        };
        catalog.insert(MANUFACTURING, manufacturing());
        catalog.insert(BOOK, book());
        catalog
    }

    /// Adds or replaces a dataset. New names are listed after existing ones.
    pub fn insert(&mut self, name: impl Into<String>, table: LineageTable) {
        let name = name.into();
        if !self.tables.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.tables.insert(name, table);
    }

    /// Loads a dataset file and adds it to the catalog, returning its name.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `MalformedInput` if it does
    /// not parse as a dataset.
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|source| LineageError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let file: DatasetFile =
            decode(&content, TableFormat::from_path(path)).map_err(|e| match e {
                LineageError::MalformedInput { reason } => {
                    LineageError::malformed(format!("{}: {reason}", path.display()))
                }
                other => other,
            })?;

        if file.name.trim().is_empty() {
            return Err(LineageError::malformed(format!(
                "{}: dataset name is blank",
                path.display()
            )));
        }

        info!(name = %file.name, path = %path.display(), items = file.lineage.len(), "loaded dataset");
        let name = file.name;
        self.insert(name.clone(), file.lineage);
        Ok(name)
    }

    /// Makes `name` the default dataset.
    ///
    /// # Errors
    /// Returns `UnknownDataset` if no dataset has that name.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.tables.contains_key(name) {
            return Err(LineageError::UnknownDataset {
                name: name.to_string(),
            });
        }
        debug!(name, "default dataset changed");
        self.default_name = name.to_string();
        Ok(())
    }

    /// Looks up a dataset by name.
    ///
    /// # Errors
    /// Returns `UnknownDataset` if no dataset has that name.
    pub fn get(&self, name: &str) -> Result<&LineageTable> {
        self.tables
            .get(name)
            .ok_or_else(|| LineageError::UnknownDataset {
                name: name.to_string(),
            })
    }

    /// Dataset names in registration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Resolves an optional user choice against the default.
    #[must_use]
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_name)
    }
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn table(entries: &[(&str, &[&str])]) -> LineageTable {
    let mut t = LineageTable::new();
    for (item, origins) in entries {
        t.insert(*item, origins.iter().map(|s| (*s).to_string()).collect());
    }
    t
}

fn manufacturing() -> LineageTable {
    table(&[
        ("Metal Tube", &["Melted Ore"]),
        ("Melted Ore", &["Ore"]),
        ("Ore", &["Mountain"]),
        ("Plastic Casing", &["Refined Oil"]),
        ("Refined Oil", &["Crude Oil"]),
        ("Crude Oil", &["Organic Deposits"]),
        ("Widget", &["Metal Tube", "Plastic Casing", "Software Module"]),
        ("Mountain", &["Tectonic Plates Impact"]),
        ("Tectonic Plates Impact", &["Tectonic Plates"]),
        ("Tectonic Plates", &["Cooled Magma"]),
        ("Cooled Magma", &["Magma"]),
        ("Organic Deposits", &["Ancient Life"]),
        ("Software Module", &["Code Library A", "Code Library B"]),
        ("Code Library A", &["Algorithm X"]),
        ("Code Library B", &["Algorithm Y", "Algorithm Z"]),
        ("Algorithm X", &["Mathematical Concept 1"]),
        ("Algorithm Y", &["Mathematical Concept 1"]),
        ("Algorithm Z", &["Mathematical Concept 2"]),
        ("Ancient Life", &["Early Earth Conditions"]),
        ("Magma", &["Early Earth Conditions"]),
        ("Early Earth Conditions", &["Planetary Formation"]),
        ("Mathematical Concept 1", &["Axioms Set 1"]),
        ("Mathematical Concept 2", &["Axioms Set 2"]),
        ("Planetary Formation", &[]),
        ("Axioms Set 1", &[]),
        ("Axioms Set 2", &[]),
    ])
}

fn book() -> LineageTable {
    table(&[
        ("Book", &["Printed Pages", "Cover"]),
        ("Printed Pages", &["Paper", "Ink"]),
        ("Cover", &["Cardboard", "Ink"]),
        ("Paper", &["Wood Pulp"]),
        ("Ink", &["Pigment", "Binder"]),
        ("Cardboard", &["Wood Pulp"]),
        ("Wood Pulp", &["Tree"]),
        ("Pigment", &["Chemical Compound A"]),
        ("Binder", &["Chemical Compound B"]),
        ("Tree", &["Seed", "Soil", "Sunlight"]),
        ("Chemical Compound A", &["Raw Material X"]),
        ("Chemical Compound B", &["Raw Material Y"]),
        ("Seed", &[]),
        ("Soil", &[]),
        ("Sunlight", &[]),
        ("Raw Material X", &[]),
        ("Raw Material Y", &[]),
    ])
}
