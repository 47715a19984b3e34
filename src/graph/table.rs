// src/graph/table.rs
//! The raw `item -> origins` relation a graph is built from.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LineageError, Result};

/// Text formats lineage tables and dataset files are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Toml,
    Json,
}

impl TableFormat {
    /// JSON for a `.json` extension, TOML otherwise.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            Self::Json
        } else {
            Self::Toml
        }
    }
}

/// Deserializes `content`, reporting any parser error as `MalformedInput`.
///
/// # Errors
/// Returns `MalformedInput` with the parser message.
pub fn decode<T: DeserializeOwned>(content: &str, format: TableFormat) -> Result<T> {
    match format {
        TableFormat::Toml => {
            toml::from_str(content).map_err(|e| LineageError::malformed(e.to_string()))
        }
        TableFormat::Json => {
            serde_json::from_str(content).map_err(|e| LineageError::malformed(e.to_string()))
        }
    }
}

/// Mapping from item name to the ordered list of its origins.
///
/// Keys are unique by construction. Origins may name items that never
/// appear as keys; those are terminal ancestors with unknown provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineageTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl LineageTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(item, origins)` pairs.
    ///
    /// # Errors
    /// Returns `MalformedInput` if an item appears twice or any name is blank.
    pub fn from_entries<I, K, V, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (item, origins) in entries {
            let item = item.into();
            if table.entries.contains_key(&item) {
                return Err(LineageError::malformed(format!("duplicate item '{item}'")));
            }
            table
                .entries
                .insert(item, origins.into_iter().map(Into::into).collect());
        }
        table.validate()?;
        Ok(table)
    }

    /// Inserts or replaces the origins recorded for `item`.
    pub fn insert(&mut self, item: impl Into<String>, origins: Vec<String>) {
        self.entries.insert(item.into(), origins);
    }

    /// Checks structural assumptions that the type system does not cover.
    ///
    /// # Errors
    /// Returns `MalformedInput` on the first blank item or origin name.
    pub fn validate(&self) -> Result<()> {
        self.blank_name().map_or(Ok(()), |reason| Err(LineageError::malformed(reason)))
    }

    fn blank_name(&self) -> Option<String> {
        for (item, origins) in &self.entries {
            if item.trim().is_empty() {
                return Some("item name is blank".to_string());
            }
            if origins.iter().any(|o| o.trim().is_empty()) {
                return Some(format!("item '{item}' lists a blank origin"));
            }
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn origins(&self, item: &str) -> Option<&[String]> {
        self.entries.get(item).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Deserialized by hand: formats like JSON keep only the last value of a
// repeated key, which would silently drop an item's earlier origins.
impl<'de> Deserialize<'de> for LineageTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = LineageTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of item names to lists of origin names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut table = LineageTable::new();
        while let Some((item, origins)) = map.next_entry::<String, Vec<String>>()? {
            if table.entries.contains_key(&item) {
                return Err(de::Error::custom(format!("duplicate item '{item}'")));
            }
            table.entries.insert(item, origins);
        }
        match table.blank_name() {
            Some(reason) => Err(de::Error::custom(reason)),
            None => Ok(table),
        }
    }
}
