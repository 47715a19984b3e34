// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineageError {
    #[error("node not found in graph: {node}")]
    NotFound { node: String },

    #[error("unknown dataset: {name}")]
    UnknownDataset { name: String },

    #[error("malformed lineage table: {reason}")]
    MalformedInput { reason: String },

    #[error("cycle detected: {}", .cycle.join(" -> "))]
    CycleDetected { cycle: Vec<String> },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LineageError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(node: &str) -> Self {
        Self::NotFound {
            node: node.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineageError>;

// Allow `?` on std::io::Error by converting to LineageError::Io with unknown path.
impl From<std::io::Error> for LineageError {
    fn from(source: std::io::Error) -> Self {
        LineageError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
