// src/graph/mod.rs
//! Lineage graph model, construction, and ancestor queries.

pub mod ancestry;
pub mod builder;
pub mod cycles;
pub mod model;
pub mod table;

pub use ancestry::{AncestryEngine, HighlightResult};
pub use builder::{CyclePolicy, GraphBuilder};
pub use model::{Edge, Graph};
pub use table::LineageTable;
