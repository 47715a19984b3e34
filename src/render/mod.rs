// src/render/mod.rs
//! Renderer-facing views of graphs and selections.

pub mod elements;
pub mod style;

pub use elements::{elements, node_link, Element, NodeLink};
pub use style::{default_stylesheet, stylesheet, StyleRule};
