pub mod cli;
pub mod config;
pub mod datasets;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logging;
pub mod render;
pub mod reporting;
pub mod session;
