// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod session_loop;

pub use args::{Cli, Commands};
pub use handlers::Context;
