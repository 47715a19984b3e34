//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{
    handle_ancestors, handle_check, handle_datasets, handle_elements, handle_highlight,
    handle_session, handle_show, handle_stylesheet, Context,
};
use crate::exit::LineageExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, ctx: &Context) -> Result<LineageExit> {
    match command {
        Commands::Datasets => handle_datasets(ctx),
        Commands::Show { dataset } => handle_show(ctx, dataset.as_deref()),
        Commands::Ancestors { node, dataset } => handle_ancestors(ctx, &node, dataset.as_deref()),
        Commands::Highlight { node, dataset } => handle_highlight(ctx, &node, dataset.as_deref()),
        Commands::Elements { dataset, node_link } => {
            handle_elements(ctx, dataset.as_deref(), node_link)
        }
        Commands::Stylesheet { node, dataset } => {
            handle_stylesheet(ctx, node.as_deref(), dataset.as_deref())
        }
        Commands::Check { dataset } => handle_check(ctx, dataset.as_deref()),
        Commands::Session { dataset } => handle_session(ctx, dataset.as_deref()),
    }
}
