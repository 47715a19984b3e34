use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use lineage_core::cli::{dispatch, Cli, Context};
use lineage_core::config::Config;
use lineage_core::exit::LineageExit;
use lineage_core::logging;

fn main() -> LineageExit {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            LineageExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<LineageExit> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path, true)?,
        None => Config::load()?,
    };
    if !config.output.color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, &config.log_level)?;

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(LineageExit::Success);
    };

    let ctx = Context::new(cli, &config)?;
    dispatch::execute(command, &ctx)
}
