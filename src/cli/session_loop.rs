// src/cli/session_loop.rs
//! Line-oriented interactive loop over a [`ViewSession`].
//!
//! Each input line is one event; it runs to completion before the next
//! line is read.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::LineageError;
use crate::session::{Selection, ViewSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Use(String),
    Click(String),
    Clear,
    Show,
    Datasets,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    /// Parses one input line. Arguments keep inner spaces so multi-word
    /// names like `Metal Tube` need no quoting.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };
        match (verb, rest.is_empty()) {
            ("", _) => Self::Empty,
            ("use", false) => Self::Use(rest.to_string()),
            ("click", false) => Self::Click(rest.to_string()),
            ("clear", true) => Self::Clear,
            ("show", true) => Self::Show,
            ("datasets", true) => Self::Datasets,
            ("help", true) => Self::Help,
            ("quit" | "exit", true) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

const HELP: &str = "commands: use <dataset> | click <node> | clear | show | datasets | help | quit";

/// Runs until `quit` or end of input.
///
/// # Errors
/// Returns error only on I/O failure; command failures are reported inline.
pub fn run<R: BufRead, W: Write>(session: &mut ViewSession, input: R, mut out: W) -> Result<()> {
    writeln!(out, "dataset: {}", session.dataset())?;
    for line in input.lines() {
        let command = SessionCommand::parse(&line?);
        if command == SessionCommand::Quit {
            break;
        }
        apply(session, command, &mut out)?;
        out.flush()?;
    }
    Ok(())
}

fn apply<W: Write>(session: &mut ViewSession, command: SessionCommand, out: &mut W) -> Result<()> {
    match command {
        SessionCommand::Use(name) => match session.select_dataset(&name) {
            Ok(()) => writeln!(out, "dataset: {name}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        SessionCommand::Click(node) => match session.click(&node) {
            Ok(h) => {
                let ancestors: Vec<&str> = h.ancestor_nodes.iter().map(String::as_str).collect();
                writeln!(out, "selected: {}", h.selected_node)?;
                writeln!(out, "ancestors: {}", ancestors.join(", "))?;
                writeln!(out, "edges: {}", h.highlighted_edges.len())?;
            }
            Err(LineageError::NotFound { node }) => {
                writeln!(out, "not found: {node} (selection cleared)")?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        },
        SessionCommand::Clear => {
            session.clear();
            writeln!(out, "selection cleared")?;
        }
        SessionCommand::Show => {
            let graph = session.graph();
            writeln!(
                out,
                "{}: {} nodes, {} edges",
                session.dataset(),
                graph.node_count(),
                graph.edge_count()
            )?;
            match session.selection() {
                Selection::Unselected => writeln!(out, "selection: none")?,
                Selection::Selected(h) => writeln!(out, "selection: {}", h.selected_node)?,
            }
        }
        SessionCommand::Datasets => {
            for name in session.catalog().names() {
                writeln!(out, "{name}")?;
            }
        }
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Unknown(line) => writeln!(out, "unknown command: {line} ({HELP})")?,
        SessionCommand::Empty | SessionCommand::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiword_names() {
        assert_eq!(
            SessionCommand::parse("click  Metal Tube "),
            SessionCommand::Click("Metal Tube".into())
        );
        assert_eq!(
            SessionCommand::parse("use Book Example"),
            SessionCommand::Use("Book Example".into())
        );
    }

    #[test]
    fn test_parse_bare_and_unknown() {
        assert_eq!(SessionCommand::parse(""), SessionCommand::Empty);
        assert_eq!(SessionCommand::parse("quit"), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse("exit"), SessionCommand::Quit);
        assert_eq!(
            SessionCommand::parse("click"),
            SessionCommand::Unknown("click".into())
        );
        assert_eq!(
            SessionCommand::parse("clear now"),
            SessionCommand::Unknown("clear now".into())
        );
    }
}
