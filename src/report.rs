//! Completion report output
//!
//! Every block is a header line, one completion per line, and a blank line.

use crate::tree::{Command, CompletionMode};
use std::io::{self, Write};
use tracing::trace;

/// Write completions one per line, followed by a blank line
pub fn write_completions<W: Write>(out: &mut W, completions: &[String]) -> io::Result<()> {
    for completion in completions {
        writeln!(out, "{}", completion)?;
    }
    writeln!(out)
}

/// Write a `<label> command` block for a single node
pub fn write_labeled<W: Write>(
    out: &mut W,
    command: &Command,
    mode: CompletionMode,
) -> io::Result<()> {
    writeln!(out, "{} command", command.name())?;
    write_completions(out, &command.completions_with(mode))
}

/// Write a `completions for <name>` block for every node, in pre-order
pub fn write_tree<W: Write>(
    out: &mut W,
    root: &Command,
    mode: CompletionMode,
) -> io::Result<()> {
    trace!(node = root.name(), "visiting");
    writeln!(out, "completions for {}", root.name())?;
    write_completions(out, &root.completions_with(mode))?;

    for sub in root.subcommands() {
        write_tree(out, sub, mode)?;
    }

    Ok(())
}

/// Render the tree report into a string
pub fn render_tree(root: &Command, mode: CompletionMode) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_tree(&mut buf, root, mode);
    String::from_utf8_lossy(&buf).into_owned()
}
