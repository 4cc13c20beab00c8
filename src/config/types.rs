//! Tree definition types
//!
//! This module defines the data structures that represent a comptree.yml file.

use crate::tree::{Command, CommandOption};
use serde::{Deserialize, Serialize};

/// A command node as written in a tree file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandDef {
    /// Command name
    pub name: String,

    /// Options (flags) of the command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDef>,

    /// Nested commands
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<CommandDef>,
}

/// An option as written in a tree file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionDef {
    /// Canonical name
    pub name: String,

    /// Alternate forms, such as `--ip` or `-P`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<String>,
}

impl CommandDef {
    /// Convert the definition into a command tree
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.name.clone());
        for opt in &self.options {
            cmd.add_option(opt.to_option());
        }
        for sub in &self.subcommands {
            cmd.add_subcommand(sub.to_command());
        }
        cmd
    }
}

impl OptionDef {
    pub fn to_option(&self) -> CommandOption {
        CommandOption::new(self.name.clone()).with_candidates(self.candidates.iter().cloned())
    }
}
