//! Comptree - command trees and the completions visible at each node
//!
//! A [`Command`](tree::Command) owns its options and child commands by value.
//! For any node, the completion list is the names of its direct subcommands
//! followed by every flag form of its options. The [`report`] module walks a
//! tree in pre-order and prints one block per node.

// Public modules
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod tree;

// Re-export commonly used types
pub use error::{CompError, Result};
pub use tree::{Command, CommandOption, CompletionMode};

/// Current version of Comptree
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
