//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, verbosity, and dispatch to the
//! demo or a loaded tree.

pub mod app;

// Re-export main types
pub use app::*;
