//! Command tree model
//!
//! This module holds the tree nodes and the completion aggregation rules.

pub mod command;
pub mod option;

// Re-export main types
pub use command::*;
pub use option::*;
