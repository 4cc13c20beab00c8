//! Tree definition files
//!
//! This module handles discovery and parsing of comptree.yml files
//! and validation of the tree they describe.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
