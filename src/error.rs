//! Error types for Comptree
//!
//! Building a tree and aggregating completions never fails. Errors only come
//! from the edges: loading tree definition files and writing the report.

use std::io;
use thiserror::Error;

/// Result type alias for Comptree operations
pub type Result<T> = std::result::Result<T, CompError>;

/// Main error type for Comptree
#[derive(Error, Debug)]
pub enum CompError {
    /// Tree definition errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Tree definition discovery and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find tree file (searched: {0})")]
    NotFound(String),

    #[error("Invalid tree definition: {0}")]
    Invalid(String),

    #[error("Empty name under '{0}'")]
    EmptyName(String),
}

/// Specialized result type for tree definition operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
