//! Tree file discovery and parsing

use crate::config::schema::validate_tree;
use crate::config::types::CommandDef;
use crate::error::{CompError, ConfigError, ConfigResult};
use crate::tree::Command;
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default tree file names to search for
const TREE_FILE_NAMES: &[&str] = &["comptree.yml", "comptree.yaml"];

/// Per-user configuration directory, if the platform has one
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "comptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Find the tree file by searching current and parent directories, then the
/// per-user configuration directory
pub fn find_tree_file() -> ConfigResult<PathBuf> {
    let cwd = env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?;
    find_tree_file_in(cwd, user_config_dir())
}

/// Find the tree file starting from `start_dir`, falling back to `fallback_dir`
pub fn find_tree_file_in(
    start_dir: PathBuf,
    fallback_dir: Option<PathBuf>,
) -> ConfigResult<PathBuf> {
    let mut searched_paths = Vec::new();
    let mut current_dir = Some(start_dir.as_path());

    while let Some(dir) = current_dir {
        if let Some(found) = find_in_dir(dir, &mut searched_paths) {
            return Ok(found);
        }
        current_dir = dir.parent();
    }

    if let Some(dir) = fallback_dir {
        if let Some(found) = find_in_dir(&dir, &mut searched_paths) {
            return Ok(found);
        }
    }

    Err(ConfigError::NotFound(searched_paths.join(", ")))
}

fn find_in_dir(dir: &Path, searched_paths: &mut Vec<String>) -> Option<PathBuf> {
    for file_name in TREE_FILE_NAMES {
        let tree_path = dir.join(file_name);
        searched_paths.push(tree_path.display().to_string());

        if tree_path.is_file() {
            return Some(tree_path);
        }
    }
    None
}

/// Parse a tree file from a path
pub fn parse_tree_file(path: &Path) -> Result<CommandDef, CompError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_tree(&contents)
}

/// Parse a tree definition from a string
pub fn parse_tree(yaml: &str) -> Result<CommandDef, CompError> {
    let def: CommandDef = serde_yaml::from_str(yaml)?;
    Ok(def)
}

/// Parse a tree with automatic file discovery
pub fn parse_tree_auto() -> Result<(CommandDef, PathBuf), CompError> {
    let tree_path = find_tree_file()?;
    let def = parse_tree_file(&tree_path)?;
    Ok((def, tree_path))
}

/// Load, validate, and build the command tree
///
/// Uses `path` when given, otherwise discovers the file.
pub fn load_tree(path: Option<&Path>) -> Result<Command, CompError> {
    let (def, tree_path) = match path {
        Some(p) => (parse_tree_file(p)?, p.to_path_buf()),
        None => parse_tree_auto()?,
    };
    debug!(path = %tree_path.display(), root = %def.name, "loaded tree file");

    validate_tree(&def)?;
    Ok(def.to_command())
}
