//! Tree definition validation

use crate::config::types::CommandDef;
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete tree definition
///
/// Every command and option needs a non-blank name. Duplicate names are
/// allowed.
pub fn validate_tree(root: &CommandDef) -> ConfigResult<()> {
    validate_command(root, &mut Vec::new())
}

fn validate_command<'a>(cmd: &'a CommandDef, path: &mut Vec<&'a str>) -> ConfigResult<()> {
    if cmd.name.trim().is_empty() {
        return Err(ConfigError::EmptyName(display_path(path)));
    }

    path.push(&cmd.name);

    for opt in &cmd.options {
        if opt.name.trim().is_empty() {
            return Err(ConfigError::EmptyName(display_path(path)));
        }
    }

    for sub in &cmd.subcommands {
        validate_command(sub, path)?;
    }

    path.pop();
    Ok(())
}

fn display_path(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(" > ")
    }
}
