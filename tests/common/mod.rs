//! Common test utilities
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a comptree.yml file
pub fn create_tree_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let tree_path = temp_dir.path().join("comptree.yml");
    fs::write(&tree_path, content).unwrap();
    (temp_dir, tree_path)
}

/// Create a tree file plus an empty subdirectory to run from
pub fn create_tree_file_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let (temp_dir, tree_path) = create_tree_file(content);
    let sub_dir = temp_dir.path().join("subdir");
    fs::create_dir(&sub_dir).unwrap();
    (temp_dir, tree_path, sub_dir)
}

/// The report printed by a bare `comptree` run
pub const DEMO_REPORT: &str = "\
app command
sub1
sub2
option1

sub1 command
op_sub1_1
op_sub1_2

sub2 command
op_sub2_1

completions for app
registry
engine

completions for registry
show

completions for show
fitables
workers
subscriptions

completions for fitables
--ip
-P
ip

completions for workers

completions for subscriptions

completions for engine
show

completions for show
plugins
fitables

completions for plugins
--location
-L
location

completions for fitables

";
