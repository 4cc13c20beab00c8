//! Integration tests for completion aggregation and the tree report

mod common;

use comptree::demo::{fit_tool, sample_app, write_demo};
use comptree::report::render_tree;
use comptree::{Command, CommandOption, CompletionMode};

fn mixed_tree() -> Command {
    Command::new("root")
        .with_subcommand(Command::new("a"))
        .with_subcommand(Command::new("b").with_subcommand(Command::new("hidden")))
        .with_option(CommandOption::new("x").with_candidates(["--x", "-x"]))
        .with_option(CommandOption::new("y"))
        .with_option(CommandOption::new("z").with_candidates(["--z"]))
}

#[test]
fn test_option_completion_shape() {
    let opt = CommandOption::new("ip").with_candidates(["--ip", "-P"]);
    let completions = opt.completions();

    assert_eq!(completions.len(), opt.candidates().len() + 1);
    assert_eq!(completions.last().map(String::as_str), Some("ip"));
    assert_eq!(&completions[..2], opt.candidates());
}

#[test]
fn test_command_completion_count() {
    let root = mixed_tree();
    let option_total: usize = root.options().iter().map(|o| o.completions().len()).sum();

    assert_eq!(
        root.completions().len(),
        root.subcommands().len() + option_total
    );
    assert_eq!(
        root.completions_with(CompletionMode::LegacyPadding).len(),
        root.subcommands().len() + option_total + root.options().len()
    );
}

#[test]
fn test_subcommand_names_lead() {
    let root = mixed_tree();
    let completions = root.completions();
    let names: Vec<&str> = root.subcommands().iter().map(|c| c.name()).collect();

    assert_eq!(&completions[..names.len()], names.as_slice());
    assert_eq!(
        completions,
        vec!["a", "b", "--x", "-x", "x", "y", "--z", "z"]
    );
}

#[test]
fn test_legacy_padding_sits_between_groups() {
    let root = mixed_tree();
    assert_eq!(
        root.completions_with(CompletionMode::LegacyPadding),
        vec!["a", "b", "", "", "", "--x", "-x", "x", "y", "--z", "z"]
    );
}

#[test]
fn test_copy_semantics_across_parents() {
    let mut shared = Command::new("show");
    let mut registry = Command::new("registry");
    registry.add_subcommand(shared.clone());

    shared.add_option(CommandOption::new("ip"));
    let mut engine = Command::new("engine");
    engine.add_subcommand(shared.clone());

    assert!(registry.subcommands()[0].completions().is_empty());
    assert_eq!(engine.subcommands()[0].completions(), vec!["ip"]);
}

#[test]
fn test_demo_scenarios() {
    let sample = sample_app();
    assert_eq!(sample.app.completions(), vec!["sub1", "sub2", "option1"]);
    assert_eq!(sample.sub1.completions(), vec!["op_sub1_1", "op_sub1_2"]);
}

#[test]
fn test_fit_tool_blocks_match_completions() {
    let tool = fit_tool();
    let mut expected = String::new();
    for node in tool.walk() {
        expected.push_str(&format!("completions for {}\n", node.name()));
        for completion in node.completions() {
            expected.push_str(&completion);
            expected.push('\n');
        }
        expected.push('\n');
    }

    assert_eq!(render_tree(&tool, CompletionMode::Clean), expected);
}

#[test]
fn test_demo_report() {
    let mut buf = Vec::new();
    write_demo(&mut buf, CompletionMode::Clean).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), common::DEMO_REPORT);
}
