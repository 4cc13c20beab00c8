//! Built-in demonstration trees

use crate::report::{write_labeled, write_tree};
use crate::tree::{Command, CommandOption, CompletionMode};
use std::io::{self, Write};

/// The small `app` tree, plus the standalone commands it was built from
pub struct SampleApp {
    pub app: Command,
    pub sub1: Command,
    pub sub2: Command,
}

/// Build `app` with one option and the `sub1`/`sub2` subcommands
pub fn sample_app() -> SampleApp {
    let mut sub1 = Command::new("sub1");
    sub1.add_option(CommandOption::new("op_sub1_1"));
    sub1.add_option(CommandOption::new("op_sub1_2"));

    let mut sub2 = Command::new("sub2");
    sub2.add_option(CommandOption::new("op_sub2_1"));

    let mut app = Command::new("app");
    app.add_option(CommandOption::new("option1"));
    app.add_subcommand(sub1.clone());
    app.add_subcommand(sub2.clone());

    SampleApp { app, sub1, sub2 }
}

/// Build the mock fit tool with its `registry` and `engine` branches
pub fn fit_tool() -> Command {
    let mut ip_filter = CommandOption::new("ip");
    ip_filter.add_candidates(["--ip", "-P"]);

    let mut location_filter = CommandOption::new("location");
    location_filter.add_candidates(["--location", "-L"]);

    // Children must be complete before they are added
    let reg_show = Command::new("show")
        .with_subcommand(Command::new("fitables").with_option(ip_filter))
        .with_subcommand(Command::new("workers"))
        .with_subcommand(Command::new("subscriptions"));

    let eng_show = Command::new("show")
        .with_subcommand(Command::new("plugins").with_option(location_filter))
        .with_subcommand(Command::new("fitables"));

    Command::new("app")
        .with_subcommand(Command::new("registry").with_subcommand(reg_show))
        .with_subcommand(Command::new("engine").with_subcommand(eng_show))
}

/// Write the full demonstration report
pub fn write_demo<W: Write>(out: &mut W, mode: CompletionMode) -> io::Result<()> {
    let sample = sample_app();
    write_labeled(out, &sample.app, mode)?;
    write_labeled(out, &sample.sub1, mode)?;
    write_labeled(out, &sample.sub2, mode)?;

    write_tree(out, &fit_tool(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_app_completions() {
        let sample = sample_app();
        assert_eq!(sample.app.completions(), vec!["sub1", "sub2", "option1"]);
        assert_eq!(sample.sub1.completions(), vec!["op_sub1_1", "op_sub1_2"]);
        assert_eq!(sample.sub2.completions(), vec!["op_sub2_1"]);
    }

    #[test]
    fn test_sample_app_holds_copies() {
        let sample = sample_app();
        assert_eq!(sample.app.subcommands()[0], sample.sub1);
        assert_eq!(sample.app.subcommands()[1], sample.sub2);
    }

    #[test]
    fn test_fit_tool_pre_order() {
        let tool = fit_tool();
        let names: Vec<&str> = tool.walk().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "app",
                "registry",
                "show",
                "fitables",
                "workers",
                "subscriptions",
                "engine",
                "show",
                "plugins",
                "fitables",
            ]
        );
    }

    #[test]
    fn test_fit_tool_filters() {
        let tool = fit_tool();
        let reg_show = &tool.subcommands()[0].subcommands()[0];
        assert_eq!(
            reg_show.subcommands()[0].completions(),
            vec!["--ip", "-P", "ip"]
        );

        let eng_show = &tool.subcommands()[1].subcommands()[0];
        assert_eq!(eng_show.completions(), vec!["plugins", "fitables"]);
        assert_eq!(
            eng_show.subcommands()[0].completions(),
            vec!["--location", "-L", "location"]
        );
    }
}
