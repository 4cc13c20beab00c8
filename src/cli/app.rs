//! Main CLI application

use crate::config::load_tree;
use crate::demo::write_demo;
use crate::error::CompError;
use crate::report::write_tree;
use crate::tree::CompletionMode;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing::level_filters::LevelFilter;

/// Verbosity levels for diagnostics on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Verbosity {
    /// Highest log level shown at this verbosity
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Silent => LevelFilter::OFF,
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// CLI application
pub struct App {
    /// The clap command
    command: ClapCommand,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with command line arguments
    pub fn run(self) -> Result<(), CompError> {
        let matches = self.command.clone().get_matches();
        init_logging(get_verbosity(&matches));

        let stdout = io::stdout();
        let mut out = stdout.lock();
        dispatch(&matches, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Build the clap command
fn build_command() -> ClapCommand {
    ClapCommand::new("comptree")
        .version(crate::VERSION)
        .about("Print the completion candidates visible at each node of a command tree")
        .arg(
            Arg::new("legacy-padding")
                .long("legacy-padding")
                .help("Insert one empty completion per option, matching the legacy output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no diagnostics")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug diagnostics")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("demo").about("Print completions for the built-in example trees"),
        )
        .subcommand(
            ClapCommand::new("show")
                .about("Print completions for every node of a tree file")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Path to comptree.yml (searched for when omitted)"),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

fn get_mode(matches: &ArgMatches) -> CompletionMode {
    if matches.get_flag("legacy-padding") {
        CompletionMode::LegacyPadding
    } else {
        CompletionMode::Clean
    }
}

/// Install the stderr subscriber
fn init_logging(verbosity: Verbosity) {
    // Fails only if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_max_level(verbosity.level_filter())
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Write the report selected by `matches`
fn dispatch<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<(), CompError> {
    let mode = get_mode(matches);
    debug!(?mode, "completion mode");

    match matches.subcommand() {
        Some(("show", sub_matches)) => {
            let path = sub_matches.get_one::<PathBuf>("file");
            let root = load_tree(path.map(PathBuf::as_path))?;
            write_tree(out, &root, mode)?;
        }
        _ => write_demo(out, mode)?,
    }

    Ok(())
}

/// Run the CLI application with process arguments
pub fn run() -> Result<(), CompError> {
    App::new().run()
}
