//! Command nodes and completion aggregation

use crate::tree::CommandOption;

/// How option completions are gathered for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// Subcommand names, then every option's completions
    #[default]
    Clean,

    /// Same as `Clean`, but with one empty entry per option placed ahead of
    /// the option completions.
    ///
    /// This reproduces a known defect in the tool this output format comes
    /// from, where the option buffer was pre-sized before being appended to.
    /// Only use it when output has to match that tool byte for byte.
    LegacyPadding,
}

/// A named node in the command tree
///
/// Subcommands and options are owned by value. Adding a command to a parent
/// moves it in; to keep working with the original, add a clone. Later changes
/// to the original never reach the stored copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    subcommands: Vec<Command>,
    options: Vec<CommandOption>,
}

impl Command {
    /// Create an empty command
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            subcommands: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Add a subcommand, builder style
    pub fn with_subcommand(mut self, subcommand: Command) -> Self {
        self.add_subcommand(subcommand);
        self
    }

    /// Add an option, builder style
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.add_option(option);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    /// Append a fully populated subcommand
    pub fn add_subcommand(&mut self, subcommand: Command) {
        self.subcommands.push(subcommand);
    }

    /// Append an option
    pub fn add_option(&mut self, option: CommandOption) {
        self.options.push(option);
    }

    /// Completions visible at this node
    pub fn completions(&self) -> Vec<String> {
        self.completions_with(CompletionMode::Clean)
    }

    /// Completions visible at this node, gathered according to `mode`
    ///
    /// Direct subcommand names come first, in insertion order. Grandchildren
    /// are not included. Each option's completions follow, in option order.
    pub fn completions_with(&self, mode: CompletionMode) -> Vec<String> {
        let subcommands = self.subcommand_completions();
        let options = self.option_completions(mode);

        let mut res = Vec::with_capacity(subcommands.len() + options.len());
        res.extend(subcommands);
        res.extend(options);
        res
    }

    fn subcommand_completions(&self) -> Vec<String> {
        self.subcommands
            .iter()
            .map(|cmd| cmd.name.clone())
            .collect()
    }

    fn option_completions(&self, mode: CompletionMode) -> Vec<String> {
        let mut res = match mode {
            CompletionMode::Clean => Vec::new(),
            CompletionMode::LegacyPadding => vec![String::new(); self.options.len()],
        };
        for option in &self.options {
            res.extend(option.completions());
        }
        res
    }

    /// This node and all of its descendants, in pre-order
    pub fn walk(&self) -> Vec<&Command> {
        let mut nodes = vec![self];
        for sub in &self.subcommands {
            nodes.extend(sub.walk());
        }
        nodes
    }
}
