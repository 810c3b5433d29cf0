use std::fmt;

/// Command vocabulary understood by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    List,
    Search,
    Add,
    Delete,
    Update,
    Help,
    Quit,
}

impl CliCommand {
    pub const ALL: [CliCommand; 7] = [
        CliCommand::List,
        CliCommand::Search,
        CliCommand::Add,
        CliCommand::Delete,
        CliCommand::Update,
        CliCommand::Help,
        CliCommand::Quit,
    ];

    pub fn parse(value: &str) -> Option<CliCommand> {
        CliCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CliCommand::List => "list",
            CliCommand::Search => "search",
            CliCommand::Add => "add",
            CliCommand::Delete => "delete",
            CliCommand::Update => "update",
            CliCommand::Help => "help",
            CliCommand::Quit => "quit",
        }
    }
}

impl fmt::Display for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
