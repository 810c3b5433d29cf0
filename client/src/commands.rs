use std::fmt;

/// Command vocabulary understood by the interactive REST client loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestCommand {
    List,
    Search,
    Add,
    Delete,
    Update,
    Help,
    Quit,
}

impl RestCommand {
    pub const ALL: [RestCommand; 7] = [
        RestCommand::List,
        RestCommand::Search,
        RestCommand::Add,
        RestCommand::Delete,
        RestCommand::Update,
        RestCommand::Help,
        RestCommand::Quit,
    ];

    pub fn parse(value: &str) -> Option<RestCommand> {
        RestCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RestCommand::List => "list",
            RestCommand::Search => "search",
            RestCommand::Add => "add",
            RestCommand::Delete => "delete",
            RestCommand::Update => "update",
            RestCommand::Help => "help",
            RestCommand::Quit => "quit",
        }
    }
}

impl fmt::Display for RestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
