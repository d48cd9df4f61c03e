//! Slash-command parser for the interactive driver.
//!
//! Parses `/command arg ...` input lines into typed [`ParsedCommand`] values.

use crate::app::action::Action;
use crate::app::state::ResourceId;

/// A parsed user command. Each variant corresponds to a `/command`.
#[derive(Debug, PartialEq)]
pub enum ParsedCommand {
    Search { query: String },
    Overview { id: String },
    Add { id: ResourceId },
    Populate { count: usize },
    Sort,
    Suggest,
    Validate { index: usize },
    Show,
    Help,
    Quit,
}

impl ParsedCommand {
    /// The store action behind this command, if any.
    pub fn into_action(self) -> Option<Action> {
        match self {
            ParsedCommand::Search { query } => Some(Action::SubmitSearchQuery(query)),
            ParsedCommand::Overview { id } => Some(Action::ActivateOverviewReference(id)),
            ParsedCommand::Add { id } => Some(Action::AddToBasketById(id)),
            ParsedCommand::Populate { count } => Some(Action::PopulateBasket(count)),
            ParsedCommand::Sort => Some(Action::SortBasket),
            ParsedCommand::Suggest => Some(Action::SuggestInsertions),
            ParsedCommand::Validate { index } => Some(Action::ValidateInsertion(index)),
            ParsedCommand::Show | ParsedCommand::Help | ParsedCommand::Quit => None,
        }
    }
}

/// Parse a slash-command string into a [`ParsedCommand`].
///
/// Returns `None` if the input does not start with `/` or is not a recognized
/// command. Command names are case-insensitive.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    let rest = input.strip_prefix('/')?;

    let mut parts = rest.splitn(2, ' ');
    let cmd = parts.next()?.to_lowercase();
    let arg = parts.next().map(str::trim).unwrap_or("");

    match cmd.as_str() {
        "search" | "s" if !arg.is_empty() => Some(ParsedCommand::Search { query: arg.to_string() }),
        "overview" | "o" if !arg.is_empty() => Some(ParsedCommand::Overview { id: arg.to_string() }),
        "add" | "a" => Some(ParsedCommand::Add { id: arg.parse().ok()? }),
        "populate" => Some(ParsedCommand::Populate { count: arg.parse().ok()? }),
        "sort" => Some(ParsedCommand::Sort),
        "suggest" => Some(ParsedCommand::Suggest),
        "validate" | "v" => Some(ParsedCommand::Validate { index: arg.parse().ok()? }),
        "show" | "ls" => Some(ParsedCommand::Show),
        "help" | "h" | "?" => Some(ParsedCommand::Help),
        "quit" | "q" | "exit" => Some(ParsedCommand::Quit),
        _ => None,
    }
}

pub const HELP: &[&str] = &[
    "/search <query>     search resources (d:<name> loads a local fixture)",
    "/overview <id>      show a resource and its neighbors",
    "/add <id>           add a cached resource to the basket",
    "/populate <n>       add n random neighbors to the basket",
    "/sort               order the basket into a sequence",
    "/suggest            ask for insertions into the sequence",
    "/validate <i>       accept the suggestion after sequence item i",
    "/show               print the current state",
    "/quit               leave",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("/search machine learning"),
            Some(ParsedCommand::Search { query: "machine learning".into() })
        );
        assert_eq!(
            parse_command("  /S d:23345 "),
            Some(ParsedCommand::Search { query: "d:23345".into() })
        );
        assert_eq!(parse_command("/overview 42"), Some(ParsedCommand::Overview { id: "42".into() }));
        assert_eq!(parse_command("/add 7"), Some(ParsedCommand::Add { id: 7 }));
        assert_eq!(parse_command("/populate 3"), Some(ParsedCommand::Populate { count: 3 }));
        assert_eq!(parse_command("/validate 0"), Some(ParsedCommand::Validate { index: 0 }));
        assert_eq!(parse_command("/sort"), Some(ParsedCommand::Sort));
        assert_eq!(parse_command("/quit"), Some(ParsedCommand::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_command("search x"), None);
        assert_eq!(parse_command("/search"), None);
        assert_eq!(parse_command("/add seven"), None);
        assert_eq!(parse_command("/validate -1"), None);
        assert_eq!(parse_command("/frobnicate"), None);
    }

    #[test]
    fn test_into_action() {
        assert!(matches!(
            ParsedCommand::Search { query: "q".into() }.into_action(),
            Some(Action::SubmitSearchQuery(q)) if q == "q"
        ));
        assert!(matches!(ParsedCommand::Validate { index: 2 }.into_action(), Some(Action::ValidateInsertion(2))));
        assert!(matches!(ParsedCommand::Add { id: 5 }.into_action(), Some(Action::AddToBasketById(5))));
        assert!(ParsedCommand::Show.into_action().is_none());
    }
}
