//! Line commands typed by the user.

use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "commands: title <text> | desc <text> | submit | refresh | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SetTitle(String),
    SetDescription(String),
    Submit,
    Refresh,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command `{0}`")]
pub struct ParseActionError(pub String);

impl FromStr for UserAction {
    type Err = ParseActionError;

    /// `title` and `desc` take the rest of the line verbatim, so
    /// `desc` alone clears the description.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line, ""),
        };
        match command {
            "title" => Ok(UserAction::SetTitle(rest.to_string())),
            "desc" => Ok(UserAction::SetDescription(rest.to_string())),
            "submit" => Ok(UserAction::Submit),
            "refresh" => Ok(UserAction::Refresh),
            "quit" | "exit" => Ok(UserAction::Quit),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_commands_keep_the_rest_of_the_line() {
        assert_eq!(
            "title Buy  milk ".parse(),
            Ok(UserAction::SetTitle("Buy  milk ".to_string()))
        );
        assert_eq!(
            "desc two litres".parse(),
            Ok(UserAction::SetDescription("two litres".to_string()))
        );
    }

    #[test]
    fn bare_field_command_clears() {
        assert_eq!("desc".parse(), Ok(UserAction::SetDescription(String::new())));
        assert_eq!("title\r\n".parse(), Ok(UserAction::SetTitle(String::new())));
    }

    #[test]
    fn plain_commands() {
        assert_eq!("submit".parse(), Ok(UserAction::Submit));
        assert_eq!("refresh".parse(), Ok(UserAction::Refresh));
        assert_eq!("quit".parse(), Ok(UserAction::Quit));
        assert_eq!("exit".parse(), Ok(UserAction::Quit));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "delete 1".parse::<UserAction>(),
            Err(ParseActionError("delete".to_string()))
        );
    }
}
