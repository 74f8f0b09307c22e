//! Command parsing for the interactive prompt.

use shelfsync::prelude::*;
use thiserror::Error;

/// One line of operator input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the current table.
    List,
    /// Request creation of a record.
    Add(ItemDraft),
    /// Request an update to an existing record.
    Update(ItemId, ItemDraft),
    /// Request deletion of a record.
    Delete(ItemId),
    /// Exit the demo.
    Quit,
}

/// Input that could not be parsed.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// Verb not recognized.
    #[error("unknown command {0:?} (try: list | add | update | del | quit)")]
    Unknown(String),

    /// `add` arguments malformed.
    #[error("usage: add <name>;<owner>;<price>")]
    BadAdd,

    /// `update` arguments malformed.
    #[error("usage: update <id> <name>;<owner>;<price>")]
    BadUpdate,

    /// `del` arguments malformed.
    #[error("usage: del <id>")]
    BadDelete,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        match verb {
            "list" | "ls" => Ok(Self::List),
            "add" => parse_draft(rest).map(Self::Add).ok_or(CommandError::BadAdd),
            "update" | "up" => {
                let (id, rest) = rest.split_once(' ').ok_or(CommandError::BadUpdate)?;
                let id: ItemId = id.trim().parse().map_err(|_| CommandError::BadUpdate)?;
                let draft = parse_draft(rest).ok_or(CommandError::BadUpdate)?;
                Ok(Self::Update(id, draft))
            }
            "del" | "rm" => {
                let id: ItemId = rest.trim().parse().map_err(|_| CommandError::BadDelete)?;
                Ok(Self::Delete(id))
            }
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Parse `<name>;<owner>;<price>`.
fn parse_draft(input: &str) -> Option<ItemDraft> {
    let mut parts = input.splitn(3, ';');
    let name = parts.next()?.trim();
    let owner = parts.next()?.trim();
    let price: f64 = parts.next()?.trim().parse().ok()?;
    Some(ItemDraft::new(name, owner, price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("  ls  ").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_add() {
        let command = Command::parse("add Dune; Herbert; 12.5").unwrap();
        assert_eq!(command, Command::Add(ItemDraft::new("Dune", "Herbert", 12.5)));
    }

    #[test]
    fn test_parse_add_missing_parts() {
        assert_eq!(Command::parse("add Dune;Herbert"), Err(CommandError::BadAdd));
        assert_eq!(Command::parse("add"), Err(CommandError::BadAdd));
    }

    #[test]
    fn test_parse_update() {
        let command = Command::parse("update 5 Dune2;Herbert;15").unwrap();
        assert_eq!(
            command,
            Command::Update(5, ItemDraft::new("Dune2", "Herbert", 15.0))
        );
    }

    #[test]
    fn test_parse_update_bad_id() {
        assert_eq!(
            Command::parse("update five Dune;Herbert;12"),
            Err(CommandError::BadUpdate)
        );
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(Command::parse("del 7").unwrap(), Command::Delete(7));
        assert_eq!(Command::parse("rm 7").unwrap(), Command::Delete(7));
    }

    #[test]
    fn test_parse_delete_bad_id() {
        assert_eq!(Command::parse("del dune"), Err(CommandError::BadDelete));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            Command::parse("frobnicate 5"),
            Err(CommandError::Unknown(_))
        ));
    }
}
