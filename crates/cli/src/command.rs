//! Line parser for the console commands.

use spool_core::JobId;
use thiserror::Error;

const ADD_USAGE: &str = "add <name> <priority> <estimatedTime>";
const VIEW_USAGE: &str = "view <processId>";

/// Lines printed by `help`.
pub const HELP_LINES: &[&str] = &[
    "add <name> <priority> <estimatedTime>",
    "block",
    "unblock",
    "execute",
    "done",
    "view <processId>",
    "queues [--json]",
    "history",
    "stats",
    "help",
    "exit",
];

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        priority: i64,
        estimated_time: i64,
    },
    Block,
    Unblock,
    Execute,
    Done,
    View { id: JobId },
    Queues { json: bool },
    History,
    Stats,
    Help,
    Exit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid number of arguments. Use {usage}")]
    MissingArguments { usage: &'static str },

    #[error("Invalid {what}. Use {usage}")]
    InvalidArgument {
        what: &'static str,
        usage: &'static str,
    },

    #[error("Invalid command '{0}'. Use \"help\" for a list of available commands.")]
    Unknown(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match verb {
            "add" => {
                let [name, priority, estimated_time, ..] = args.as_slice() else {
                    return Err(CommandError::MissingArguments { usage: ADD_USAGE });
                };
                let invalid = CommandError::InvalidArgument {
                    what: "priority or estimatedTime",
                    usage: ADD_USAGE,
                };
                Command::Add {
                    name: name.to_string(),
                    priority: priority.parse().map_err(|_| invalid.clone())?,
                    estimated_time: estimated_time.parse().map_err(|_| invalid)?,
                }
            }
            "block" => Command::Block,
            "unblock" => Command::Unblock,
            "execute" => Command::Execute,
            "done" => Command::Done,
            "view" => {
                let raw = args
                    .first()
                    .ok_or(CommandError::MissingArguments { usage: VIEW_USAGE })?;
                let id = raw.parse().map_err(|_| CommandError::InvalidArgument {
                    what: "process id",
                    usage: VIEW_USAGE,
                })?;
                Command::View { id }
            }
            "queues" => Command::Queues {
                json: args.contains(&"--json"),
            },
            "history" => Command::History,
            "stats" => Command::Stats,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t "), Ok(None));
    }

    #[test]
    fn parses_add() {
        assert_eq!(
            Command::parse("add report 2 10"),
            Ok(Some(Command::Add {
                name: "report".into(),
                priority: 2,
                estimated_time: 10,
            }))
        );
        // Extra tokens are ignored, surrounding whitespace too.
        assert_eq!(
            Command::parse("  add flyer -1 3 extra "),
            Ok(Some(Command::Add {
                name: "flyer".into(),
                priority: -1,
                estimated_time: 3,
            }))
        );
    }

    #[test]
    fn add_keeps_non_positive_time_for_the_engine() {
        assert!(matches!(
            Command::parse("add memo 1 0"),
            Ok(Some(Command::Add { estimated_time: 0, .. }))
        ));
    }

    #[test]
    fn add_errors() {
        assert_eq!(
            Command::parse("add report 2"),
            Err(CommandError::MissingArguments { usage: ADD_USAGE })
        );
        assert!(matches!(
            Command::parse("add report high 10"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Command::parse("add report 1 soon"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn parses_bare_verbs() {
        assert_eq!(Command::parse("block"), Ok(Some(Command::Block)));
        assert_eq!(Command::parse("unblock"), Ok(Some(Command::Unblock)));
        assert_eq!(Command::parse("execute"), Ok(Some(Command::Execute)));
        assert_eq!(Command::parse("done"), Ok(Some(Command::Done)));
        assert_eq!(Command::parse("help"), Ok(Some(Command::Help)));
        assert_eq!(Command::parse("history"), Ok(Some(Command::History)));
        assert_eq!(Command::parse("stats"), Ok(Some(Command::Stats)));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("quit"), Ok(Some(Command::Exit)));
    }

    #[test]
    fn parses_view() {
        assert_eq!(Command::parse("view 3"), Ok(Some(Command::View { id: 3 })));
        assert_eq!(
            Command::parse("view"),
            Err(CommandError::MissingArguments { usage: VIEW_USAGE })
        );
        assert!(matches!(
            Command::parse("view -2"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn parses_queues() {
        assert_eq!(Command::parse("queues"), Ok(Some(Command::Queues { json: false })));
        assert_eq!(Command::parse("queues --json"), Ok(Some(Command::Queues { json: true })));
    }

    #[test]
    fn unknown_verb() {
        let err = Command::parse("print now").unwrap_err();
        assert_eq!(err, CommandError::Unknown("print".into()));
        assert!(err.to_string().contains("help"));
    }

    #[test]
    fn help_lists_every_engine_command() {
        for verb in ["add", "block", "unblock", "execute", "done", "view"] {
            assert!(HELP_LINES.iter().any(|l| l.starts_with(verb)), "{verb} missing");
        }
    }
}
