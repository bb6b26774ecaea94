//! Error types for command parsing.

use dt_core::DiceError;
use thiserror::Error;

use crate::command::Verb;

/// Result type for command parsing.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors found while turning a line of input into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was blank.
    #[error("no command given. Maybe try help for a list of valid commands.")]
    Empty,

    /// The first word is not a known verb.
    #[error("{0} is not a valid command. Maybe try help for a list of valid commands.")]
    UnknownCommand(String),

    /// The verb was known but its arguments did not fit its grammar.
    #[error("{}", .0.usage())]
    Usage(Verb),

    /// A number was expected.
    #[error("'{value}' is not a valid {what}")]
    InvalidNumber {
        /// What the number was meant to be.
        what: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// A `name:value` argument had no colon.
    #[error("argument '{0}' failed. Format is [name]:[XdY]")]
    MissingSeparator(String),

    /// A `name:value` argument had nothing before the colon.
    #[error("argument '{0}' has no pool name")]
    EmptyName(String),

    /// The dice engine rejected the argument.
    #[error("{0}")]
    Dice(#[from] DiceError),
}
