//! Command interpreter for a dice table.
//!
//! Lines like `roll pool strength` or `add pool power:4d6` are parsed into
//! a [`Command`] and run against a [`dt_core::Table`] held by a
//! [`TableSession`]. Every command produces a human-readable reply; bad
//! input is explained rather than raised.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod session;

pub use command::{Command, DiceCount, NewPool, Verb, parse_command};
pub use config::SessionConfig;
pub use dispatch::dispatch;
pub use error::{CommandError, CommandResult};
pub use session::TableSession;
