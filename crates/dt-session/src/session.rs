//! Interactive table sessions.
//!
//! `TableSession` owns a [`Table`] and the random source its rolls draw
//! from, and turns lines of input into replies.

use dt_core::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::dispatch::dispatch;

/// A dice table being played at.
pub struct TableSession<R = StdRng> {
    table: Table,
    rng: R,
    finished: bool,
}

impl TableSession<StdRng> {
    /// Start a session on `table`.
    ///
    /// The RNG is seeded from the config, or from OS entropy when no seed
    /// is set. A configured table name replaces the table's own.
    pub fn new(mut table: Table, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        if config.table_name.is_some() {
            table.set_name(config.table_name);
        }
        Self::with_rng(table, rng)
    }
}

impl<R: Rng> TableSession<R> {
    /// Start a session that rolls with the given random source.
    pub fn with_rng(table: Table, rng: R) -> Self {
        Self {
            table,
            rng,
            finished: false,
        }
    }

    /// The table being played at.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable access to the table.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Give the table back, ending the session.
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Returns true once an `exit` command has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The input prompt, prefixed with the table name when it has one.
    pub fn prompt(&self) -> String {
        format!("{}:> ", self.table.name().unwrap_or_default())
    }

    /// Process a line of user input and return a reply.
    ///
    /// Blank input yields an empty reply. Malformed input yields an
    /// explanation and leaves the table untouched.
    pub fn process(&mut self, input: &str) -> String {
        if input.trim().is_empty() {
            return String::new();
        }
        match parse_command(input) {
            Ok(command) => self.execute(command),
            Err(err) => {
                debug!(input, %err, "rejected command");
                err.to_string()
            }
        }
    }

    /// Execute an already parsed command.
    pub fn execute(&mut self, command: Command) -> String {
        if command == Command::Exit {
            debug!("session finished");
            self.finished = true;
        }
        dispatch(&mut self.table, &mut self.rng, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_core::parse_table_string;

    fn session() -> TableSession {
        let table = parse_table_string(&["2d6"], vec!["atk".to_string()]).unwrap();
        TableSession::new(table, SessionConfig::default().with_seed(9))
    }

    #[test]
    fn prompt_uses_table_name() {
        assert_eq!(session().prompt(), ":> ");
        let named = TableSession::new(
            Table::new(),
            SessionConfig::default().with_seed(1).with_table_name("Tavern"),
        );
        assert_eq!(named.prompt(), "Tavern:> ");
    }

    #[test]
    fn blank_input_is_silent() {
        assert_eq!(session().process("   "), "");
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut s = session();
        let before = s.table().clone();
        assert_eq!(
            s.process("juggle atk"),
            "juggle atk is not a valid command. Maybe try help for a list of valid commands."
        );
        assert_eq!(s.table(), &before);
    }

    #[test]
    fn usage_for_bad_arguments() {
        let mut s = session();
        assert_eq!(s.process("roll"), "usage: roll pool <names...> | roll table");
        assert_eq!(
            s.process("set pool atk"),
            "usage: set die <pool> <index> <value> | set pool <pool> <value> | set table <value>"
        );
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = session();
        let mut b = session();
        assert_eq!(a.process("roll table"), b.process("roll table"));
    }

    #[test]
    fn exit_finishes() {
        let mut s = session();
        assert!(!s.is_finished());
        assert_eq!(s.process("exit"), "Goodbye...");
        assert!(s.is_finished());
    }

    #[test]
    fn injected_rng() {
        let table = parse_table_string(&["5d4"], vec!["p".to_string()]).unwrap();
        let mut s = TableSession::with_rng(table, StdRng::seed_from_u64(5));
        s.process("roll pool p");
        let tops = s.table().get("p").unwrap().list();
        assert!(tops.iter().all(|t| (1..=4).contains(t)));
        s.process("add pool q:1d8");
        assert_eq!(s.into_table().len(), 2);
    }

    #[test]
    fn table_mut_reaches_pools() {
        let mut s = session();
        s.table_mut().add("dmg", 1, 8).unwrap();
        assert!(s.process("view pool dmg").contains("A pool of 1 d8."));
    }
}
