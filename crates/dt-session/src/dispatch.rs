//! Command handlers.
//!
//! Each handler reads or mutates the table and renders a reply. Handlers
//! never fail: errors become lines in the reply, and batch commands keep
//! going after a bad name.

use dt_core::{DiceError, Pool, Table};
use rand::Rng;
use tracing::debug;

use crate::command::{Command, DiceCount, NewPool};
use crate::error::CommandResult;
use crate::help::HELP;

const EMPTY_TABLE: &str = "There are no pools on the table.";

/// Run a parsed command against the table and render the reply.
pub fn dispatch<R: Rng + ?Sized>(table: &mut Table, rng: &mut R, command: Command) -> String {
    debug!(verb = %command.verb(), "dispatching command");
    match command {
        Command::Help => HELP.to_string(),
        Command::RollPools(names) => roll_pools(table, rng, &names),
        Command::RollTable => roll_table(table, rng),
        Command::AddDice(names) => add_dice(table, &names),
        Command::AddPools(items) => add_pools(table, items),
        Command::SubtractDice(items) => subtract_dice(table, items),
        Command::SubtractPools(names) => subtract_pools(table, &names),
        Command::ViewPools(names) => view_pools(table, &names),
        Command::ViewTable => view_table(table),
        Command::ClearPools(names) => clear_pools(table, &names),
        Command::ClearTable => clear_table(table),
        Command::SetDie { pool, index, value } => set_die(table, &pool, index, value),
        Command::SetPool { pool, value } => set_pool(table, &pool, value),
        Command::SetTable { value } => set_table(table, value),
        Command::Describe { pool, text } => describe(table, &pool, text),
        Command::Exit => "Goodbye...".to_string(),
    }
}

/// A heading followed by one line per item.
struct Reply {
    out: String,
}

impl Reply {
    fn new(heading: &str) -> Self {
        Self {
            out: heading.to_string(),
        }
    }

    fn line(&mut self, line: impl AsRef<str>) {
        self.out.push('\n');
        self.out.push_str(line.as_ref());
    }

    fn finish(self) -> String {
        self.out
    }
}

fn missing(name: &str) -> String {
    format!("Pool {name} does not exist.")
}

fn roll_line(name: &str, pool: &Pool) -> String {
    let faces: Vec<String> = pool.list().iter().map(u32::to_string).collect();
    format!("Pool {name}: [{}] Total: {}", faces.join(", "), pool.total())
}

fn roll_pools<R: Rng + ?Sized>(table: &mut Table, rng: &mut R, names: &[String]) -> String {
    let mut reply = Reply::new("Your Rolls:");
    for name in names {
        match table.get_mut(name) {
            Some(pool) => {
                pool.roll(rng);
                reply.line(roll_line(name, pool));
            }
            None => reply.line(missing(name)),
        }
    }
    reply.finish()
}

fn roll_table<R: Rng + ?Sized>(table: &mut Table, rng: &mut R) -> String {
    let mut reply = Reply::new("Your Rolls:");
    if table.is_empty() {
        reply.line(EMPTY_TABLE);
        return reply.finish();
    }
    table.roll(rng);
    for (name, pool) in table.iter() {
        reply.line(roll_line(name, pool));
    }
    reply.finish()
}

fn add_dice(table: &mut Table, names: &[String]) -> String {
    let mut reply = Reply::new("Added:");
    for name in names {
        match table.get_mut(name) {
            Some(pool) => {
                pool.add();
                reply.line(format!("Added a die to pool {name}. It now holds {pool}."));
            }
            None => reply.line(missing(name)),
        }
    }
    reply.finish()
}

fn add_pools(table: &mut Table, items: Vec<CommandResult<NewPool>>) -> String {
    let mut reply = Reply::new("Added:");
    for item in items {
        let built = item.and_then(|new| Ok((new.name, new.notation.into_pool()?)));
        match built {
            Ok((name, pool)) => {
                let line = format!("pool {name} of {pool}");
                match table.insert(name, pool) {
                    Some(old) => reply.line(format!("Replaced {line}, it was {old}.")),
                    None => reply.line(format!("Added {line} to the table.")),
                }
            }
            Err(err) => reply.line(err.to_string()),
        }
    }
    reply.finish()
}

fn subtract_dice(table: &mut Table, items: Vec<CommandResult<DiceCount>>) -> String {
    let mut reply = Reply::new("Subtracted:");
    for item in items {
        let DiceCount { pool: name, count } = match item {
            Ok(item) => item,
            Err(err) => {
                reply.line(err.to_string());
                continue;
            }
        };
        let Some(pool) = table.get_mut(&name) else {
            reply.line(missing(&name));
            continue;
        };
        match pool.subtract_many(count) {
            Ok(()) => {
                let noun = if count == 1 { "die" } else { "dice" };
                reply.line(format!(
                    "Subtracted {count} {noun} from pool {name}. It now holds {pool}."
                ));
            }
            Err(err) => reply.line(format!("Pool {name}: {err}.")),
        }
    }
    reply.finish()
}

fn subtract_pools(table: &mut Table, names: &[String]) -> String {
    let mut reply = Reply::new("Subtracted:");
    for name in names {
        match table.remove(name) {
            Ok(_) => reply.line(format!("Removed pool {name} from the table.")),
            Err(DiceError::NotFound(_)) => reply.line(missing(name)),
            Err(err) => reply.line(err.to_string()),
        }
    }
    reply.finish()
}

fn view_pools(table: &Table, names: &[String]) -> String {
    let mut reply = Reply::new("Pool Descriptions:");
    for name in names {
        match table.get(name) {
            Some(pool) => reply.line(format!("{name}: {}", pool.describe())),
            None => reply.line(missing(name)),
        }
    }
    reply.finish()
}

fn view_table(table: &Table) -> String {
    let mut reply = Reply::new("Pool Descriptions:");
    if table.is_empty() {
        reply.line(EMPTY_TABLE);
    }
    for (name, pool) in table.iter() {
        reply.line(format!("{name}: {}", pool.describe()));
    }
    reply.finish()
}

fn clear_pools(table: &mut Table, names: &[String]) -> String {
    let mut reply = Reply::new("Cleared:");
    for name in names {
        match table.get_mut(name) {
            Some(pool) => {
                pool.clear();
                reply.line(format!("Cleared pool {name}."));
            }
            None => reply.line(missing(name)),
        }
    }
    reply.finish()
}

fn clear_table(table: &mut Table) -> String {
    table.clear();
    let mut reply = Reply::new("Cleared:");
    reply.line("Cleared the table.");
    reply.finish()
}

fn set_die(table: &mut Table, name: &str, index: usize, value: u32) -> String {
    let mut reply = Reply::new("Set:");
    match table.get_mut(name) {
        Some(pool) => match pool.set_die(index, value) {
            Ok(()) => reply.line(format!("Die {index} in pool {name} set to {value}.")),
            Err(err) => reply.line(format!("Pool {name}: {err}.")),
        },
        None => reply.line(missing(name)),
    }
    reply.finish()
}

fn set_pool(table: &mut Table, name: &str, value: u32) -> String {
    let mut reply = Reply::new("Set:");
    match table.get_mut(name) {
        Some(pool) => match pool.set_all(value) {
            Ok(()) => reply.line(format!("Set every die in pool {name} to {value}.")),
            Err(err) => reply.line(format!("Pool {name}: {err}.")),
        },
        None => reply.line(missing(name)),
    }
    reply.finish()
}

fn set_table(table: &mut Table, value: u32) -> String {
    let mut reply = Reply::new("Set:");
    match table.set_all(value) {
        Ok(()) => reply.line(format!("Set every die on the table to {value}.")),
        Err(err) => reply.line(format!("{err}. Nothing was changed.")),
    }
    reply.finish()
}

fn describe(table: &mut Table, name: &str, text: Option<String>) -> String {
    let mut reply = Reply::new("Described:");
    match table.get_mut(name) {
        Some(pool) => {
            let cleared = text.is_none();
            pool.set_description(text);
            if cleared {
                reply.line(format!("Cleared the description of pool {name}."));
            } else {
                reply.line(format!("Described pool {name}."));
            }
        }
        None => reply.line(missing(name)),
    }
    reply.finish()
}
