//! Parsing input lines into commands.
//!
//! The verb and the `die`/`pool`/`table` selector are case-insensitive.
//! Pool names are kept exactly as typed.

use dt_core::{Notation, parse_notation};

use crate::error::{CommandError, CommandResult};

/// The verbs the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Show usage text.
    Help,
    /// Roll pools or the whole table.
    Roll,
    /// Add dice to pools or pools to the table.
    Add,
    /// Remove dice from pools or pools from the table.
    Subtract,
    /// Describe pools.
    View,
    /// Empty pools or the table.
    Clear,
    /// Turn dice to a chosen face.
    Set,
    /// Attach a note to a pool.
    Describe,
    /// Leave the session.
    Exit,
}

/// Every verb, in help order.
pub const VERBS: &[Verb] = &[
    Verb::Help,
    Verb::Roll,
    Verb::Add,
    Verb::Subtract,
    Verb::View,
    Verb::Clear,
    Verb::Set,
    Verb::Describe,
    Verb::Exit,
];

impl Verb {
    /// Parse a verb from its keyword.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "help" => Some(Self::Help),
            "roll" => Some(Self::Roll),
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "view" => Some(Self::View),
            "clear" => Some(Self::Clear),
            "set" => Some(Self::Set),
            "describe" => Some(Self::Describe),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The keyword for this verb.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Roll => "roll",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::View => "view",
            Self::Clear => "clear",
            Self::Set => "set",
            Self::Describe => "describe",
            Self::Exit => "exit",
        }
    }

    /// One-line grammar for this verb.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "usage: help",
            Self::Roll => "usage: roll pool <names...> | roll table",
            Self::Add => "usage: add die <names...> | add pool <name:XdY...>",
            Self::Subtract => {
                "usage: subtract die <name[:count]...> | subtract pool <names...>"
            }
            Self::View => "usage: view pool <names...> | view table",
            Self::Clear => "usage: clear pool <names...> | clear table",
            Self::Set => {
                "usage: set die <pool> <index> <value> | set pool <pool> <value> | set table <value>"
            }
            Self::Describe => "usage: describe <pool> [text...]",
            Self::Exit => "usage: exit",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A pool to create from a `name:XdY` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPool {
    /// Name to store the pool under.
    pub name: String,
    /// Dice to put in it.
    pub notation: Notation,
}

/// Dice to take off a pool, from a `name[:count]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceCount {
    /// The pool to shrink.
    pub pool: String,
    /// How many dice to remove.
    pub count: usize,
}

/// A fully parsed command.
///
/// Batch variants keep a result per argument so one bad argument is
/// reported without dropping the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show usage text.
    Help,
    /// Roll the named pools.
    RollPools(Vec<String>),
    /// Roll every pool.
    RollTable,
    /// Add one die to each named pool.
    AddDice(Vec<String>),
    /// Create or replace pools.
    AddPools(Vec<CommandResult<NewPool>>),
    /// Take dice off named pools.
    SubtractDice(Vec<CommandResult<DiceCount>>),
    /// Remove the named pools from the table.
    SubtractPools(Vec<String>),
    /// Describe the named pools.
    ViewPools(Vec<String>),
    /// Describe every pool.
    ViewTable,
    /// Remove every die from the named pools.
    ClearPools(Vec<String>),
    /// Remove every pool.
    ClearTable,
    /// Turn one die to a face.
    SetDie {
        /// Pool holding the die.
        pool: String,
        /// Zero-based position of the die.
        index: usize,
        /// Face to show.
        value: u32,
    },
    /// Turn every die in a pool to a face.
    SetPool {
        /// The pool.
        pool: String,
        /// Face to show.
        value: u32,
    },
    /// Turn every die on the table to a face.
    SetTable {
        /// Face to show.
        value: u32,
    },
    /// Set or clear a pool's note.
    Describe {
        /// The pool.
        pool: String,
        /// New note; `None` clears it.
        text: Option<String>,
    },
    /// Leave the session.
    Exit,
}

impl Command {
    /// The verb this command was parsed from.
    pub fn verb(&self) -> Verb {
        match self {
            Self::Help => Verb::Help,
            Self::RollPools(_) | Self::RollTable => Verb::Roll,
            Self::AddDice(_) | Self::AddPools(_) => Verb::Add,
            Self::SubtractDice(_) | Self::SubtractPools(_) => Verb::Subtract,
            Self::ViewPools(_) | Self::ViewTable => Verb::View,
            Self::ClearPools(_) | Self::ClearTable => Verb::Clear,
            Self::SetDie { .. } | Self::SetPool { .. } | Self::SetTable { .. } => Verb::Set,
            Self::Describe { .. } => Verb::Describe,
            Self::Exit => Verb::Exit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selector {
    Die,
    Pool,
    Table,
}

impl Selector {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "die" | "dice" => Some(Self::Die),
            "pool" | "pools" => Some(Self::Pool),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

/// Parse a line of input into a command.
pub fn parse_command(input: &str) -> CommandResult<Command> {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return Err(CommandError::Empty);
    };
    let verb = Verb::parse(first).ok_or_else(|| CommandError::UnknownCommand(input.to_string()))?;

    match verb {
        Verb::Help => Ok(Command::Help),
        Verb::Exit => Ok(Command::Exit),
        Verb::Roll => parse_pools_or_table(verb, rest, Command::RollPools, Command::RollTable),
        Verb::View => parse_pools_or_table(verb, rest, Command::ViewPools, Command::ViewTable),
        Verb::Clear => parse_pools_or_table(verb, rest, Command::ClearPools, Command::ClearTable),
        Verb::Add => parse_add(rest),
        Verb::Subtract => parse_subtract(rest),
        Verb::Set => parse_set(rest),
        Verb::Describe => parse_describe(rest),
    }
}

fn split_selector<'a>(verb: Verb, rest: &'a [&'a str]) -> CommandResult<(Selector, &'a [&'a str])> {
    let (selector, args) = rest.split_first().ok_or(CommandError::Usage(verb))?;
    let selector = Selector::parse(selector).ok_or(CommandError::Usage(verb))?;
    Ok((selector, args))
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn parse_pools_or_table(
    verb: Verb,
    rest: &[&str],
    pools: fn(Vec<String>) -> Command,
    table: Command,
) -> CommandResult<Command> {
    match split_selector(verb, rest)? {
        (Selector::Pool, names) if !names.is_empty() => Ok(pools(owned(names))),
        (Selector::Table, []) => Ok(table),
        _ => Err(CommandError::Usage(verb)),
    }
}

fn parse_add(rest: &[&str]) -> CommandResult<Command> {
    match split_selector(Verb::Add, rest)? {
        (Selector::Die, names) if !names.is_empty() => Ok(Command::AddDice(owned(names))),
        (Selector::Pool, specs) if !specs.is_empty() => Ok(Command::AddPools(
            specs.iter().map(|spec| parse_new_pool(spec)).collect(),
        )),
        _ => Err(CommandError::Usage(Verb::Add)),
    }
}

fn parse_new_pool(arg: &str) -> CommandResult<NewPool> {
    let (name, notation) = arg
        .split_once(':')
        .ok_or_else(|| CommandError::MissingSeparator(arg.to_string()))?;
    if name.is_empty() {
        return Err(CommandError::EmptyName(arg.to_string()));
    }
    Ok(NewPool {
        name: name.to_string(),
        notation: parse_notation(notation)?,
    })
}

fn parse_subtract(rest: &[&str]) -> CommandResult<Command> {
    match split_selector(Verb::Subtract, rest)? {
        (Selector::Die, args) if !args.is_empty() => Ok(Command::SubtractDice(
            args.iter().map(|arg| parse_dice_count(arg)).collect(),
        )),
        (Selector::Pool, names) if !names.is_empty() => Ok(Command::SubtractPools(owned(names))),
        _ => Err(CommandError::Usage(Verb::Subtract)),
    }
}

fn parse_dice_count(arg: &str) -> CommandResult<DiceCount> {
    let Some((pool, count)) = arg.split_once(':') else {
        return Ok(DiceCount {
            pool: arg.to_string(),
            count: 1,
        });
    };
    if pool.is_empty() {
        return Err(CommandError::EmptyName(arg.to_string()));
    }
    Ok(DiceCount {
        pool: pool.to_string(),
        count: parse_number(count, "number of dice")?,
    })
}

fn parse_set(rest: &[&str]) -> CommandResult<Command> {
    match split_selector(Verb::Set, rest)? {
        (Selector::Die, [pool, index, value]) => Ok(Command::SetDie {
            pool: pool.to_string(),
            index: parse_number(index, "die position")?,
            value: parse_number(value, "face value")?,
        }),
        (Selector::Pool, [pool, value]) => Ok(Command::SetPool {
            pool: pool.to_string(),
            value: parse_number(value, "face value")?,
        }),
        (Selector::Table, [value]) => Ok(Command::SetTable {
            value: parse_number(value, "face value")?,
        }),
        _ => Err(CommandError::Usage(Verb::Set)),
    }
}

fn parse_describe(rest: &[&str]) -> CommandResult<Command> {
    let (pool, text) = rest.split_first().ok_or(CommandError::Usage(Verb::Describe))?;
    Ok(Command::Describe {
        pool: pool.to_string(),
        text: (!text.is_empty()).then(|| text.join(" ")),
    })
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &'static str) -> CommandResult<T> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        what,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_core::DiceError;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
    }

    #[test]
    fn unknown_verb_keeps_input() {
        assert_eq!(
            parse_command("dance wildly"),
            Err(CommandError::UnknownCommand("dance wildly".to_string()))
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("HELP"), Ok(Command::Help));
        assert_eq!(parse_command("Roll TABLE"), Ok(Command::RollTable));
        assert_eq!(parse_command("quit"), Ok(Command::Exit));
    }

    #[test]
    fn every_verb_round_trips_its_name() {
        for verb in VERBS {
            assert_eq!(Verb::parse(verb.name()), Some(*verb));
            assert!(verb.usage().contains(verb.name()));
        }
    }

    #[test]
    fn roll_forms() {
        assert_eq!(
            parse_command("roll pool str Dex"),
            Ok(Command::RollPools(names(&["str", "Dex"])))
        );
        assert_eq!(parse_command("roll"), Err(CommandError::Usage(Verb::Roll)));
        assert_eq!(parse_command("roll pool"), Err(CommandError::Usage(Verb::Roll)));
        assert_eq!(
            parse_command("roll table extra"),
            Err(CommandError::Usage(Verb::Roll))
        );
        assert_eq!(
            parse_command("roll banana"),
            Err(CommandError::Usage(Verb::Roll))
        );
    }

    #[test]
    fn view_and_clear_forms() {
        assert_eq!(
            parse_command("view pool a"),
            Ok(Command::ViewPools(names(&["a"])))
        );
        assert_eq!(parse_command("view table"), Ok(Command::ViewTable));
        assert_eq!(
            parse_command("clear pool a b"),
            Ok(Command::ClearPools(names(&["a", "b"])))
        );
        assert_eq!(parse_command("clear table"), Ok(Command::ClearTable));
        assert_eq!(parse_command("clear"), Err(CommandError::Usage(Verb::Clear)));
    }

    #[test]
    fn add_pool_keeps_bad_items() {
        let Ok(Command::AddPools(items)) = parse_command("add pool power:4d6 broken x:3c6 :2d4")
        else {
            panic!("expected add pools");
        };
        assert_eq!(
            items[0],
            Ok(NewPool {
                name: "power".to_string(),
                notation: Notation { count: 4, sides: 6 },
            })
        );
        assert_eq!(
            items[1],
            Err(CommandError::MissingSeparator("broken".to_string()))
        );
        assert!(matches!(
            items[2],
            Err(CommandError::Dice(DiceError::Format(_)))
        ));
        assert_eq!(items[3], Err(CommandError::EmptyName(":2d4".to_string())));
    }

    #[test]
    fn add_die_needs_names() {
        assert_eq!(
            parse_command("add die a b"),
            Ok(Command::AddDice(names(&["a", "b"])))
        );
        assert_eq!(parse_command("add die"), Err(CommandError::Usage(Verb::Add)));
        assert_eq!(parse_command("add table"), Err(CommandError::Usage(Verb::Add)));
    }

    #[test]
    fn subtract_die_counts() {
        let Ok(Command::SubtractDice(items)) = parse_command("subtract die str:3 agi bad:x")
        else {
            panic!("expected subtract dice");
        };
        assert_eq!(
            items[0],
            Ok(DiceCount {
                pool: "str".to_string(),
                count: 3
            })
        );
        assert_eq!(
            items[1],
            Ok(DiceCount {
                pool: "agi".to_string(),
                count: 1
            })
        );
        assert_eq!(
            items[2],
            Err(CommandError::InvalidNumber {
                what: "number of dice",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn subtract_pool_names() {
        assert_eq!(
            parse_command("subtract pool a b"),
            Ok(Command::SubtractPools(names(&["a", "b"])))
        );
    }

    #[test]
    fn set_reads_grammar_positions() {
        assert_eq!(
            parse_command("set die str 2 5"),
            Ok(Command::SetDie {
                pool: "str".to_string(),
                index: 2,
                value: 5
            })
        );
        assert_eq!(
            parse_command("set pool str 4"),
            Ok(Command::SetPool {
                pool: "str".to_string(),
                value: 4
            })
        );
        assert_eq!(parse_command("set table 3"), Ok(Command::SetTable { value: 3 }));
    }

    #[test]
    fn set_argument_counts() {
        for bad in ["set", "set die str 2", "set pool str", "set table", "set table 1 2"] {
            assert_eq!(
                parse_command(bad),
                Err(CommandError::Usage(Verb::Set)),
                "{bad}"
            );
        }
        assert!(matches!(
            parse_command("set table -1"),
            Err(CommandError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn describe_joins_text() {
        assert_eq!(
            parse_command("describe str Rolled for strength"),
            Ok(Command::Describe {
                pool: "str".to_string(),
                text: Some("Rolled for strength".to_string())
            })
        );
        assert_eq!(
            parse_command("describe str"),
            Ok(Command::Describe {
                pool: "str".to_string(),
                text: None
            })
        );
    }

    #[test]
    fn usage_error_renders_grammar() {
        assert_eq!(
            CommandError::Usage(Verb::View).to_string(),
            "usage: view pool <names...> | view table"
        );
    }

    #[test]
    fn command_knows_its_verb() {
        assert_eq!(Command::ClearTable.verb(), Verb::Clear);
        assert_eq!(Command::SetTable { value: 1 }.verb(), Verb::Set);
    }
}
