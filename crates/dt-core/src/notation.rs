//! `XdY` dice notation.

use std::str::FromStr;

use crate::error::{DiceError, DiceResult};
use crate::pool::{Pool, check_size};

const SEPARATOR: char = 'd';

/// A parsed `XdY` notation: `count` dice of `sides` sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notation {
    /// Number of dice.
    pub count: usize,
    /// Sides on each die.
    pub sides: u32,
}

impl Notation {
    /// Build the pool this notation describes.
    pub fn into_pool(self) -> DiceResult<Pool> {
        Pool::new(self.count, self.sides)
    }
}

impl FromStr for Notation {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        parse_notation(s)
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.count, self.sides)
    }
}

/// Parse `XdY` into its count and sides.
///
/// Both halves must be base-10 unsigned integers and the separator must
/// appear exactly once. Counts above [`MAX_DICE`](crate::pool::MAX_DICE)
/// are rejected before any pool is built.
pub fn parse_notation(s: &str) -> DiceResult<Notation> {
    let mut parts = s.split(SEPARATOR);
    let (Some(count), Some(sides), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DiceError::Format(format!("'{s}'")));
    };

    let count = count
        .parse::<usize>()
        .map_err(|_| DiceError::Format(format!("'{count}' is not a dice count in '{s}'")))?;
    let sides = sides
        .parse::<u32>()
        .map_err(|_| DiceError::Format(format!("'{sides}' is not a side count in '{s}'")))?;
    check_size(count)?;

    Ok(Notation { count, sides })
}

/// Parse `XdY` straight into a pool. No pool is produced on failure.
pub fn parse_dice_string(s: &str) -> DiceResult<Pool> {
    parse_notation(s)?.into_pool()
}
