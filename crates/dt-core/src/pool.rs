//! Pools of same-sided dice.

use rand::Rng;
use serde::Serialize;

use crate::die::{Die, check_face};
use crate::error::{DiceError, DiceResult};

/// Most dice a pool can be created with in one go.
///
/// Pools grown one die at a time with [`Pool::add`] may pass it; their
/// totals are still exact since [`Pool::total`] sums into a `u64`.
pub const MAX_DICE: usize = 10_000;

/// An ordered collection of dice that all share one side count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    dice: Vec<Die>,
    sides: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Pool {
    /// Create a pool of `size` dice with `sides` sides, each showing 1.
    ///
    /// An empty pool (`size == 0`) is allowed; a zero-sided one is not,
    /// nor is one of more than [`MAX_DICE`] dice.
    pub fn new(size: usize, sides: u32) -> DiceResult<Self> {
        if sides == 0 {
            return Err(DiceError::InvalidArgument(
                "a pool needs dice with at least one side".to_string(),
            ));
        }
        check_size(size)?;
        Ok(Self {
            dice: vec![Die::fresh(sides); size],
            sides,
            description: None,
        })
    }

    /// Number of sides on every die in the pool.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The dice in pool order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Returns how many dice are in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Free-text note appended to [`Pool::describe`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the free-text note. Blank text clears it.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.filter(|d| !d.trim().is_empty());
    }

    /// Roll every die in the pool.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// The face showing on each die, in pool order.
    pub fn list(&self) -> Vec<u32> {
        self.dice.iter().map(Die::top).collect()
    }

    /// Sum of all faces showing, or 0 if empty.
    pub fn total(&self) -> u64 {
        self.dice.iter().map(|d| u64::from(d.top())).sum()
    }

    /// Append one die showing 1.
    ///
    /// Not capped by [`MAX_DICE`]: growth is one die per call, so memory
    /// rises only as fast as the caller asks.
    pub fn add(&mut self) {
        self.dice.push(Die::fresh(self.sides));
    }

    /// Remove the most recently added die.
    pub fn subtract(&mut self) -> DiceResult<Die> {
        self.dice.pop().ok_or(DiceError::EmptyPool)
    }

    /// Remove the `count` most recently added dice.
    ///
    /// Nothing is removed unless the pool holds at least `count` dice.
    pub fn subtract_many(&mut self, count: usize) -> DiceResult<()> {
        if count > 0 && self.dice.is_empty() {
            return Err(DiceError::EmptyPool);
        }
        if count > self.dice.len() {
            return Err(DiceError::NotEnoughDice {
                requested: count,
                available: self.dice.len(),
            });
        }
        self.dice.truncate(self.dice.len() - count);
        Ok(())
    }

    /// Remove every die, keeping the side count and description.
    pub fn clear(&mut self) {
        self.dice.clear();
    }

    /// Turn the die at zero-based `index` to face `value`.
    pub fn set_die(&mut self, index: usize, value: u32) -> DiceResult<()> {
        let len = self.dice.len();
        self.dice
            .get_mut(index)
            .ok_or(DiceError::DieNotFound { index, len })?
            .set(value)
    }

    /// Turn every die to face `value`.
    pub fn set_all(&mut self, value: u32) -> DiceResult<()> {
        check_face(value, self.sides)?;
        for die in &mut self.dice {
            die.set(value)?;
        }
        Ok(())
    }

    /// Render a sentence describing the pool and the faces showing.
    pub fn describe(&self) -> String {
        let tops = self.list();
        let mut desc = match tops.as_slice() {
            [] => format!("A pool of 0 d{}s. There are no dice in it.", self.sides),
            [only] => format!("A pool of 1 d{}. The die is facing {only}.", self.sides),
            [first, second] => format!(
                "A pool of 2 d{}s. The dice are facing {first} and {second}.",
                self.sides
            ),
            [rest @ .., last] => {
                let rest: Vec<String> = rest.iter().map(u32::to_string).collect();
                format!(
                    "A pool of {} d{}s. The dice are facing {}, and {last}.",
                    tops.len(),
                    self.sides,
                    rest.join(", ")
                )
            }
        };
        if let Some(note) = &self.description {
            desc.push(' ');
            desc.push_str(note);
        }
        desc
    }
}

pub(crate) fn check_size(size: usize) -> DiceResult<()> {
    if size > MAX_DICE {
        return Err(DiceError::InvalidArgument(format!(
            "a pool holds at most {MAX_DICE} dice, not {size}"
        )));
    }
    Ok(())
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.dice.len(), self.sides)
    }
}
