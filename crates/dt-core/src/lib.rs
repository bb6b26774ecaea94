//! Dice, pools and tables for tabletop rolling.
//!
//! A [`Die`] shows one face out of its sides. A [`Pool`] is a stack of
//! same-sided dice rolled together, and a [`Table`] keeps pools under names.
//! Pools are usually built from `XdY` notation via [`parse_dice_string`].
//!
//! Randomness is always passed in, so callers choose between a seeded
//! generator and OS entropy.

pub mod die;
pub mod error;
pub mod notation;
pub mod pool;
pub mod table;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use notation::{Notation, parse_dice_string, parse_notation};
pub use pool::{MAX_DICE, Pool};
pub use table::{Table, create_table, parse_table_string};
