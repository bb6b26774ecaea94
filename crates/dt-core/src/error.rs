//! Error types for dice, pools and tables.

/// Errors that can occur while manipulating dice, pools and tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die was set to a face it does not have.
    #[error("a d{sides} cannot be set to {value}, faces run from 1 to {sides}")]
    OutOfRange {
        /// The rejected value.
        value: u32,
        /// Number of sides on the die.
        sides: u32,
    },

    /// A die was subtracted from a pool with no dice.
    #[error("cannot subtract from a pool with no dice")]
    EmptyPool,

    /// More dice were subtracted than the pool holds.
    #[error("cannot subtract {requested} dice from a pool of {available}")]
    NotEnoughDice {
        /// How many dice were asked for.
        requested: usize,
        /// How many dice the pool holds.
        available: usize,
    },

    /// Dice notation was not of the form `XdY`.
    #[error("dice pools need to be in the format XdY: {0}")]
    Format(String),

    /// The number of pools and the number of names differ.
    #[error("the number of pools ({pools}) and the number of names ({names}) do not match up")]
    Mismatch {
        /// Number of pools given.
        pools: usize,
        /// Number of names given.
        names: usize,
    },

    /// No pool with this name exists on the table.
    #[error("{0} is not the name of a pool on this table")]
    NotFound(String),

    /// A constructor argument was outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A die index was past the end of the pool.
    #[error("there is no die {index} in a pool of {len}")]
    DieNotFound {
        /// The zero-based index asked for.
        index: usize,
        /// Number of dice in the pool.
        len: usize,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
