//! Tables: named collections of pools.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::die::check_face;
use crate::error::{DiceError, DiceResult};
use crate::notation::parse_dice_string;
use crate::pool::Pool;

/// A set of pools keyed by caller-chosen names.
///
/// Pools iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    pools: BTreeMap<String, Pool>,
}

impl Table {
    /// Create an unnamed table with no pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name, builder style.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(Some(name.into()));
        self
    }

    /// The table's display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the display name. An empty name unsets it.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name.filter(|n| !n.is_empty());
    }

    /// Number of pools on the table.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns true if the table has no pools.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Returns true if a pool with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.pools.contains_key(name)
    }

    /// Look up a pool by name.
    pub fn get(&self, name: &str) -> Option<&Pool> {
        self.pools.get(name)
    }

    /// Look up a pool by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Pool> {
        self.pools.get_mut(name)
    }

    /// Iterate over `(name, pool)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pool)> {
        self.pools.iter().map(|(name, pool)| (name.as_str(), pool))
    }

    /// Pool names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// Roll every die on the table.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for pool in self.pools.values_mut() {
            pool.roll(rng);
        }
        debug!(pools = self.pools.len(), "rolled table");
    }

    /// Remove every pool.
    pub fn clear(&mut self) {
        debug!(pools = self.pools.len(), "clearing table");
        self.pools.clear();
    }

    /// Remove the named pool and hand it back.
    pub fn remove(&mut self, name: &str) -> DiceResult<Pool> {
        let pool = self
            .pools
            .remove(name)
            .ok_or_else(|| DiceError::NotFound(name.to_string()))?;
        debug!(name, "removed pool");
        Ok(pool)
    }

    /// Put a pool on the table, returning any pool it replaced.
    pub fn insert(&mut self, name: impl Into<String>, pool: Pool) -> Option<Pool> {
        let name = name.into();
        debug!(name = %name, pool = %pool, "inserting pool");
        self.pools.insert(name, pool)
    }

    /// Create a pool of `size` dice with `sides` sides under `name`,
    /// overwriting any pool already there.
    pub fn add(&mut self, name: impl Into<String>, size: usize, sides: u32) -> DiceResult<()> {
        let pool = Pool::new(size, sides)?;
        self.insert(name, pool);
        Ok(())
    }

    /// Turn every die on the table to face `value`.
    ///
    /// Every pool is checked first, so a value too large for any pool
    /// leaves the whole table untouched.
    pub fn set_all(&mut self, value: u32) -> DiceResult<()> {
        for pool in self.pools.values() {
            check_face(value, pool.sides())?;
        }
        for pool in self.pools.values_mut() {
            pool.set_all(value)?;
        }
        Ok(())
    }
}

/// Pair pools with names, one to one.
pub fn create_table(pools: Vec<Pool>, names: Vec<String>) -> DiceResult<Table> {
    if pools.len() != names.len() {
        return Err(DiceError::Mismatch {
            pools: pools.len(),
            names: names.len(),
        });
    }
    let mut table = Table::new();
    for (name, pool) in names.into_iter().zip(pools) {
        table.insert(name, pool);
    }
    Ok(table)
}

/// Parse each notation into a pool and name them, one to one.
///
/// Stops at the first malformed notation.
pub fn parse_table_string<S: AsRef<str>>(notations: &[S], names: Vec<String>) -> DiceResult<Table> {
    let pools = notations
        .iter()
        .map(|n| parse_dice_string(n.as_ref()))
        .collect::<DiceResult<Vec<_>>>()?;
    create_table(pools, names)
}
