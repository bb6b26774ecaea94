//! Configuration for a table session.

/// Configuration for a table session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Display name for the table, shown in the prompt.
    pub table_name: Option<String>,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the table name. Empty names are ignored.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.table_name = (!name.is_empty()).then_some(name);
        self
    }
}
