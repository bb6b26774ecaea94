pub mod interactive;
pub mod roll;

use dt_core::{Table, parse_table_string};
use tracing::debug;

/// Build the starting table from the command line.
/// Pools are named after their notation when no names are given.
pub fn load_table(notations: &[String], names: Vec<String>) -> Result<Table, String> {
    let names = if names.is_empty() {
        notations.to_vec()
    } else {
        names
    };
    let table = parse_table_string(notations, names).map_err(|e| e.to_string())?;
    debug!(pools = table.len(), "loaded table");
    Ok(table)
}
