use dt_core::Table;
use dt_session::{SessionConfig, TableSession};

/// Roll every pool once and print the result.
pub fn run(table: Table, config: SessionConfig, json: bool) -> Result<(), String> {
    let mut session = TableSession::new(table, config);
    session.process("roll table");
    let table = session.into_table();

    if json {
        let out = serde_json::to_string_pretty(&table).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for (_, pool) in table.iter() {
        println!("{} Their total is {}.", pool.describe(), pool.total());
    }
    Ok(())
}
