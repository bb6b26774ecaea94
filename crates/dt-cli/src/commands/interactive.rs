use std::io::{self, BufRead, Write};

use colored::Colorize;

use dt_core::Table;
use dt_session::{SessionConfig, TableSession};

pub fn run(table: Table, config: SessionConfig) -> Result<(), String> {
    let mut session = TableSession::new(table, config);

    let title = session.table().name().unwrap_or("Dice table").to_string();
    println!("  {} {title}", "Opening".bold());
    println!("  Pools: {}", session.table().len());
    println!("  Type 'help' for commands, 'exit' to leave.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_finished() {
        print!("{}", session.prompt().cyan());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let reply = session.process(&line);
        if !reply.is_empty() {
            println!("{reply}");
        }
    }

    Ok(())
}
