//! CLI frontend for dicetable, a tabletop dice roller.

mod commands;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dt_session::SessionConfig;

#[derive(Parser)]
#[command(
    name = "dicetable",
    about = "Roll pools of dice, once or at an interactive table",
    version
)]
struct Cli {
    /// Dice pools in XdY notation, e.g. 3d6 1d20
    notations: Vec<String>,

    /// Comma-separated names for the pools, one per notation (default: the notations)
    #[arg(short, long, value_delimiter = ',')]
    names: Vec<String>,

    /// Name of the table, shown in the prompt
    #[arg(short, long)]
    tablename: Option<String>,

    /// Start an interactive table prompt instead of rolling once
    #[arg(short, long)]
    interactive: bool,

    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the rolled table as JSON
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = SessionConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(name) = cli.tablename {
        config = config.with_table_name(name);
    }

    let result = commands::load_table(&cli.notations, cli.names).and_then(|table| {
        if cli.interactive {
            commands::interactive::run(table, config)
        } else {
            commands::roll::run(table, config, cli.json)
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
