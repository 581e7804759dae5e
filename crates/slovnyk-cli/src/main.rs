//! Slovnyk CLI
//!
//! Command-line front end for the dictionary registry

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "slovnyk")]
#[command(about = "Slovnyk - hierarchical dictionary registry", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, default_value = "slovnyk.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Dictionary operations
    Dict(commands::dict::DictArgs),
    /// Item operations
    Item(commands::item::ItemArgs),
}

fn main() {
    slovnyk_core::logging::init(slovnyk_core::logging::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dict(args) => commands::dict::execute(&cli.db, args),
        Commands::Item(args) => commands::item::execute(&cli.db, args),
    };

    if let Err(e) = result {
        eprintln!("Error [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}
