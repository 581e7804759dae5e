//! Dictionary subcommands

use clap::{Args, Subcommand};
use slovnyk_core::draft::DictionaryDraft;
use slovnyk_core::errors::Result;
use slovnyk_core::snapshot::Snapshot;
use slovnyk_engine::Registry;
use std::path::Path;

#[derive(Debug, Args)]
pub struct DictArgs {
    #[command(subcommand)]
    command: DictCommand,
}

#[derive(Debug, Subcommand)]
enum DictCommand {
    /// List all dictionaries
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render the dictionary forest
    Tree,
    /// Add a dictionary
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Parent dictionary id; omit for a root
        #[arg(long, default_value = "")]
        parent: String,
    },
    /// Update a dictionary, overwriting all its fields
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        parent: String,
    },
    /// Delete a dictionary and all its items
    Rm {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn execute(db: &Path, args: DictArgs) -> Result<()> {
    let mut registry = Registry::open(db)?;

    match args.command {
        DictCommand::List { json } => list(&registry, json),
        DictCommand::Tree => {
            tree(registry.snapshot());
            Ok(())
        }
        DictCommand::Add {
            name,
            code,
            description,
            parent,
        } => {
            let draft = DictionaryDraft {
                name,
                code,
                description,
                parent,
            };
            let id = registry.create_dictionary(&draft)?;
            println!("Created dictionary {}", id);
            Ok(())
        }
        DictCommand::Update {
            id,
            name,
            code,
            description,
            parent,
        } => {
            let draft = DictionaryDraft {
                name,
                code,
                description,
                parent,
            };
            registry.update_dictionary(id, &draft)?;
            println!("Updated dictionary {}", id);
            Ok(())
        }
        DictCommand::Rm { id, yes } => {
            let prompt = format!("Delete dictionary {} and all its items?", id);
            if !yes && !super::confirm(&prompt) {
                println!("Aborted.");
                return Ok(());
            }
            registry.delete_dictionary(id)?;
            println!("Deleted dictionary {}", id);
            Ok(())
        }
    }
}

fn list(registry: &Registry, json: bool) -> Result<()> {
    if json {
        let dicts: Vec<_> = registry.dictionaries().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&dicts).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    println!("{:>6}  {:>6}  {:<14}  {}", "ID", "PARENT", "CODE", "NAME");
    for d in registry.dictionaries() {
        let parent = d.parent_id.map(|p| p.to_string()).unwrap_or_default();
        println!("{:>6}  {:>6}  {:<14}  {}", d.id, parent, d.code, d.name);
    }
    Ok(())
}

fn tree(snapshot: &Snapshot) {
    for d in snapshot.iter().filter(|d| d.is_root()) {
        print_subtree(snapshot, d.id, 0);
    }
}

fn print_subtree(snapshot: &Snapshot, id: i64, depth: usize) {
    if let Some(d) = snapshot.get(id) {
        println!("{}{} [{}] {}", "  ".repeat(depth), d.id, d.code, d.name);
        for child in snapshot.children_of(id) {
            print_subtree(snapshot, child, depth + 1);
        }
    }
}
