//! Item subcommands

use clap::{Args, Subcommand};
use slovnyk_core::draft::ItemDraft;
use slovnyk_core::errors::Result;
use slovnyk_engine::Registry;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ItemArgs {
    #[command(subcommand)]
    command: ItemCommand,
}

#[derive(Debug, Subcommand)]
enum ItemCommand {
    /// List the items of a dictionary
    List { dict_id: i64 },
    /// Add an item to a dictionary
    Add {
        dict_id: i64,
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
    },
    /// Update an item, overwriting all its fields
    Update {
        id: i64,
        /// Owning dictionary id
        #[arg(long)]
        dict: i64,
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
    },
    /// Delete an item
    Rm {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn execute(db: &Path, args: ItemArgs) -> Result<()> {
    let mut registry = Registry::open(db)?;

    match args.command {
        ItemCommand::List { dict_id } => {
            println!("{:>6}  {:<14}  {}", "ID", "CODE", "NAME");
            for it in registry.items(dict_id)? {
                println!("{:>6}  {:<14}  {}", it.id, it.code, it.name);
            }
            Ok(())
        }
        ItemCommand::Add {
            dict_id,
            code,
            name,
        } => {
            let id = registry.create_item(dict_id, &ItemDraft { code, name })?;
            println!("Created item {}", id);
            Ok(())
        }
        ItemCommand::Update {
            id,
            dict,
            code,
            name,
        } => {
            registry.update_item(id, dict, &ItemDraft { code, name })?;
            println!("Updated item {}", id);
            Ok(())
        }
        ItemCommand::Rm { id, yes } => {
            let prompt = format!("Delete item {}?", id);
            if !yes && !super::confirm(&prompt) {
                println!("Aborted.");
                return Ok(());
            }
            registry.delete_item(id)?;
            println!("Deleted item {}", id);
            Ok(())
        }
    }
}
