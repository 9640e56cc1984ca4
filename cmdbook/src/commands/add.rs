use super::open_store;
use crate::picker::{self, CommandFields};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Display name (defaults to the command text)
    #[arg(short, long)]
    pub alias: Option<String>,
    /// The command to save; prompts interactively when omitted
    #[arg(short, long)]
    pub command: Option<String>,
    /// Comma separated tags
    #[arg(short, long)]
    pub tags: Option<String>,
    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,
}

pub fn run(args: &AddArgs) -> Result<()> {
    let fields = match &args.command {
        Some(command) => CommandFields {
            alias: args.alias.clone().unwrap_or_default(),
            command: command.clone(),
            tags: args.tags.clone().unwrap_or_default(),
            note: args.note.clone().unwrap_or_default(),
        },
        None => picker::add_wizard()?,
    };

    let store = open_store()?;
    let id = store.add(&fields.alias, &fields.command, &fields.tags, &fields.note)?;
    let saved = store.get_by_id(id)?;
    println!("✓ Added command: {}", saved.alias);
    Ok(())
}
