use super::{display_limit, filters_or_wizard, open_store, print_mode};
use crate::config::Config;
use crate::picker;
use crate::refine;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Find the command to delete by command text
    #[arg(short, long)]
    pub command: Option<String>,
    /// Find the command to delete by alias
    #[arg(short, long)]
    pub alias: Option<String>,
    /// Find the command to delete by tag
    #[arg(short, long)]
    pub tag: Option<String>,
    /// How matches are presented (all, command, alias)
    #[arg(short, long)]
    pub print: Option<String>,
    /// Number of commands shown before scrolling
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Delete without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub fn run(args: &DeleteArgs, config: &Config) -> Result<()> {
    let mode = print_mode(&args.print, config)?;
    let limit = display_limit(args.limit, config)?;
    let filters = filters_or_wizard(&args.command, &args.alias, &args.tag)?;

    let store = open_store()?;
    let matches = refine::cascade(&store, &filters)?;
    if matches.is_empty() {
        println!("No matching commands");
        return Ok(());
    }

    let index = picker::select_command(&matches, mode, limit)?;
    let chosen = &matches[index];
    if !args.yes && !picker::confirm_delete(chosen)? {
        println!("Aborted");
        return Ok(());
    }

    let id = chosen
        .id
        .ok_or_else(|| anyhow::anyhow!("selected command has no id"))?;
    store.delete_by_id(id)?;
    println!("✓ Removed command: {}", chosen.alias);
    Ok(())
}
