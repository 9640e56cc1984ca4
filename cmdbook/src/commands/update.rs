use super::{display_limit, filters_or_wizard, open_store, print_mode};
use crate::config::Config;
use crate::picker;
use crate::refine;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Find the command to update by command text
    #[arg(short, long)]
    pub command: Option<String>,
    /// Find the command to update by alias
    #[arg(short, long)]
    pub alias: Option<String>,
    /// Find the command to update by tag
    #[arg(short, long)]
    pub tag: Option<String>,
    /// How matches are presented (all, command, alias)
    #[arg(short, long)]
    pub print: Option<String>,
    /// Number of commands shown before scrolling
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: &UpdateArgs, config: &Config) -> Result<()> {
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
    let id = chosen
        .id
        .ok_or_else(|| anyhow::anyhow!("selected command has no id"))?;

    let fields = picker::update_wizard(chosen)?;
    store.update_by_id(id, &fields.alias, &fields.command, &fields.tags, &fields.note)?;
    let updated = store.get_by_id(id)?;
    println!("✓ Updated command: {}", updated.alias);
    Ok(())
}
