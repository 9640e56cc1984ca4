use super::{display_limit, filters_or_wizard, open_store, pick_and_copy, print_mode};
use crate::config::Config;
use crate::refine;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search by command text
    #[arg(short, long)]
    pub command: Option<String>,
    /// Search by alias
    #[arg(short, long)]
    pub alias: Option<String>,
    /// Search by tag
    #[arg(short, long)]
    pub tag: Option<String>,
    /// How matches are presented (all, command, alias)
    #[arg(short, long)]
    pub print: Option<String>,
    /// Number of commands shown before scrolling
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: &SearchArgs, config: &Config) -> Result<()> {
    let mode = print_mode(&args.print, config)?;
    let limit = display_limit(args.limit, config)?;
    let filters = filters_or_wizard(&args.command, &args.alias, &args.tag)?;

    let store = open_store()?;
    let matches = refine::cascade(&store, &filters)?;
    if matches.is_empty() {
        println!("No matching commands");
        return Ok(());
    }

    pick_and_copy(&store, &matches, mode, limit)
}
