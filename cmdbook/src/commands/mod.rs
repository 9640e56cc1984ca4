//! Subcommand handlers. Each handler opens its own store handle, which is
//! released on every exit path when it drops.

use crate::config::Config;
use crate::db::Db;
use crate::paths;
use crate::picker;
use crate::query::SearchFilters;
use crate::store::CommandStore;
use anyhow::{Result, ensure};
use cmdbook_types::{Command, PrintMode};

pub mod add;
pub mod config_cmd;
pub mod delete;
pub mod import_export;
pub mod list;
pub mod search;
pub mod update;

const DATABASE_FILE: &str = "commands.db";

/// Interactive lists shorter than this are pointless; longer ones unusable.
const MIN_DISPLAY_LIMIT: usize = 5;
const MAX_DISPLAY_LIMIT: usize = 200;

pub fn open_store() -> Result<CommandStore> {
    let path = paths::get_data_file(DATABASE_FILE)?;
    let db = Db::new(path)?;
    Ok(CommandStore::new(db))
}

/// Build filters from flags, or run the wizard when none were given.
pub(crate) fn filters_or_wizard(
    command: &Option<String>,
    alias: &Option<String>,
    tag: &Option<String>,
) -> Result<SearchFilters> {
    let filters = SearchFilters {
        command: command.clone().unwrap_or_default(),
        alias: alias.clone().unwrap_or_default(),
        tag: tag.clone().unwrap_or_default(),
    };
    if filters.is_empty() {
        picker::search_wizard()
    } else {
        Ok(filters)
    }
}

pub(crate) fn display_limit(requested: Option<usize>, config: &Config) -> Result<usize> {
    let limit = requested.unwrap_or(config.display_limit);
    ensure!(
        (MIN_DISPLAY_LIMIT..=MAX_DISPLAY_LIMIT).contains(&limit),
        "limit must be between {MIN_DISPLAY_LIMIT} and {MAX_DISPLAY_LIMIT}, got {limit}"
    );
    Ok(limit)
}

pub(crate) fn print_mode(requested: &Option<String>, config: &Config) -> Result<PrintMode> {
    match requested {
        Some(raw) => Ok(raw.parse::<PrintMode>()?),
        None => Ok(config.print_style),
    }
}

/// Let the user pick a record, copy its command text to the clipboard and
/// stamp it as used. Selection, not display, is what counts as usage.
pub(crate) fn pick_and_copy(
    store: &CommandStore,
    commands: &[Command],
    mode: PrintMode,
    limit: usize,
) -> Result<()> {
    let index = picker::select_command(commands, mode, limit)?;
    let chosen = &commands[index];
    picker::copy_to_clipboard(&chosen.command)?;
    println!("Command copied to clipboard!");
    store.touch_last_used(chosen.id)?;
    Ok(())
}
