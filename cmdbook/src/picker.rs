//! Interactive prompt and selection glue around the store.
//!
//! Everything here is thin I/O: collect filter or field values, show the
//! result list, hand the chosen command text to the clipboard. No search
//! or persistence logic lives in this module.

use crate::query::SearchFilters;
use anyhow::{Context as _, Result};
use cmdbook_types::{Command, PrintMode};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

/// Collected replacement values for add and update flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFields {
    pub alias: String,
    pub command: String,
    pub tags: String,
    pub note: String,
}

fn prompt(label: &str, initial: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(text) = initial {
        input = input.with_initial_text(text);
    }
    input
        .interact_text()
        .with_context(|| format!("failed to prompt for {label}"))
}

/// Ask for the three optional search criteria.
pub fn search_wizard() -> Result<SearchFilters> {
    println!("Specify the tags, commands, and/or aliases you'd like to see:");
    let tag = prompt("Tag", None)?;
    let command = prompt("Command", None)?;
    let alias = prompt("Alias", None)?;
    Ok(SearchFilters {
        command,
        alias,
        tag,
    })
}

/// Ask for a new command's fields. Only the command text is required; the
/// store falls back to it when the alias stays empty.
pub fn add_wizard() -> Result<CommandFields> {
    let theme = ColorfulTheme::default();
    let command = Input::<String>::with_theme(&theme)
        .with_prompt("Command")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("command cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("failed to prompt for command")?;
    let alias = prompt("Alias (defaults to the command)", None)?;
    let tags = prompt("Tags (comma separated)", None)?;
    let note = prompt("Note", None)?;
    Ok(CommandFields {
        alias,
        command,
        tags,
        note,
    })
}

/// Ask for replacement fields, pre-filled with the record's current values.
/// Clearing a field is a valid edit.
pub fn update_wizard(current: &Command) -> Result<CommandFields> {
    let theme = ColorfulTheme::default();
    let command = Input::<String>::with_theme(&theme)
        .with_prompt("Command")
        .with_initial_text(&current.command)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("command cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("failed to prompt for command")?;
    let alias = prompt("Alias", Some(&current.alias))?;
    let tags = prompt("Tags", Some(&current.tags))?;
    let note = prompt("Note", Some(&current.note))?;
    Ok(CommandFields {
        alias,
        command,
        tags,
        note,
    })
}

/// Show the result list and return the index of the user's choice.
pub fn select_command(commands: &[Command], mode: PrintMode, limit: usize) -> Result<usize> {
    debug!("presenting {} commands for selection", commands.len());
    let items: Vec<String> = commands.iter().map(|c| c.field_for(mode)).collect();
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select a command ({})", mode.header()))
        .items(&items)
        .default(0)
        .max_length(limit)
        .interact()
        .context("selection prompt failed")
}

pub fn confirm_delete(command: &Command) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete '{}'?", command.alias))
        .default(false)
        .interact()
        .context("confirmation prompt failed")
}

/// Hand the chosen command text to the system clipboard verbatim.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write clipboard")?;
    Ok(())
}
