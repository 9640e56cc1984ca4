use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StoreError;

/// A saved shell command together with its lookup metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Assigned by the store on first insert; `None` only before persistence.
    pub id: Option<i64>,
    pub alias: String,
    pub command: String,
    pub tags: String,
    pub note: String,
    pub last_used: i64,
}

/// Per-field character budgets for a rendered list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWidths {
    pub alias: usize,
    pub command: usize,
    pub tags: usize,
    pub note: usize,
}

impl Default for FieldWidths {
    fn default() -> Self {
        FieldWidths {
            alias: 25,
            command: 50,
            tags: 10,
            note: 50,
        }
    }
}

/// Truncate with an ellipsis marker or right-pad so every field renders at
/// exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut out: String = text.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        let mut out = text.to_string();
        out.extend(std::iter::repeat(' ').take(width - len));
        out
    }
}

impl Command {
    /// Render a fixed-width, pipe-delimited line so a list of commands
    /// aligns in columns.
    pub fn display_line(&self, widths: &FieldWidths) -> String {
        format!(
            "{} | {} | {} | {}",
            fit(&self.alias, widths.alias),
            fit(&self.command, widths.command),
            fit(&self.tags, widths.tags),
            fit(&self.note, widths.note),
        )
    }

    /// The text shown for this command under the given presentation mode.
    pub fn field_for(&self, mode: PrintMode) -> String {
        match mode {
            PrintMode::All => self.display_line(&FieldWidths::default()),
            PrintMode::Command => self.command.clone(),
            PrintMode::Alias => self.alias.clone(),
        }
    }
}

/// Which command fields are presented in selection lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    #[default]
    All,
    Command,
    Alias,
}

impl PrintMode {
    /// Column header matching what `field_for` renders.
    pub fn header(&self) -> &'static str {
        match self {
            PrintMode::All => "Alias | Command | Tags | Note",
            PrintMode::Command => "Command",
            PrintMode::Alias => "Alias",
        }
    }
}

impl FromStr for PrintMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(PrintMode::All),
            "command" => Ok(PrintMode::Command),
            "alias" => Ok(PrintMode::Alias),
            other => Err(StoreError::InvalidArgument(format!(
                "unknown print option '{other}' (expected all, command or alias)"
            ))),
        }
    }
}
