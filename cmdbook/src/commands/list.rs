use super::{display_limit, open_store, pick_and_copy, print_mode};
use crate::config::Config;
use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Args;
use cmdbook_types::Command;
use tabled::{Table, Tabled};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of commands shown
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Order by most recent use instead of insertion order
    #[arg(short, long)]
    pub recent: bool,
    /// How commands are presented (all, command, alias)
    #[arg(short, long)]
    pub print: Option<String>,
    /// Print a table instead of an interactive selection
    #[arg(long)]
    pub plain: bool,
}

#[derive(Tabled)]
struct CommandRow {
    id: i64,
    alias: String,
    command: String,
    tags: String,
    note: String,
    #[tabled(rename = "last used")]
    last_used: String,
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut out: String = text.chars().take(max - 3).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

fn format_timestamp(unix: i64) -> String {
    DateTime::from_timestamp(unix, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn render_table(commands: &[Command]) -> String {
    let rows: Vec<CommandRow> = commands
        .iter()
        .map(|c| CommandRow {
            id: c.id.unwrap_or_default(),
            alias: c.alias.clone(),
            command: clip(&c.command, 50),
            tags: c.tags.clone(),
            note: clip(&c.note, 50),
            last_used: format_timestamp(c.last_used),
        })
        .collect();
    Table::new(rows).to_string()
}

pub fn run(args: &ListArgs, config: &Config) -> Result<()> {
    let mode = print_mode(&args.print, config)?;
    let limit = display_limit(args.limit, config)?;

    let store = open_store()?;
    let commands = store.list_all(limit as i64, args.recent)?;
    if commands.is_empty() {
        println!("No commands saved yet. Use 'cbk add' to create one.");
        return Ok(());
    }

    if args.plain {
        println!("{}", render_table(&commands));
        return Ok(());
    }

    pick_and_copy(&store, &commands, mode, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_leaves_short_text_alone() {
        assert_eq!(clip("ls -la", 50), "ls -la");
    }

    #[test]
    fn test_clip_truncates_long_text() {
        let long = "x".repeat(60);
        let clipped = clip(&long, 50);
        assert_eq!(clipped.chars().count(), 50);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn test_render_table_includes_every_record() {
        let commands = vec![
            Command {
                id: Some(1),
                alias: "ls-la".to_string(),
                command: "ls -la".to_string(),
                tags: "fs".to_string(),
                note: String::new(),
                last_used: 0,
            },
            Command {
                id: Some(2),
                alias: "push".to_string(),
                command: "git push".to_string(),
                tags: "vcs".to_string(),
                note: String::new(),
                last_used: 0,
            },
        ];
        let table = render_table(&commands);
        assert!(table.contains("ls-la"));
        assert!(table.contains("git push"));
    }
}
