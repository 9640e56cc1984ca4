//! JSON import and export of the full command table.

use super::open_store;
use crate::store::CommandStore;
use anyhow::{Context as _, Result};
use clap::Args;
use cmdbook_types::Command;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination file for the JSON export
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON export to read commands from
    pub file: PathBuf,
}

/// Write every stored command to `path` as a JSON array.
pub fn export(store: &CommandStore, path: &Path) -> Result<usize> {
    let commands = store.list_all(i64::MAX, false)?;
    let file = File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    serde_json::to_writer_pretty(file, &commands).context("failed to serialize commands")?;
    debug!("exported {} commands to {}", commands.len(), path.display());
    Ok(commands.len())
}

/// Re-add every command found in `path`. Imported records go through the
/// normal add path, so they get fresh ids and a fresh usage timestamp.
pub fn import(store: &CommandStore, path: &Path) -> Result<usize> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read import file {}", path.display()))?;
    let commands: Vec<Command> =
        serde_json::from_str(&raw).context("import file is not a command export")?;

    for command in &commands {
        store.add(&command.alias, &command.command, &command.tags, &command.note)?;
    }
    debug!("imported {} commands from {}", commands.len(), path.display());
    Ok(commands.len())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let store = open_store()?;
    let count = export(&store, &args.file)?;
    println!("✓ Exported {count} commands to {}", args.file.display());
    Ok(())
}

pub fn run_import(args: &ImportArgs) -> Result<()> {
    let store = open_store()?;
    let count = import(&store, &args.file)?;
    println!("✓ Imported {count} commands from {}", args.file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;
    use tempfile::TempDir;

    fn open_test_store(dir: &TempDir) -> CommandStore {
        let db = Db::new(dir.path().join("commands.db")).unwrap();
        CommandStore::new(db)
    }

    #[test]
    fn test_export_import_roundtrip() {
        let dir = TempDir::new().unwrap();
        let source = open_test_store(&dir);
        source.add("ls-la", "ls -la", "fs,list", "long listing").unwrap();
        source.add("push", "git push origin", "vcs", "").unwrap();

        let export_path = dir.path().join("commands.json");
        assert_eq!(export(&source, &export_path).unwrap(), 2);

        let target_dir = TempDir::new().unwrap();
        let target = open_test_store(&target_dir);
        assert_eq!(import(&target, &export_path).unwrap(), 2);

        let restored = target.list_all(10, false).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].alias, "ls-la");
        assert_eq!(restored[0].command, "ls -la");
        assert_eq!(restored[0].tags, "fs,list");
        assert_eq!(restored[0].note, "long listing");
        assert_eq!(restored[1].alias, "push");
    }

    #[test]
    fn test_import_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let store = open_test_store(&dir);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{\"not\": \"a list\"}").unwrap();
        assert!(import(&store, &bad).is_err());
    }

    #[test]
    fn test_export_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = open_test_store(&dir);

        let path = dir.path().join("empty.json");
        assert_eq!(export(&store, &path).unwrap(), 0);

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Command> = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_empty());
    }
}
