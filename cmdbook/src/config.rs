//! Persisted CLI defaults.

use crate::paths;
use anyhow::{Context as _, Result, bail};
use cmdbook_types::PrintMode;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

const CONFIG_FILE: &str = "config.json";

/// Defaults applied when a subcommand flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub print_style: PrintMode,
    pub display_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            print_style: PrintMode::All,
            display_limit: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = paths::get_config_file(CONFIG_FILE)?;
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw).context("failed to parse config")
    }

    pub fn save(&self) -> Result<()> {
        let path = paths::get_config_file(CONFIG_FILE)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config {}", path.display()))
    }

    /// Set a property by name, the way the config subcommand addresses them.
    pub fn set(&mut self, property: &str, value: &str) -> Result<()> {
        match property {
            "print_style" => self.print_style = value.parse::<PrintMode>()?,
            "display_limit" => {
                self.display_limit = value
                    .parse()
                    .with_context(|| format!("invalid display_limit '{value}'"))?;
            }
            other => bail!("unknown config property '{other}'"),
        }
        Ok(())
    }
}
