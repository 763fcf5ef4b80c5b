//! Application configuration: `~/.chancery/config.toml`.
//!
//! A missing file falls back to defaults; a malformed file is an error —
//! silently ignoring a config the operator wrote hides typos.

use anyhow::{Context, Result};
use chancery_logging::chancery_home;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_ORG_ID: &str = "AMB-NIGER-PARIS";
const DEFAULT_ACTOR_ID: i64 = 1;
const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Owning organisation stamped on new records.
    pub org_id: String,
    /// Acting user recorded in `createdby`/`updatedby`.
    pub actor_id: i64,
    /// TUI tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            org_id: DEFAULT_ORG_ID.to_string(),
            actor_id: DEFAULT_ACTOR_ID,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config: {}", path.display()))
    }
}

/// Config file path: `~/.chancery/config.toml`.
pub fn config_path() -> PathBuf {
    chancery_home().join("config.toml")
}

/// Arguments for the `config` command.
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths and settings as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show resolved paths and effective settings.
pub fn run(args: ConfigArgs) -> Result<()> {
    let config = AppConfig::load()?;
    if args.json {
        let value = serde_json::json!({
            "home": chancery_home(),
            "config": config_path(),
            "logs": chancery_logging::logs_dir(),
            "org_id": config.org_id,
            "actor_id": config.actor_id,
            "tick_rate_ms": config.tick_rate_ms,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Home:      {}", chancery_home().display());
        println!("Config:    {}", config_path().display());
        println!("Logs:      {}", chancery_logging::logs_dir().display());
        println!("Org:       {}", config.org_id);
        println!("Actor:     {}", config.actor_id);
        println!("Tick rate: {} ms", config.tick_rate_ms);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from(PathBuf::from("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.org_id, DEFAULT_ORG_ID);
        assert_eq!(config.actor_id, DEFAULT_ACTOR_ID);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "actor_id = 7").unwrap();

        let config = AppConfig::load_from(path).unwrap();
        assert_eq!(config.actor_id, 7);
        assert_eq!(config.org_id, DEFAULT_ORG_ID);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "org_id = [not toml").unwrap();
        assert!(AppConfig::load_from(path).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "orgid = \"typo\"").unwrap();
        assert!(AppConfig::load_from(path).is_err());
    }
}
