use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_momentum_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub user: UserSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSection {
    /// Stable id the leaderboard pseudonym is derived from.
    pub user_id: String,

    /// IANA timezone for entering due dates, e.g. "America/Chicago".
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Rows the leaderboard prints by default.
    pub leaderboard_limit: usize,

    /// Width of progress bars, in characters.
    pub bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: UserSection {
                user_id: "local-user".to_string(),
                timezone: "America/Chicago".to_string(),
            },
            display: DisplaySection {
                leaderboard_limit: 10,
                bar_width: 20,
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_momentum_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
