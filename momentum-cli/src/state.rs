use anyhow::{Context, Result};
use momentum_store::RecordStore;
use std::fs;
use std::path::PathBuf;

pub fn momentum_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".momentum"))
}

pub fn ensure_momentum_home() -> Result<PathBuf> {
    let dir = momentum_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn store_path() -> Result<PathBuf> {
    Ok(ensure_momentum_home()?.join("state.json"))
}

/// Load the snapshot, seeding a fresh store on first run.
pub fn load_store() -> Result<RecordStore> {
    let p = store_path()?;
    RecordStore::load_or_seed(&p).with_context(|| format!("load {}", p.display()))
}

pub fn save_store(store: &RecordStore) -> Result<()> {
    let p = store_path()?;
    store.save(&p).with_context(|| format!("write {}", p.display()))
}
