//! Files placed into a test data directory before the CLI runs.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

use fitpic_runtime::AppConfig;
use fitpic_runtime::config::CONFIG_FILE_NAME;
use fitpic_store::STATE_KEY;

fn key_path(data_dir: &Path, key: &str) -> PathBuf {
    data_dir.join(format!("{}.json", key))
}

/// Write a raw value under a storage key, the way the file backend stores it.
pub fn write_key(data_dir: &Path, key: &str, raw: &str) -> Result<()> {
    let path = key_path(data_dir, key);
    std::fs::write(&path, raw).with_context(|| format!("Failed to write {}", path.display()))
}

/// Seed a persisted state snapshot. Missing sections fall back to defaults
/// when the CLI loads it.
pub fn seed_state(data_dir: &Path, state: &Value) -> Result<()> {
    write_key(data_dir, STATE_KEY, &serde_json::to_string(state)?)
}

/// Seed a pre-store key such as `fitpic-wishlist`.
pub fn seed_legacy(data_dir: &Path, key: &str, raw: &str) -> Result<()> {
    write_key(data_dir, key, raw)
}

pub fn read_state(data_dir: &Path) -> Result<Option<Value>> {
    let path = key_path(data_dir, STATE_KEY);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Config with every simulated delay set to zero.
pub fn write_instant_config(data_dir: &Path) -> Result<()> {
    let config = AppConfig::default().scaled(0.0);
    config
        .save_to(&data_dir.join(CONFIG_FILE_NAME))
        .map_err(|e| anyhow::anyhow!("Failed to write config: {}", e))
}
