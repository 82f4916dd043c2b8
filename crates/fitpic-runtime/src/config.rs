use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FITPIC_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.fitpic
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FITPIC_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("fitpic"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".fitpic"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Simulated latencies, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub page_transition_ms: u64,
    pub step_fade_ms: u64,
    pub step_fade_in_ms: u64,
    pub profile_preview_ms: u64,
    pub processing_step_ms: u64,
    pub processing_error_delay_ms: u64,
    pub processing_final_delay_ms: u64,
    pub insight_interval_ms: u64,
    pub insight_cutoff_ms: u64,
    pub feed_load_ms: u64,
    pub feed_initial_ms: u64,
    pub feed_refresh_ms: u64,
    pub home_feed_delay_ms: u64,
    pub add_all_to_cart_ms: u64,
    pub remix_refresh_ms: u64,
    pub checkout_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            page_transition_ms: 150,
            step_fade_ms: 300,
            step_fade_in_ms: 50,
            profile_preview_ms: 300,
            processing_step_ms: 3000,
            processing_error_delay_ms: 1000,
            processing_final_delay_ms: 1500,
            insight_interval_ms: 2000,
            insight_cutoff_ms: 12000,
            feed_load_ms: 1000,
            feed_initial_ms: 800,
            feed_refresh_ms: 500,
            home_feed_delay_ms: 200,
            add_all_to_cart_ms: 1500,
            remix_refresh_ms: 1000,
            checkout_ms: 2000,
        }
    }
}

impl Timings {
    fn map(&self, f: impl Fn(u64) -> u64) -> Self {
        Self {
            page_transition_ms: f(self.page_transition_ms),
            step_fade_ms: f(self.step_fade_ms),
            step_fade_in_ms: f(self.step_fade_in_ms),
            profile_preview_ms: f(self.profile_preview_ms),
            processing_step_ms: f(self.processing_step_ms),
            processing_error_delay_ms: f(self.processing_error_delay_ms),
            processing_final_delay_ms: f(self.processing_final_delay_ms),
            insight_interval_ms: f(self.insight_interval_ms),
            insight_cutoff_ms: f(self.insight_cutoff_ms),
            feed_load_ms: f(self.feed_load_ms),
            feed_initial_ms: f(self.feed_initial_ms),
            feed_refresh_ms: f(self.feed_refresh_ms),
            home_feed_delay_ms: f(self.home_feed_delay_ms),
            add_all_to_cart_ms: f(self.add_all_to_cart_ms),
            remix_refresh_ms: f(self.remix_refresh_ms),
            checkout_ms: f(self.checkout_ms),
        }
    }
}

pub(crate) fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub outfits_per_page: u32,
    /// Distance from the bottom of the feed (px) that triggers the next page
    pub scroll_threshold: f64,
    pub cache_ttl_ms: u64,
    pub collection_name_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            outfits_per_page: fitpic_types::DEFAULT_OUTFITS_PER_PAGE,
            scroll_threshold: fitpic_engine::pagination::DEFAULT_SCROLL_THRESHOLD,
            cache_ttl_ms: 5000,
            collection_name_max: fitpic_engine::collections::DEFAULT_NAME_MAX_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Chance that a processing run ends in the error state
    pub error_probability: f64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            error_probability: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl AppConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Same configuration with every timing multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = factor.max(0.0);
        Self {
            timings: self
                .timings
                .map(|v| (v as f64 * factor).round() as u64),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timings.page_transition_ms, 150);
        assert_eq!(config.limits.outfits_per_page, 8);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[timings]\ninsight_cutoff_ms = 6000\n\n[processing]\nerror_probability = 0.5\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.timings.insight_cutoff_ms, 6000);
        assert_eq!(config.timings.processing_step_ms, 3000);
        assert_eq!(config.processing.error_probability, 0.5);
        assert_eq!(config.limits.scroll_threshold, 200.0);
    }

    #[test]
    fn test_nan_error_probability_is_harmless() {
        use crate::outcome::{OutcomeProvider, RandomOutcome};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[processing]\nerror_probability = nan\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.processing.error_probability.is_nan());
        assert!(!RandomOutcome::new(config.processing.error_probability).should_fail());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.limits.collection_name_max = 20;
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timings\n").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_scaled() {
        let fast = AppConfig::default().scaled(0.01);
        assert_eq!(fast.timings.processing_step_ms, 30);
        assert_eq!(fast.timings.step_fade_in_ms, 1);
        assert_eq!(fast.limits, Limits::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_data_dir(Some("/tmp/fitpic-data")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/fitpic-data"));
    }
}
