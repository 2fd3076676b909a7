use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
    #[serde(default = "default_register_delay")]
    pub register_delay_ms: u64,
    #[serde(default = "default_refresh_delay")]
    pub refresh_delay_ms: u64,
    #[serde(default = "default_upgrade_delay")]
    pub upgrade_delay_ms: u64,
    /// A right swipe forms a match when the draw is below this value.
    #[serde(default = "default_match_probability")]
    pub match_probability: f64,
    /// Horizontal drag, in points, past which a released card counts as a swipe.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,
}

fn default_login_delay() -> u64 { 1500 }
fn default_register_delay() -> u64 { 1500 }
fn default_refresh_delay() -> u64 { 1000 }
fn default_upgrade_delay() -> u64 { 2000 }
fn default_match_probability() -> f64 { 0.8 }
fn default_swipe_threshold() -> f64 { 120.0 }
fn default_event_capacity() -> usize { 64 }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay(),
            register_delay_ms: default_register_delay(),
            refresh_delay_ms: default_refresh_delay(),
            upgrade_delay_ms: default_upgrade_delay(),
            match_probability: default_match_probability(),
            swipe_threshold: default_swipe_threshold(),
            event_capacity: default_event_capacity(),
            fixtures_path: None,
        }
    }
}

impl StoreConfig {
    /// Reads `HEARTSYNC__*` environment variables, falling back to defaults
    /// for anything unset or unparseable.
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("HEARTSYNC").separator("__"))
            .build()?;
        Ok(config.try_deserialize().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid store configuration, using defaults");
            Self::default()
        }))
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn register_delay(&self) -> Duration {
        Duration::from_millis(self.register_delay_ms)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn upgrade_delay(&self) -> Duration {
        Duration::from_millis(self.upgrade_delay_ms)
    }
}
