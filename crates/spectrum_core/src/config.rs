use crate::mood::MoodState;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    pub initial_state: MoodState,
    pub transition: TransitionConfig,
    pub thoughts: ThoughtConfig,
    pub timeline: TimelineConfig,
    pub stats: StatsConfig,
    pub input: InputConfig,
    pub audio: AudioConfig,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            initial_state: MoodState::Depressive,
            transition: TransitionConfig::default(),
            thoughts: ThoughtConfig::default(),
            timeline: TimelineConfig::default(),
            stats: StatsConfig::default(),
            input: InputConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl SpectrumConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SpectrumConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SPECTRUM_INITIAL_STATE") {
            match v.parse() {
                Ok(state) => self.initial_state = state,
                Err(e) => tracing::warn!("Ignoring SPECTRUM_INITIAL_STATE: {}", e),
            }
        }
        if let Ok(v) = std::env::var("SPECTRUM_STEP_DELAY_MS") {
            if let Ok(n) = v.parse() {
                self.transition.step_delay_ms = n;
            }
        }
        if let Ok(v) = std::env::var("SPECTRUM_THOUGHT_SEED") {
            if let Ok(n) = v.parse() {
                self.thoughts.seed = Some(n);
            }
        }
        if let Ok(v) = std::env::var("SPECTRUM_TIMELINE_CAPACITY") {
            if let Ok(n) = v.parse() {
                self.timeline.capacity = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Delay between two visited image positions
    pub step_delay_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { step_delay_ms: 250 }
    }
}

impl TransitionConfig {
    /// Never zero, so a step loop always yields to the clock.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms.max(1))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThoughtConfig {
    pub manic_interval_ms: u64,
    pub mixed_interval_ms: u64,
    pub depressive_interval_ms: u64,
    /// Seed for initial-line selection. Unset means entropy-seeded.
    pub seed: Option<u64>,
}

impl Default for ThoughtConfig {
    fn default() -> Self {
        // Manic thoughts rotate fastest, depressive ones drag.
        Self {
            manic_interval_ms: 3500,
            mixed_interval_ms: 4500,
            depressive_interval_ms: 6000,
            seed: None,
        }
    }
}

impl ThoughtConfig {
    pub fn interval(&self, state: MoodState) -> Duration {
        let ms = match state {
            MoodState::Manic => self.manic_interval_ms,
            MoodState::Mixed => self.mixed_interval_ms,
            MoodState::Depressive => self.depressive_interval_ms,
        };
        Duration::from_millis(ms.max(1))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub capacity: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub tick_interval_ms: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

impl StatsConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum horizontal travel, in pixels, for a touch to count as a swipe
    pub min_swipe_distance: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Play ambient audio from start-up instead of waiting for a toggle
    pub enabled: bool,
}

// ============================================================================
// Tests
// ============================================================================
