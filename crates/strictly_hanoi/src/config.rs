//! Match configuration loaded from TOML.

use super::drag::DEFAULT_SETTLE_SPEED;
use super::error::ConfigurationError;
use super::layout::PegLayout;
use super::{MatchClock, PegId, PuzzleBoard};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Setup of a single match.
///
/// ```toml
/// disk_sizes = [1, 2, 3, 4]
/// peg_count = 3
/// source_peg = 0
/// winning_peg = 2
/// time_limit_secs = 90.0
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Disk sizes; the order fixes disk ids.
    #[serde(default = "default_disk_sizes")]
    disk_sizes: Vec<u32>,

    /// Number of pegs.
    #[serde(default = "default_peg_count")]
    peg_count: usize,

    /// Peg holding the initial pile.
    #[serde(default = "default_source_peg")]
    source_peg: PegId,

    /// Peg that must hold every disk to win.
    #[serde(default = "default_winning_peg")]
    winning_peg: PegId,

    /// Time limit in seconds.
    #[serde(default = "default_time_limit_secs")]
    time_limit_secs: f64,

    /// Settle speed in world units per second.
    #[serde(default = "default_settle_speed")]
    settle_speed: f32,

    /// Peg geometry; evenly spaced pegs when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout: Option<PegLayout>,
}

fn default_disk_sizes() -> Vec<u32> {
    vec![1, 2, 3]
}

fn default_peg_count() -> usize {
    3
}

fn default_source_peg() -> PegId {
    PegId(0)
}

fn default_winning_peg() -> PegId {
    PegId(2)
}

fn default_time_limit_secs() -> f64 {
    120.0
}

fn default_settle_speed() -> f32 {
    DEFAULT_SETTLE_SPEED
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            disk_sizes: default_disk_sizes(),
            peg_count: default_peg_count(),
            source_peg: default_source_peg(),
            winning_peg: default_winning_peg(),
            time_limit_secs: default_time_limit_secs(),
            settle_speed: default_settle_speed(),
            layout: None,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration with the default settle speed and layout.
    #[instrument]
    pub fn new(
        disk_sizes: Vec<u32>,
        peg_count: usize,
        source_peg: PegId,
        winning_peg: PegId,
        time_limit_secs: f64,
    ) -> Self {
        Self {
            disk_sizes,
            peg_count,
            source_peg,
            winning_peg,
            time_limit_secs,
            ..Self::default()
        }
    }

    /// Replaces the settle speed.
    pub fn with_settle_speed(mut self, settle_speed: f32) -> Self {
        self.settle_speed = settle_speed;
        self
    }

    /// Replaces the peg layout.
    pub fn with_layout(mut self, layout: PegLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            disks = config.disk_sizes.len(),
            pegs = config.peg_count,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Checks every setting without building a match.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.board()?;
        self.clock()?;
        self.peg_layout()?;
        if !self.settle_speed.is_finite() || self.settle_speed <= 0.0 {
            return Err(ConfigurationError::InvalidSettleSpeed {
                speed: self.settle_speed,
            });
        }
        Ok(())
    }

    /// Builds the initial board.
    pub fn board(&self) -> Result<PuzzleBoard, ConfigurationError> {
        PuzzleBoard::initialize(
            &self.disk_sizes,
            self.peg_count,
            self.source_peg,
            self.winning_peg,
        )
    }

    /// Builds a fresh clock.
    pub fn clock(&self) -> Result<MatchClock, ConfigurationError> {
        MatchClock::from_secs_f64(self.time_limit_secs)
    }

    /// The configured layout, or evenly spaced pegs.
    pub fn peg_layout(&self) -> Result<PegLayout, ConfigurationError> {
        let layout = self
            .layout
            .clone()
            .unwrap_or_else(|| PegLayout::uniform(self.peg_count));
        layout.validate(self.peg_count)?;
        Ok(layout)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ConfigurationError> for ConfigError {
    #[track_caller]
    fn from(err: ConfigurationError) -> Self {
        Self::new(format!("Invalid match setup: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MatchConfig::from_toml("").unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(config.disk_sizes(), &vec![1, 2, 3]);
        assert_eq!(*config.winning_peg(), PegId(2));
    }

    #[test]
    fn test_invalid_setup_is_reported() {
        let err = MatchConfig::from_toml("source_peg = 2").unwrap_err();
        assert!(err.message.to_lowercase().contains("source"), "{}", err.message);

        let err = MatchConfig::from_toml("time_limit_secs = 0.0").unwrap_err();
        assert!(err.message.to_lowercase().contains("time limit"), "{}", err.message);
    }

    #[test]
    fn test_settle_speed_must_be_positive() {
        let config = MatchConfig::default().with_settle_speed(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidSettleSpeed { speed: 0.0 })
        );
    }

    #[test]
    fn test_layout_must_match_pegs() {
        let config = MatchConfig::default().with_layout(PegLayout::uniform(4));
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip_keeps_layout() {
        let config = MatchConfig::new(vec![3, 1, 2], 4, PegId(1), PegId(3), 45.0)
            .with_layout(PegLayout::uniform(4));
        let text = config.to_toml().unwrap();
        assert_eq!(MatchConfig::from_toml(&text).unwrap(), config);
    }
}
