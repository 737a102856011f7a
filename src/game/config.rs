use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{error::GameError, grid::Grid};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid, in cells
    pub grid_width: usize,
    /// Height of the game grid, in cells
    pub grid_height: usize,
    /// Simulation steps per second
    pub tick_rate_hz: u32,
    /// Points awarded per target consumed
    pub score_per_target: u32,
    /// Fixed RNG seed for reproducible target placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            tick_rate_hz: 10,
            score_per_target: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable game
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidConfig(
                "grid dimensions must be positive".into(),
            ));
        }
        if self.grid_width > i32::MAX as usize || self.grid_height > i32::MAX as usize {
            return Err(GameError::InvalidConfig(format!(
                "grid {}x{} is too large",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width.saturating_mul(self.grid_height) < 2 {
            return Err(GameError::InvalidConfig(
                "grid needs room for the agent and a target".into(),
            ));
        }
        if self.tick_rate_hz == 0 {
            return Err(GameError::InvalidConfig(
                "tick rate must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width as i32, self.grid_height as i32)
    }

    /// Time between simulation steps
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.tick_rate_hz, 10);
        assert_eq!(config.score_per_target, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid(), Grid::new(15, 12));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(GameConfig::new(0, 10).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_err());
        assert!(GameConfig::new(1, 2).validate().is_ok());

        let config = GameConfig {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_partial_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "grid_width": 12, "seed": 99 }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "tick_rate_hz": 0 }"#).unwrap();

        assert!(GameConfig::load(&path).is_err());
    }
}
