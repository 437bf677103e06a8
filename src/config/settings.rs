//! Configuration settings for the simulation driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest grid side accepted from configuration
pub const MAX_GRID_SIZE: usize = 4096;

/// Longest accepted tick interval, in milliseconds
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub size: usize,
    pub tick_interval_ms: u64,
    pub random_density: f64,
    pub initial_pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub save_file: PathBuf,
    pub style: DisplayStyle,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    Compact,
    Coordinates,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                size: 40,
                tick_interval_ms: 100,
                random_density: 0.3,
                initial_pattern: Some("glider".to_string()),
            },
            output: OutputConfig {
                save_file: PathBuf::from("game_of_life.json"),
                style: DisplayStyle::Compact,
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.size == 0 {
            anyhow::bail!("Grid size must be positive");
        }

        if self.simulation.size > MAX_GRID_SIZE {
            anyhow::bail!(
                "Grid size must be at most {}, got {}",
                MAX_GRID_SIZE,
                self.simulation.size
            );
        }

        if !(0.0..=1.0).contains(&self.simulation.random_density) {
            anyhow::bail!(
                "Random density must be between 0 and 1, got {}",
                self.simulation.random_density
            );
        }

        if self.simulation.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            anyhow::bail!(
                "Tick interval must be at most {} ms, got {}",
                MAX_TICK_INTERVAL_MS,
                self.simulation.tick_interval_ms
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.simulation.size = size;
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(density) = cli_overrides.random_density {
            self.simulation.random_density = density;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.simulation.initial_pattern = Some(pattern.clone());
        }
        if let Some(ref save_file) = cli_overrides.save_file {
            self.output.save_file = save_file.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub tick_interval_ms: Option<u64>,
    pub random_density: Option<f64>,
    pub pattern: Option<String>,
    pub save_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.simulation.size, 40);
        assert_eq!(settings.simulation.initial_pattern.as_deref(), Some("glider"));
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.size = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.size = MAX_GRID_SIZE + 1;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.random_density = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.tick_interval_ms = MAX_TICK_INTERVAL_MS + 1;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.size = 12;
        settings.output.style = DisplayStyle::Coordinates;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.size, 12);
        assert_eq!(loaded.output.style, DisplayStyle::Coordinates);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("style: coordinates"));
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(&path, "simulation:\n  size: 0\n").unwrap();
        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            size: Some(9),
            pattern: Some("toad".to_string()),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.size, 9);
        assert_eq!(settings.simulation.initial_pattern.as_deref(), Some("toad"));
        assert_eq!(settings.simulation.tick_interval_ms, 100);
    }
}
