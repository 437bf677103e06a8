//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{CliOverrides, DisplayStyle, OutputConfig, Settings, SimulationConfig};
