//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    parse_dimensions, CellSize, CliOverrides, DisplayConfig, PersistenceConfig, Settings,
    SimulationConfig,
};
