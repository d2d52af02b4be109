//! Configuration settings for the simulator

use crate::game_of_life::Geometry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub simulation: SimulationConfig,
    pub persistence: PersistenceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Pixels per cell
    pub scale: usize,
    pub window_width: usize,
    pub window_height: usize,
    /// Size in cells; overrides the window size when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_cells: Option<CellSize>,
    pub framerate: u32,
    #[serde(default)]
    pub unlimited_framerate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Each cell is alive with probability 1 / (spawn_rate + 1) when randomizing
    pub spawn_rate: u32,
    pub generations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    pub export_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                scale: 20,
                window_width: 800,
                window_height: 600,
                size_cells: None,
                framerate: 60,
                unlimited_framerate: false,
            },
            simulation: SimulationConfig {
                spawn_rate: 5,
                generations: 0,
            },
            persistence: PersistenceConfig {
                export_path: PathBuf::from("export.txt"),
                load_file: None,
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
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display.framerate == 0 && !self.display.unlimited_framerate {
            anyhow::bail!("Framerate must be positive unless unlimited");
        }

        if let Some(ref file) = self.persistence.load_file {
            if !file.exists() {
                anyhow::bail!("Load file does not exist: {}", file.display());
            }
        } else {
            self.geometry().context("Invalid display size")?;
        }

        Ok(())
    }

    /// Resolve the grid geometry from the display section.
    ///
    /// A cell size wins over the window size; otherwise the window has to
    /// divide evenly into cells.
    pub fn geometry(&self) -> crate::error::Result<Geometry> {
        let display = &self.display;
        match display.size_cells {
            Some(size) => Geometry::from_cells(size.width, size.height, display.scale),
            None => Geometry::from_window(display.window_width, display.window_height, display.scale),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(scale) = cli_overrides.scale {
            self.display.scale = scale;
        }
        if let Some((width, height)) = cli_overrides.window {
            self.display.window_width = width;
            self.display.window_height = height;
        }
        if let Some((width, height)) = cli_overrides.size {
            self.display.size_cells = Some(CellSize { width, height });
        }
        if let Some(framerate) = cli_overrides.framerate {
            self.display.framerate = framerate;
        }
        if cli_overrides.unlimited_framerate {
            self.display.unlimited_framerate = true;
        }
        if let Some(spawn_rate) = cli_overrides.spawn_rate {
            self.simulation.spawn_rate = spawn_rate;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref file) = cli_overrides.load_file {
            self.persistence.load_file = Some(file.clone());
        }
        if let Some(ref path) = cli_overrides.export_path {
            self.persistence.export_path = path.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub scale: Option<usize>,
    pub window: Option<(usize, usize)>,
    pub size: Option<(usize, usize)>,
    pub framerate: Option<u32>,
    pub unlimited_framerate: bool,
    pub spawn_rate: Option<u32>,
    pub generations: Option<usize>,
    pub load_file: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

/// Parse a `WxH` pair such as `800x600`
pub fn parse_dimensions(text: &str) -> Result<(usize, usize)> {
    let (width, height) = text
        .split_once(['x', 'X'])
        .with_context(|| format!("Expected WxH, got '{}'", text))?;

    let width = width
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid width in '{}'", text))?;
    let height = height
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid height in '{}'", text))?;

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use tempfile::tempdir;

    #[test]
    fn test_default_geometry() {
        let settings = Settings::default();
        let geometry = settings.geometry().unwrap();
        assert_eq!(geometry.cells(), (40, 30));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_size_overrides_window() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            scale: Some(10),
            size: Some((20, 40)),
            ..Default::default()
        });

        let geometry = settings.geometry().unwrap();
        assert_eq!(geometry.window_width, 200);
        assert_eq!(geometry.window_height, 400);
    }

    #[test]
    fn test_window_must_divide() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            window: Some((500, 1010)),
            ..Default::default()
        });

        assert!(matches!(
            settings.geometry(),
            Err(LifeError::NotDivisible { pixels: 1010, scale: 20 })
        ));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config").join("default.yaml");

        let mut settings = Settings::default();
        settings.display.size_cells = Some(CellSize { width: 8, height: 6 });
        settings.simulation.generations = 12;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_load_file_rejected() {
        let mut settings = Settings::default();
        settings.persistence.load_file = Some(PathBuf::from("definitely/not/here.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("800x600").unwrap(), (800, 600));
        assert_eq!(parse_dimensions("20X40").unwrap(), (20, 40));
        assert!(parse_dimensions("800").is_err());
        assert!(parse_dimensions("axb").is_err());
        assert!(parse_dimensions("-1x5").is_err());
    }
}
