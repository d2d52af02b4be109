//! Live simulation state driven by a frontend
//!
//! A frontend owns one `Session` and calls into it once per frame: apply the
//! user's edits, then `tick`, then draw from the read-only accessors.

use crate::error::{LifeError, Result};
use crate::game_of_life::{
    export_to_file, import_from_file, GameOfLifeRules, Geometry, Grid, RandomSeeder, SnapshotStore,
};
use std::path::Path;

/// Slowest speed: one generation every this many frames
pub const MAX_SPEED_DIVISOR: u32 = 1024;

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    geometry: Geometry,
    snapshot: SnapshotStore,
    running: bool,
    speed: u32,
    frame: u64,
    generation: u64,
}

impl Session {
    /// Start with an empty grid sized by `geometry`
    pub fn new(geometry: Geometry) -> Result<Self> {
        let (width, height) = geometry.cells();
        let grid = Grid::new(width, height)?;
        Self::with_grid(grid, geometry)
    }

    /// Start from an existing grid; its size must match the geometry
    pub fn with_grid(grid: Grid, geometry: Geometry) -> Result<Self> {
        let (width, height) = geometry.cells();
        if grid.width() != width {
            return Err(LifeError::DimensionMismatch {
                expected: width,
                found: grid.width(),
            });
        }
        if grid.height() != height {
            return Err(LifeError::DimensionMismatch {
                expected: height,
                found: grid.height(),
            });
        }

        log::info!(
            "session started: {}x{} cells at {}px",
            width,
            height,
            geometry.cell_pixel_size
        );

        Ok(Self {
            grid,
            geometry,
            snapshot: SnapshotStore::new(),
            running: false,
            speed: 1,
            frame: 0,
            generation: 0,
        })
    }

    /// Start from a saved file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (grid, geometry) = load_checked(path.as_ref())?;
        Self::with_grid(grid, geometry)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.has_snapshot()
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.grid.set(x, y, alive)
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        self.grid.toggle(x, y)
    }

    /// Pointer edit in window pixels. Returns false when the pointer is outside the window.
    pub fn paint_at(&mut self, px: usize, py: usize, alive: bool) -> Result<bool> {
        match self.geometry.cell_at(px, py) {
            Some((x, y)) => {
                self.grid.set(x, y, alive)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn randomize(&mut self, spawn_rate: u32) {
        RandomSeeder::randomize(&mut self.grid, spawn_rate);
        log::debug!(
            "randomized at rate {}: {} live cells",
            spawn_rate,
            self.grid.living_count()
        );
    }

    /// Advance one generation regardless of play state
    pub fn step(&mut self) {
        self.grid = GameOfLifeRules::step(&self.grid);
        self.generation += 1;
    }

    /// One frame of the main loop. Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        self.frame += 1;
        if self.running && self.frame % u64::from(self.speed) == 0 {
            self.step();
            return true;
        }
        false
    }

    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Halve the pace: one generation every twice as many frames
    pub fn slower(&mut self) {
        self.speed = (self.speed * 2).min(MAX_SPEED_DIVISOR);
    }

    pub fn faster(&mut self) {
        self.speed = (self.speed / 2).max(1);
    }

    pub fn reset_speed(&mut self) {
        self.speed = 1;
    }

    pub fn save(&mut self) {
        self.snapshot.save(&self.grid);
        log::debug!("saved snapshot at generation {}", self.generation);
    }

    /// Replace the live grid with the snapshot; the grid is untouched on failure
    pub fn restore(&mut self) -> Result<()> {
        self.grid = self.snapshot.restore()?;
        log::debug!("restored snapshot");
        Ok(())
    }

    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        export_to_file(path.as_ref(), &self.grid, &self.geometry)?;
        log::info!("exported generation {} to {}", self.generation, path.as_ref().display());
        Ok(())
    }

    /// Load a file into this session. The old snapshot is dropped since its
    /// size may no longer match; on failure nothing changes.
    pub fn import<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let (grid, geometry) = load_checked(path.as_ref())?;
        self.grid = grid;
        self.geometry = geometry;
        self.snapshot.discard();
        self.generation = 0;
        log::info!("imported {}", path.as_ref().display());
        Ok(())
    }

    /// Title-bar text for a frontend
    pub fn status_line(&self) -> String {
        format!(
            "Speed: 1/{},  {}",
            self.speed,
            if self.running { "Playing" } else { "Paused" }
        )
    }
}

/// Import a file whose window must divide evenly into cells
fn load_checked(path: &Path) -> Result<(Grid, Geometry)> {
    let (grid, geometry) = import_from_file(path)?;
    Geometry::from_window(
        geometry.window_width,
        geometry.window_height,
        geometry.cell_pixel_size,
    )?;
    Ok((grid, geometry))
}
