//! Conway's Game of Life simulator
//!
//! The engine is a fixed-size grid with hard edges, a pure step function, a
//! single-slot snapshot, random seeding, and a small text format for
//! exporting and importing grids. [`Session`] bundles these into the state a
//! frontend drives frame by frame.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result};
pub use game_of_life::{GameOfLifeRules, Geometry, Grid, RandomSeeder, SnapshotStore};
pub use session::Session;
