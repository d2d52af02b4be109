//! Game of Life core functionality

pub mod geometry;
pub mod grid;
pub mod io;
pub mod rules;
pub mod seed;
pub mod snapshot;

pub use geometry::Geometry;
pub use grid::Grid;
pub use io::{create_example_grids, decode, encode, export_to_file, import_from_file};
pub use rules::GameOfLifeRules;
pub use seed::RandomSeeder;
pub use snapshot::SnapshotStore;
