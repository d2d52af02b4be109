//! Single-slot quick save

use super::Grid;
use crate::error::{LifeError, Result};

/// Holds at most one saved grid
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    saved: Option<Grid>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `grid`, replacing any earlier snapshot
    pub fn save(&mut self, grid: &Grid) {
        self.saved = Some(grid.clone());
    }

    /// Hand out a copy of the snapshot; the stored one stays put
    pub fn restore(&self) -> Result<Grid> {
        self.saved.clone().ok_or(LifeError::NoSnapshot)
    }

    pub fn has_snapshot(&self) -> bool {
        self.saved.is_some()
    }

    /// Forget the snapshot
    pub fn discard(&mut self) {
        self.saved = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_save() {
        let store = SnapshotStore::new();
        assert!(!store.has_snapshot());
        assert!(matches!(store.restore(), Err(LifeError::NoSnapshot)));
    }

    #[test]
    fn test_save_restore_is_independent() {
        let mut store = SnapshotStore::new();
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();

        store.save(&grid);
        grid.set(0, 0, true).unwrap();

        let mut restored = store.restore().unwrap();
        assert!(restored.get(1, 1).unwrap());
        assert!(!restored.get(0, 0).unwrap());

        // Mutating what we got back leaves the slot alone, so it restores again
        restored.clear();
        let again = store.restore().unwrap();
        assert_eq!(again.living_count(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = SnapshotStore::new();
        let first = Grid::new(2, 2).unwrap();
        let mut second = Grid::new(2, 2).unwrap();
        second.set(1, 0, true).unwrap();

        store.save(&first);
        store.save(&second);
        assert_eq!(store.restore().unwrap(), second);

        store.discard();
        assert!(matches!(store.restore(), Err(LifeError::NoSnapshot)));
    }
}
