//! Game of Life rules implementation

use super::Grid;

/// Game of Life rules engine (B3/S23, dead edges)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation into a fresh grid.
    ///
    /// Every cell is decided from `current` alone, so no cell ever sees a
    /// neighbor that has already been updated.
    pub fn step(current: &Grid) -> Grid {
        let mut next = current.clone();

        let width = current.width();
        let previous = current.rows().flatten();
        for (idx, (cell, &alive)) in next.cells_mut().iter_mut().zip(previous).enumerate() {
            let (x, y) = (idx % width, idx / width);
            *cell = Self::should_be_alive(alive, current.count_neighbors(x, y));
        }

        next
    }

    /// Apply `step` a number of times
    pub fn step_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_dimensions_preserved() {
        let grid = grid_with(7, 3, &[(0, 0), (6, 2), (3, 1)]);
        let next = GameOfLifeRules::step(&grid);
        assert_eq!(next.width(), 7);
        assert_eq!(next.height(), 3);
    }

    #[test]
    fn test_empty_stays_empty() {
        let grid = Grid::new(6, 6).unwrap();
        assert!(GameOfLifeRules::step(&grid).is_empty());
    }

    #[test]
    fn test_still_life_block() {
        let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let next = GameOfLifeRules::step(&grid);
        assert_eq!(grid, next);
    }

    #[test]
    fn test_block_in_corner() {
        // Hard edges: a block touching the border is still a block
        let grid = grid_with(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(GameOfLifeRules::step(&grid), grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let once = GameOfLifeRules::step(&horizontal);
        assert_eq!(once, vertical);

        let twice = GameOfLifeRules::step(&once);
        assert_eq!(twice, horizontal);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert!(GameOfLifeRules::step(&grid).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let before = grid.clone();
        let _ = GameOfLifeRules::step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_glider_does_not_wrap() {
        // Glider heading off the bottom-right corner collapses into a block
        let glider = grid_with(4, 4, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        let settled = GameOfLifeRules::step_generations(glider, 8);
        assert_eq!(settled, grid_with(4, 4, &[(2, 2), (3, 2), (2, 3), (3, 3)]));
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 8));
    }
}
