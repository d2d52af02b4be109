//! Grid representation and utilities for Game of Life

use crate::error::{LifeError, Result};
use itertools::iproduct;

/// A fixed-size rectangle of cells with hard edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Create a grid from rows of cells, `rows[y][x]`
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::MalformedBody {
                    row: y,
                    detail: format!("length {}, expected {}", row.len(), width),
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Get cell value at coordinates
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = value;
        Ok(())
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let alive = !self.get(x, y)?;
        self.set(x, y, alive)?;
        Ok(alive)
    }

    /// Kill every cell in place
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Lookup for neighbor positions; anything off the grid counts as dead.
    fn is_alive_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return false;
        }
        self.cells[self.index(x as usize, y as usize)]
    }

    /// Count living cells in the Moore neighborhood of `(x, y)`
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .filter(|&(dx, dy)| self.is_alive_at(x as isize + dx, y as isize + dy))
            .count() as u8
    }

    /// Iterate over rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Get all living cell coordinates as `(x, y)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)])
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}
