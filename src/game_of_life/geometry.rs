//! Cell scale and window size that travel alongside a grid

use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};

/// Pixel geometry of a grid: `window = cells * cell_pixel_size` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub cell_pixel_size: usize,
    pub window_width: usize,
    pub window_height: usize,
}

impl Geometry {
    /// Geometry from a window size in pixels; both sides must divide by the scale
    pub fn from_window(window_width: usize, window_height: usize, scale: usize) -> Result<Self> {
        if window_width == 0 || window_height == 0 || scale == 0 {
            return Err(LifeError::InvalidDimension {
                width: window_width,
                height: window_height,
            });
        }

        for pixels in [window_width, window_height] {
            if pixels % scale != 0 {
                return Err(LifeError::NotDivisible { pixels, scale });
            }
        }

        Ok(Self {
            cell_pixel_size: scale,
            window_width,
            window_height,
        })
    }

    /// Geometry from a size in cells
    pub fn from_cells(width_cells: usize, height_cells: usize, scale: usize) -> Result<Self> {
        let invalid = LifeError::InvalidDimension {
            width: width_cells,
            height: height_cells,
        };
        if width_cells == 0 || height_cells == 0 || scale == 0 {
            return Err(invalid);
        }

        match (width_cells.checked_mul(scale), height_cells.checked_mul(scale)) {
            (Some(window_width), Some(window_height)) => Ok(Self {
                cell_pixel_size: scale,
                window_width,
                window_height,
            }),
            _ => Err(invalid),
        }
    }

    /// Grid dimensions as `(width_cells, height_cells)`
    pub fn cells(&self) -> (usize, usize) {
        (
            self.window_width / self.cell_pixel_size,
            self.window_height / self.cell_pixel_size,
        )
    }

    /// Cell under a pointer position, if it is inside the window
    pub fn cell_at(&self, px: usize, py: usize) -> Option<(usize, usize)> {
        if px >= self.window_width || py >= self.window_height {
            return None;
        }
        Some((px / self.cell_pixel_size, py / self.cell_pixel_size))
    }
}
