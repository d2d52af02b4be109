//! Display and output formatting utilities

use crate::game_of_life::{Geometry, Grid};
use serde::Serialize;

/// Format grids for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for row in grid.rows() {
            output.extend(row.iter().map(|&cell| if cell { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Multi-line population report
    pub fn format_summary(summary: &GridSummary) -> String {
        let mut output = String::new();
        output.push_str("Grid Statistics:\n");
        output.push_str(&format!("  Size: {}x{} cells\n", summary.width, summary.height));
        output.push_str(&format!(
            "  Window: {}x{} px at {}px per cell\n",
            summary.geometry.window_width,
            summary.geometry.window_height,
            summary.geometry.cell_pixel_size
        ));
        output.push_str(&format!("  Living cells: {}\n", summary.living));
        output.push_str(&format!("  Density: {:.1}%\n", summary.density * 100.0));
        output
    }
}

/// Serializable description of a grid
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub width: usize,
    pub height: usize,
    pub geometry: Geometry,
    pub living: usize,
    pub density: f64,
    /// Rows in the persistence alphabet, `'1'` alive
    pub rows: Vec<String>,
}

impl GridSummary {
    pub fn new(grid: &Grid, geometry: &Geometry) -> Self {
        let living = grid.living_count();
        Self {
            width: grid.width(),
            height: grid.height(),
            geometry: *geometry,
            living,
            density: living as f64 / (grid.width() * grid.height()) as f64,
            rows: grid
                .rows()
                .map(|row| row.iter().map(|&cell| if cell { '1' } else { '0' }).collect())
                .collect(),
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Grid, Geometry) {
        let grid = Grid::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();
        let geometry = Geometry::from_cells(3, 2, 10).unwrap();
        (grid, geometry)
    }

    #[test]
    fn test_grid_formatting() {
        let (grid, _) = sample();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_summary() {
        let (grid, geometry) = sample();
        let summary = GridSummary::new(&grid, &geometry);

        assert_eq!(summary.living, 3);
        assert!((summary.density - 0.5).abs() < f64::EPSILON);
        assert_eq!(summary.rows, vec!["101".to_string(), "010".to_string()]);

        let text = GridFormatter::format_summary(&summary);
        assert!(text.contains("Living cells: 3"));
        assert!(text.contains("Density: 50.0%"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["geometry"]["window_width"], 30);
        assert_eq!(json["rows"][1], "010");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        let error = ColorOutput::error("failed");
        assert!(error.contains("failed"));
        assert!(error == "failed" || error.starts_with("\x1b[31m"));
    }
}
