//! Text persistence for grids
//!
//! Format: a header line `scale|window_width|window_height`, then one line per
//! row (top to bottom), each with one `'0'`/`'1'` character per column.

use super::{Geometry, Grid};
use crate::error::{LifeError, Result};
use std::path::Path;

/// Serialize a grid and its geometry
pub fn encode(grid: &Grid, geometry: &Geometry) -> String {
    let mut result = format!(
        "{}|{}|{}\n",
        geometry.cell_pixel_size, geometry.window_width, geometry.window_height
    );
    result.reserve(grid.height() * (grid.width() + 1));

    for row in grid.rows() {
        result.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Parse a grid and its geometry.
///
/// The cell dimensions are derived from the header; divisibility of the window
/// by the scale is the caller's concern.
pub fn decode(content: &str) -> Result<(Grid, Geometry)> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| LifeError::MalformedHeader("input is empty".to_string()))?;
    let geometry = parse_header(header)?;

    let (width, height) = geometry.cells();
    if width == 0 || height == 0 {
        return Err(LifeError::MalformedHeader(format!(
            "window {}x{} is smaller than one {}px cell",
            geometry.window_width, geometry.window_height, geometry.cell_pixel_size
        )));
    }

    let mut body: Vec<&str> = lines.collect();
    while body.last().is_some_and(|line| line.is_empty()) {
        body.pop();
    }

    let rows = body
        .into_iter()
        .enumerate()
        .map(|(y, line)| parse_row(y, line, width))
        .collect::<Result<Vec<_>>>()?;

    if rows.len() != height {
        return Err(LifeError::DimensionMismatch {
            expected: height,
            found: rows.len(),
        });
    }

    Ok((Grid::from_rows(rows)?, geometry))
}

fn parse_header(header: &str) -> Result<Geometry> {
    let fields: Vec<&str> = header.split('|').collect();
    if fields.len() != 3 {
        return Err(LifeError::MalformedHeader(format!(
            "expected 3 '|'-separated fields, found {}",
            fields.len()
        )));
    }

    let mut values = [0usize; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        let digits_only = !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
        *value = match field.parse::<usize>() {
            Ok(n) if digits_only && n > 0 => n,
            _ => {
                return Err(LifeError::MalformedHeader(format!(
                    "'{}' is not a positive integer",
                    field
                )))
            }
        };
    }

    let [cell_pixel_size, window_width, window_height] = values;
    Ok(Geometry {
        cell_pixel_size,
        window_width,
        window_height,
    })
}

fn parse_row(y: usize, line: &str, width: usize) -> Result<Vec<bool>> {
    let length = line.chars().count();
    if length != width {
        return Err(LifeError::MalformedBody {
            row: y,
            detail: format!("length {}, expected {}", length, width),
        });
    }

    line.chars()
        .enumerate()
        .map(|(x, ch)| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(LifeError::MalformedBody {
                row: y,
                detail: format!("invalid character '{}' at column {}", ch, x),
            }),
        })
        .collect()
}

/// Write a grid to a file, replacing any previous content
pub fn export_to_file<P: AsRef<Path>>(path: P, grid: &Grid, geometry: &Geometry) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    std::fs::write(path, encode(grid, geometry)).map_err(io_error)?;
    log::debug!("exported {}x{} grid to {}", grid.width(), grid.height(), path.display());
    Ok(())
}

/// Load a grid from a file
pub fn import_from_file<P: AsRef<Path>>(path: P) -> Result<(Grid, Geometry)> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (grid, geometry) = decode(&content)?;
    log::debug!("imported {}x{} grid from {}", grid.width(), grid.height(), path.display());
    Ok((grid, geometry))
}

/// Create example pattern files
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| LifeError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let patterns = [
        ("glider.txt", "20|100|100\n00100\n10100\n01100\n00000\n00000\n"),
        ("blinker.txt", "20|100|100\n00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "20|80|80\n0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "20|120|80\n110000\n110000\n001100\n001100\n"),
    ];

    for (name, content) in patterns {
        let path = dir.join(name);
        std::fs::write(&path, content).map_err(|source| LifeError::Io { path, source })?;
    }

    Ok(())
}
