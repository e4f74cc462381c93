//! Grid shape and cell pixel dimensions.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shape of a heat map grid: how many cells it has and how many pixels
/// each cell covers.
///
/// The raster produced for a geometry is `cols * cell_width` pixels wide
/// and `rows * cell_height` pixels tall. A data series rendered with this
/// geometry must hold exactly `rows * cols` samples in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Number of cell rows
    pub rows: usize,
    /// Number of cell columns
    pub cols: usize,
    /// Width of each cell in pixels
    pub cell_width: usize,
    /// Height of each cell in pixels
    pub cell_height: usize,
}

impl GridGeometry {
    pub const fn new(rows: usize, cols: usize, cell_width: usize, cell_height: usize) -> Self {
        Self {
            rows,
            cols,
            cell_width,
            cell_height,
        }
    }

    /// Square cells of `cell_size` pixels.
    pub const fn square(rows: usize, cols: usize, cell_size: usize) -> Self {
        Self::new(rows, cols, cell_size, cell_size)
    }

    /// Total raster width in pixels.
    pub const fn width(&self) -> usize {
        self.cols * self.cell_width
    }

    /// Total raster height in pixels.
    pub const fn height(&self) -> usize {
        self.rows * self.cell_height
    }

    /// Number of cells in the grid.
    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Check that a data series of `actual` samples fills this grid exactly.
    pub fn validate_len(&self, actual: usize) -> Result<()> {
        let expected = self.cells();
        if actual != expected {
            return Err(Error::DimensionMismatch {
                rows: self.rows,
                cols: self.cols,
                expected,
                actual,
            });
        }
        Ok(())
    }
}
