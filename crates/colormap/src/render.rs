//! Grid-to-raster rendering.

use crate::gradient::Gradient;
use heatgrid_core::{Error, GridGeometry, Result};

/// Render a normalized data series as a block-per-cell RGBA buffer.
///
/// `data` is read in row-major order: index 0 is row 0, column 0, and the
/// index advances column-first. Each sample is looked up in the gradient
/// via [`Gradient::sample`] and painted as a solid
/// `cell_width` x `cell_height` block, fully opaque.
///
/// Returns a buffer of `geometry.width() * geometry.height() * 4` bytes in
/// row-major order. The output is deterministic: identical inputs produce
/// byte-identical buffers.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] when `data.len() != rows * cols`
/// - [`Error::EmptyGradient`] when the gradient table has no entries
///
/// Validation happens before any pixel work; no buffer is produced on
/// failure.
pub fn rasterize(data: &[f64], geometry: &GridGeometry, gradient: &Gradient) -> Result<Vec<u8>> {
    geometry.validate_len(data.len())?;
    if gradient.is_empty() {
        return Err(Error::EmptyGradient);
    }

    let width = geometry.width();
    let height = geometry.height();
    let mut rgba = vec![0u8; width * height * 4];

    for (i, &point) in data.iter().enumerate() {
        let pixel = gradient.sample(point).to_rgba();

        let top = (i / geometry.cols) * geometry.cell_height;
        let left = (i % geometry.cols) * geometry.cell_width;

        for dy in 0..geometry.cell_height {
            let row_start = ((top + dy) * width + left) * 4;
            for dx in 0..geometry.cell_width {
                let offset = row_start + dx * 4;
                rgba[offset..offset + 4].copy_from_slice(&pixel);
            }
        }
    }

    Ok(rgba)
}
