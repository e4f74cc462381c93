//! Drawing glue: pushing rasterized heat maps onto surfaces.

use std::path::Path;

use crate::gradient::Gradient;
use crate::presets;
use crate::render::rasterize;
use heatgrid_core::{Error, GridGeometry, Result, Surface};

/// Options for [`draw`].
#[derive(Debug, Clone)]
pub struct DrawOptions<'a> {
    /// Grid shape and cell pixel dimensions.
    pub geometry: GridGeometry,
    /// Gradient table to use. `None` selects [`presets::HEAT`].
    pub gradient: Option<&'a Gradient>,
}

impl<'a> DrawOptions<'a> {
    /// Options with the default heat gradient.
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            gradient: None,
        }
    }

    pub fn with_gradient(geometry: GridGeometry, gradient: &'a Gradient) -> Self {
        Self {
            geometry,
            gradient: Some(gradient),
        }
    }
}

/// Rasterize a data series and push it onto a surface.
///
/// The target is prepared to the exact raster size, the grid is rendered,
/// and the buffer is committed at the surface origin. All validation runs
/// before the target is touched; a failed call leaves the surface
/// unmodified.
pub fn draw<S: Surface>(target: &mut S, data: &[f64], options: &DrawOptions<'_>) -> Result<()> {
    let gradient: &Gradient = options.gradient.unwrap_or(&presets::HEAT);

    let rgba = rasterize(data, &options.geometry, gradient)?;

    let width = options.geometry.width();
    let height = options.geometry.height();
    target.prepare(width, height)?;
    target.commit(&rgba, width, height, 0, 0)
}

/// Draw target backed by an [`image::RgbaImage`], usable for PNG export.
#[derive(Debug, Clone, Default)]
pub struct ImageSurface {
    image: image::RgbaImage,
}

impl ImageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> image::RgbaImage {
        self.image
    }

    /// Write the surface contents as an image file; the format is inferred
    /// from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), image::ImageError> {
        self.image.save(path)
    }
}

impl From<image::RgbaImage> for ImageSurface {
    fn from(image: image::RgbaImage) -> Self {
        Self { image }
    }
}

impl Surface for ImageSurface {
    fn prepare(&mut self, width: usize, height: usize) -> Result<()> {
        if self.image.width() as usize != width || self.image.height() as usize != height {
            self.image = image::RgbaImage::new(width as u32, height as u32);
        }
        Ok(())
    }

    fn commit(&mut self, rgba: &[u8], width: usize, height: usize, x: usize, y: usize)
        -> Result<()> {
        if rgba.len() < width * height * 4 {
            return Err(Error::InvalidTarget(format!(
                "buffer holds {} bytes, {}x{} needs {}",
                rgba.len(),
                width,
                height,
                width * height * 4
            )));
        }
        if x + width > self.image.width() as usize || y + height > self.image.height() as usize {
            return Err(Error::InvalidTarget(format!(
                "{}x{} buffer at ({x}, {y}) exceeds {}x{} image",
                width,
                height,
                self.image.width(),
                self.image.height()
            )));
        }

        for row in 0..height {
            for col in 0..width {
                let p = (row * width + col) * 4;
                let pixel = image::Rgba([rgba[p], rgba[p + 1], rgba[p + 2], rgba[p + 3]]);
                self.image.put_pixel((x + col) as u32, (y + row) as u32, pixel);
            }
        }
        Ok(())
    }
}
