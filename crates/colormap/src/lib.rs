//! # HeatGrid Colormap
//!
//! Gradient tables and grid-to-raster rendering for HeatGrid.
//!
//! Provides 9 predefined gradient tables plus linear and multi-stop
//! gradient construction. The main entry points are [`rasterize`], which
//! converts a normalized data series into an RGBA pixel buffer, and
//! [`draw`], which pushes that buffer onto a [`Surface`].
//!
//! ## Usage
//!
//! ```ignore
//! use heatgrid_colormap::{draw, presets, DrawOptions};
//! use heatgrid_core::GridGeometry;
//!
//! let opts = DrawOptions::new(GridGeometry::square(40, 35, 10));
//! draw(&mut target, &data, &opts)?;
//! ```
//!
//! Data values are expected in `[0, 1)`; out-of-range values are clamped
//! to the ends of the gradient table.

mod gradient;
pub mod presets;
mod render;
mod surface;

pub use gradient::Gradient;
pub use render::rasterize;
pub use surface::{draw, DrawOptions, ImageSurface};

pub use heatgrid_core::{Color, Error, GridGeometry, Result, Surface};
