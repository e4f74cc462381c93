//! # HeatGrid Core
//!
//! Core types for the HeatGrid rendering library.
//!
//! This crate provides:
//! - `Color`: interpolation-precision RGB color
//! - `GridGeometry`: grid shape and cell pixel dimensions
//! - `Surface`: the seam between the pure rasterizer and display targets
//! - The error taxonomy shared by all HeatGrid crates

pub mod color;
pub mod error;
pub mod geometry;
pub mod surface;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::GridGeometry;
pub use surface::Surface;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::GridGeometry;
    pub use crate::surface::Surface;
}
