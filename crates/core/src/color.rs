//! RGB color with interpolation precision.

use serde::{Deserialize, Serialize};

/// RGB color with `f64` channels, each conceptually in 0..=255.
///
/// Channels stay real-valued through gradient construction so that
/// interpolation precision survives multi-segment composition; truncation
/// to bytes happens only when a pixel is written (see [`Color::to_rgba`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Color from integer byte channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Linear interpolation between `self` and `other`.
    ///
    /// `t = 0.0` yields `self` exactly; `t = 1.0` yields `other` exactly.
    /// No rounding is performed.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + t * (other.r - self.r),
            g: self.g + t * (other.g - self.g),
            b: self.b + t * (other.b - self.b),
        }
    }

    /// Convert to an opaque RGBA pixel.
    ///
    /// Channels are clamped to 0..=255 and truncated to integers; alpha is
    /// always 255.
    pub fn to_rgba(self) -> [u8; 4] {
        [
            truncate_channel(self.r),
            truncate_channel(self.g),
            truncate_channel(self.b),
            255,
        ]
    }
}

fn truncate_channel(c: f64) -> u8 {
    c.clamp(0.0, 255.0) as u8
}
