//! The seam between the pure rasterizer and display targets.

use crate::error::Result;

/// A 2-D drawable target that can receive RGBA pixel buffers.
///
/// Implementations wrap whatever actually shows pixels: an image buffer,
/// a framebuffer window, a GPU texture upload path. The rasterizer never
/// talks to a surface directly; the drawing glue prepares the target,
/// produces a buffer, and commits it.
pub trait Surface {
    /// Make the surface exactly `width` x `height` pixels.
    ///
    /// Called before any pixel work. Targets that cannot be resized should
    /// return [`Error::InvalidTarget`](crate::Error::InvalidTarget) when
    /// the requested size does not fit.
    fn prepare(&mut self, width: usize, height: usize) -> Result<()>;

    /// Copy an RGBA buffer of `width` x `height` pixels onto the surface
    /// with its top-left corner at `(x, y)`.
    ///
    /// `rgba` is row-major, 4 bytes per pixel, `width * height * 4` bytes
    /// long.
    fn commit(&mut self, rgba: &[u8], width: usize, height: usize, x: usize, y: usize)
        -> Result<()>;
}
