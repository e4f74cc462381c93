//! Integration tests for the surface drawing glue.

use heatgrid_colormap::{draw, presets, DrawOptions, Gradient, ImageSurface};
use heatgrid_core::{Color, Error, GridGeometry, Result, Surface};

/// Records the calls a draw makes, standing in for a real display target.
#[derive(Default)]
struct RecordingSurface {
    prepared: Option<(usize, usize)>,
    committed: Option<(Vec<u8>, usize, usize, usize, usize)>,
}

impl Surface for RecordingSurface {
    fn prepare(&mut self, width: usize, height: usize) -> Result<()> {
        self.prepared = Some((width, height));
        Ok(())
    }

    fn commit(
        &mut self,
        rgba: &[u8],
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    ) -> Result<()> {
        self.committed = Some((rgba.to_vec(), width, height, x, y));
        Ok(())
    }
}

/// A target that refuses every size, e.g. a fixed framebuffer.
struct RejectingSurface;

impl Surface for RejectingSurface {
    fn prepare(&mut self, width: usize, height: usize) -> Result<()> {
        Err(Error::InvalidTarget(format!(
            "fixed target cannot become {width}x{height}"
        )))
    }

    fn commit(&mut self, _: &[u8], _: usize, _: usize, _: usize, _: usize) -> Result<()> {
        unreachable!("commit must not run when prepare fails")
    }
}

#[test]
fn draw_prepares_then_commits_at_origin() {
    let mut target = RecordingSurface::default();
    let gradient = Gradient::linear(Color::black(), Color::white(), 500);
    let opts = DrawOptions::with_gradient(GridGeometry::new(2, 3, 4, 5), &gradient);
    let data = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];

    draw(&mut target, &data, &opts).unwrap();

    assert_eq!(target.prepared, Some((12, 10)));
    let (rgba, width, height, x, y) = target.committed.unwrap();
    assert_eq!((width, height, x, y), (12, 10, 0, 0));
    assert_eq!(rgba.len(), 12 * 10 * 4);
}

#[test]
fn draw_uses_heat_preset_by_default() {
    let mut target = RecordingSurface::default();
    let opts = DrawOptions::new(GridGeometry::square(1, 1, 1));

    draw(&mut target, &[0.0], &opts).unwrap();

    let (rgba, ..) = target.committed.unwrap();
    assert_eq!(rgba, presets::HEAT.colors()[0].to_rgba());
}

#[test]
fn validation_failure_touches_no_surface() {
    let mut target = RecordingSurface::default();
    let opts = DrawOptions::new(GridGeometry::square(2, 2, 1));

    let err = draw(&mut target, &[0.0, 0.5], &opts).unwrap_err();

    assert!(matches!(err, Error::DimensionMismatch { .. }));
    assert!(target.prepared.is_none());
    assert!(target.committed.is_none());
}

#[test]
fn unusable_target_is_reported() {
    let opts = DrawOptions::new(GridGeometry::square(1, 1, 1));
    let err = draw(&mut RejectingSurface, &[0.5], &opts).unwrap_err();
    assert!(matches!(err, Error::InvalidTarget(_)));
}

#[test]
fn image_surface_end_to_end() {
    let mut surface = ImageSurface::new();
    let gradient = Gradient::linear(Color::black(), Color::white(), 500);
    let opts = DrawOptions::with_gradient(GridGeometry::square(2, 2, 3), &gradient);

    draw(&mut surface, &[0.0, 0.25, 0.5, 0.75], &opts).unwrap();

    let img = surface.image();
    assert_eq!(img.dimensions(), (6, 6));
    // Top-left cell is the table's first entry.
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    // Cells are uniform blocks.
    assert_eq!(img.get_pixel(2, 2), img.get_pixel(0, 0));
    assert_eq!(img.get_pixel(3, 0), img.get_pixel(5, 2));
    // Row-major: bottom-right cell is the brightest.
    let brightest = img.get_pixel(5, 5).0[0];
    assert!(brightest > img.get_pixel(0, 5).0[0]);
    assert!(img.get_pixel(0, 5).0[0] > img.get_pixel(5, 0).0[0]);
}
