//! Gradient table construction and lookup.

use heatgrid_core::{Color, Error, Result};

/// A precomputed color ramp: an ordered, fixed-length table of colors.
///
/// Index 0 is the low end of the data domain, the last index the high end.
/// Tables are immutable once built and cheap to share across rendering
/// calls; the presets in [`crate::presets`] are built once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<Color>,
}

impl Gradient {
    /// Build a table by linear interpolation between two colors.
    ///
    /// Entry `i` uses the normalization factor `i / steps`, not
    /// `i / (steps - 1)`: the first entry equals `low` exactly, and `high`
    /// is approached but never reached at the last index. Multi-stop
    /// construction relies on this so that concatenated segments meet
    /// without doubling the shared stop color.
    ///
    /// `steps == 0` yields an empty table; rendering with one fails with
    /// [`Error::EmptyGradient`].
    pub fn linear(low: Color, high: Color, steps: usize) -> Self {
        let colors = (0..steps)
            .map(|i| low.lerp(high, i as f64 / steps as f64))
            .collect();
        Self { colors }
    }

    /// Build a table from 2 or more stop colors with equal spacing.
    ///
    /// The table is divided into `stops.len() - 1` contiguous segments,
    /// each a linear gradient of `round(steps / segments)` entries. When
    /// the rounding falls short of `steps`, the remaining slots repeat the
    /// final stop verbatim; when it overshoots, the table is truncated.
    /// The result is always exactly `steps` entries long.
    pub fn multi_stop(stops: &[Color], steps: usize) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::NotEnoughStops { count: stops.len() });
        }
        Ok(Self::multi(stops, steps))
    }

    /// Multi-stop construction without the arity check. `stops` must hold
    /// at least 2 colors.
    pub(crate) fn multi(stops: &[Color], steps: usize) -> Self {
        let segments = stops.len() - 1;
        let per_segment = (steps as f64 / segments as f64).round() as usize;

        let mut colors = Vec::with_capacity(steps);
        for pair in stops.windows(2) {
            colors.extend(Self::linear(pair[0], pair[1], per_segment).colors);
        }

        // Rounding can overshoot or fall short of `steps`; clamp to the
        // exact length, padding any shortfall with the final stop verbatim.
        colors.resize(steps, stops[stops.len() - 1]);

        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Look up the color for a normalized data value.
    ///
    /// The table index is `floor(point * (len - 1))`, clamped to the table
    /// bounds: values below 0 (including NaN) map to the first entry,
    /// values at or above 1 map to the last.
    ///
    /// # Panics
    ///
    /// Panics if the table is empty. [`crate::rasterize`] rejects empty
    /// tables before sampling.
    pub fn sample(&self, point: f64) -> Color {
        let last = self.colors.len() - 1;
        // `as usize` saturates, so negative/NaN floor to 0 and +inf to the
        // max, which `min` then pulls back into the table.
        let index = ((point * last as f64).floor() as usize).min(last);
        self.colors[index]
    }
}
