//! An evenly spaced gradient ramp over the seek track.
//!
//! The ramp owns the ordered list of track colors and answers two questions:
//! the interpolated color at a progress fraction, and the sweep-gradient stop
//! offsets a host needs to shade the track itself.

use smallvec::SmallVec;

use crate::color::{lerp_rgb8, opaque, RGB8, RGBA8};

/// Inline capacity for stop lists. Ramps with more stops spill to the heap.
pub const INLINE_STOPS: usize = 8;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientError {
    #[error("a gradient ramp requires at least one color stop")]
    NoStops,
}

/// A sweep-gradient color stop handed to the host for track shading.
///
/// Offsets are fractions of a full turn around the arc's center, matching the
/// drawable span of the track.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepStop {
    /// Offset around the sweep in the range `[0.0, 1.0]`.
    pub offset: f32,
    /// The unmixed color at the specified offset.
    pub color: RGB8,
}

/// An ordered list of colors distributed evenly across the `[0, 1]` progress
/// range. A single-entry ramp is a constant color.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRamp {
    stops: SmallVec<[RGB8; INLINE_STOPS]>,
}

impl GradientRamp {
    /// Creates a ramp from the given colors, preserving their order.
    ///
    /// Errors if no colors are supplied.
    pub fn new(colors: impl IntoIterator<Item = RGB8>) -> Result<Self, GradientError> {
        let stops: SmallVec<[RGB8; INLINE_STOPS]> = colors.into_iter().collect();
        if stops.is_empty() {
            return Err(GradientError::NoStops);
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[RGB8] {
        &self.stops
    }

    /// Returns the interpolated color at `fraction`, always fully opaque.
    ///
    /// `fraction <= 0` yields the first stop exactly and `fraction >= 1` the
    /// last; in between, the two enclosing stops are mixed per RGB channel.
    pub fn color_at(&self, fraction: f32) -> RGBA8 {
        let last = self.stops[self.stops.len() - 1];
        if !fraction.is_finite() {
            log::warn!("gradient lookup with non-finite fraction {}", fraction);
            return opaque(self.stops[0]);
        }
        if self.stops.len() == 1 || fraction >= 1.0 {
            return opaque(last);
        }

        let width = 1.0 / (self.stops.len() - 1) as f32;
        for i in 0..self.stops.len() {
            if fraction <= i as f32 * width {
                if i == 0 {
                    return opaque(self.stops[0]);
                }
                let local = (fraction - (i - 1) as f32 * width) / width;
                return opaque(lerp_rgb8(self.stops[i - 1], self.stops[i], local));
            }
        }

        opaque(last)
    }

    /// Sweep-gradient stops for a track with the given open angle, spread
    /// evenly over the drawable span `[open/2, 360 - open/2]` of the turn.
    pub fn sweep_stops(&self, open_angle: f32) -> SmallVec<[SweepStop; INLINE_STOPS]> {
        let start = (open_angle / 2.0) / 360.0;
        let stop = (360.0 - open_angle / 2.0) / 360.0;

        if self.stops.len() == 1 {
            let mut out = SmallVec::new();
            out.push(SweepStop {
                offset: start,
                color: self.stops[0],
            });
            return out;
        }

        let distance = (stop - start) / (self.stops.len() - 1) as f32;
        self.stops
            .iter()
            .enumerate()
            .map(|(i, &color)| SweepStop {
                offset: start + distance * i as f32,
                color,
            })
            .collect()
    }
}
