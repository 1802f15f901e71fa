//! Build and measure the seek track curve.

use arcseek_core::math::{degrees, Angle, Point, Rect};

/// A segment of a circular arc, the shape of the seek track.
///
/// Defined in the unrotated "arc space" frame; any display rotation is
/// applied by the host and inverted at the touch boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcPath {
    /// The center of the arc.
    pub center: Point,
    /// The radius of the arc.
    pub radius: f32,
    /// The start of the segment's angle, clockwise rotation from positive x-axis.
    pub start_angle: Angle,
    /// The end of the segment's angle, clockwise rotation from positive x-axis.
    pub end_angle: Angle,
}

impl ArcPath {
    /// Builds the seek track inscribed in `bounds`: the arc starts at
    /// `open_angle / 2` and sweeps `360 - open_angle` degrees clockwise,
    /// leaving the open gap centered at the bottom of the circle.
    ///
    /// Rebuild whenever the bounds or the open angle change; the
    /// construction is pure and idempotent.
    pub fn from_bounds(bounds: Rect, open_angle: f32) -> Self {
        let radius = bounds.size.width.min(bounds.size.height) / 2.0;
        Self {
            center: bounds.center(),
            radius,
            start_angle: degrees(open_angle / 2.0),
            end_angle: degrees(360.0 - open_angle / 2.0),
        }
    }

    /// The signed sweep from start to end.
    #[inline]
    pub fn sweep(&self) -> Angle {
        self.end_angle - self.start_angle
    }
}
