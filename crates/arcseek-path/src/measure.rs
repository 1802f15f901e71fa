//! Arc-length measurement along the track.

use arcseek_core::math::{Point, Vector};

use crate::ArcPath;

impl ArcPath {
    /// The arc length of the track in screen units.
    #[inline]
    pub fn length(&self) -> f32 {
        self.radius * self.sweep().radians.abs()
    }

    /// Returns the position on the track and the unit tangent vector at
    /// `distance` along it.
    ///
    /// The distance is clamped to `[0, length]`, so `0` always resolves to
    /// the arc's start point and `length` to its end point. The mapping in
    /// between is continuous and monotone.
    pub fn pos_tan_at(&self, distance: f32) -> (Point, Vector) {
        let length = self.length();
        if length <= 0.0 {
            return (self.point_at(self.start_angle.radians), Vector::zero());
        }

        let t = distance.clamp(0.0, length) / length;
        let angle = self.start_angle.radians + self.sweep().radians * t;
        let (sin, cos) = angle.sin_cos();
        let position = Point::new(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        );
        // Derivative of the clockwise sweep, normalized.
        let tangent = Vector::new(-sin, cos);
        (position, tangent)
    }

    /// The start point of the track (`distance = 0`).
    #[inline]
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle.radians)
    }

    /// The end point of the track (`distance = length`).
    #[inline]
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle.radians)
    }

    fn point_at(&self, angle_radians: f32) -> Point {
        let (sin, cos) = angle_radians.sin_cos();
        Point::new(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        )
    }
}
