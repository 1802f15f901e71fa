//! Geometric types used throughout ArcSeek, aliased from the
//! [`euclid`](https://crates.io/crates/euclid) crate, along with the
//! degree-based angle helpers the touch-to-progress mapping is built on.
//!
//! All coordinates are in screen units with the y axis pointing down, so
//! positive angles rotate clockwise on screen.

/// A point in screen units.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A vector in screen units.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// A size in screen units.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// A rectangle in screen units.
///
/// Alias for ```euclid::default::Rect<f32>```
pub type Rect = euclid::default::Rect<f32>;

/// An angle in radians (f32).
///
/// Alias for ```euclid::Angle<f32>```
pub type Angle = euclid::Angle<f32>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub const fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Size::new(w, h)`.
#[inline]
pub const fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Rect::new(Point::new(x, y), Size::new(width, height))`.
#[inline]
pub const fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// Shorthand for `Angle { radians: value }`.
#[inline]
pub const fn radians(radians: f32) -> Angle {
    Angle { radians }
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f32) -> Angle {
    Angle {
        radians: degrees * (std::f32::consts::PI / 180.0),
    }
}

/// Normalizes an angle in degrees into the `[0, 360)` range.
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Returns the angle of `point` around `center` in degrees within `[0, 360)`,
/// measured clockwise on screen from the positive x axis.
///
/// Finite inputs only; the caller must guard against NaN coordinates.
#[inline]
pub fn angle_of(point: Point, center: Point) -> f32 {
    let angle = (point.y - center.y).atan2(point.x - center.x).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Rotates `point` by `angle` about `center`.
///
/// This is the transform between screen space and arc space: the arc is
/// defined in an unrotated frame and displayed rotated, so touch points are
/// mapped back with the negated rotation angle.
#[inline]
pub fn rotate_about(point: Point, center: Point, angle: Angle) -> Point {
    let (sin, cos) = angle.radians.sin_cos();
    let v = point - center;
    Point::new(
        center.x + v.x * cos - v.y * sin,
        center.y + v.x * sin + v.y * cos,
    )
}
