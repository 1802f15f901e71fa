//! Declarative drawing output.
//!
//! [`ArcSeekBar::render`](crate::ArcSeekBar::render) produces a [`RenderPlan`]
//! instead of issuing draw calls: a list of primitives in paint order plus the
//! screen-space rotation the host applies around the track center before
//! drawing any of them.

use arcseek_core::color::RGBA8;
use arcseek_core::gradient::{SweepStop, INLINE_STOPS};
use arcseek_core::math::Point;
use arcseek_path::lyon_path;
use smallvec::SmallVec;

use crate::style::ThumbMode;

#[derive(Debug, Clone)]
pub enum Primitive {
    Shadow(ShadowPrimitive),
    ArcStroke(ArcStrokePrimitive),
    BorderStroke(BorderStrokePrimitive),
    Thumb(ThumbPrimitive),
}

/// A soft shadow under the track outline.
#[derive(Debug, Clone)]
pub struct ShadowPrimitive {
    pub path: lyon_path::Path,
    /// Blur radius of the shadow layer.
    pub radius: f32,
    /// Shadow tint; follows the gradient color at the current progress.
    pub color: RGBA8,
}

/// The track itself: the arc outline stroked with a sweep gradient.
#[derive(Debug, Clone)]
pub struct ArcStrokePrimitive {
    pub path: lyon_path::Path,
    pub width: f32,
    /// Sweep-gradient stops around [`Self::gradient_center`].
    pub gradient_stops: SmallVec<[SweepStop; INLINE_STOPS]>,
    pub gradient_center: Point,
    /// Stroke with round caps so the track ends are capped like the thumb.
    pub round_cap: bool,
}

/// An outline stroke around the fattened track band.
#[derive(Debug, Clone)]
pub struct BorderStrokePrimitive {
    pub path: lyon_path::Path,
    pub width: f32,
    pub color: RGBA8,
}

/// The draggable thumb circle.
#[derive(Debug, Clone)]
pub struct ThumbPrimitive {
    pub center: Point,
    pub radius: f32,
    /// Stroke width when the mode strokes.
    pub width: f32,
    pub color: RGBA8,
    pub mode: ThumbMode,
}

impl From<ShadowPrimitive> for Primitive {
    fn from(p: ShadowPrimitive) -> Self {
        Primitive::Shadow(p)
    }
}

impl From<ArcStrokePrimitive> for Primitive {
    fn from(p: ArcStrokePrimitive) -> Self {
        Primitive::ArcStroke(p)
    }
}

impl From<BorderStrokePrimitive> for Primitive {
    fn from(p: BorderStrokePrimitive) -> Self {
        Primitive::BorderStroke(p)
    }
}

impl From<ThumbPrimitive> for Primitive {
    fn from(p: ThumbPrimitive) -> Self {
        Primitive::Thumb(p)
    }
}

/// One frame's worth of drawing instructions, in paint order.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    /// Rotation in degrees the host applies about [`Self::rotation_center`]
    /// before painting the primitives.
    pub rotation_degrees: f32,
    pub rotation_center: Point,
    pub primitives: SmallVec<[Primitive; 4]>,
}
