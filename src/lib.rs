//! ArcSeek is the platform-independent core of an arc-shaped progress
//! selector: track geometry, touch-to-progress mapping, thumb placement,
//! gradient color lookup, and the drag/tap gesture state machine. A host
//! adapter feeds it raw touch points and size changes and paints the
//! [`RenderPlan`] it emits.

mod primitive;
mod seek_bar;
mod style;

pub use primitive::{
    ArcStrokePrimitive, BorderStrokePrimitive, Primitive, RenderPlan, ShadowPrimitive,
    ThumbPrimitive,
};
pub use seek_bar::{can_start_drag, ArcRegion, ArcSeekBar, SeekBarEvent, TouchEvent};
pub use style::{
    ArcSeekBarStyle, ConfigError, ThumbMode, DEFAULT_ARC_WIDTH, DEFAULT_EDGE_LENGTH,
    DEFAULT_MAX_VALUE, DEFAULT_OPEN_ANGLE, DEFAULT_ROTATE_ANGLE, DEFAULT_THUMB_RADIUS,
    DEFAULT_THUMB_WIDTH,
};

pub use arcseek_core::*;

pub use arcseek_path as path;
