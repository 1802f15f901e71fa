//! The widget's configuration surface.

use arcseek_core::color::{RGB8, RGBA8, WHITE};
use arcseek_core::gradient::GradientError;

/// Default edge length of the content square before the host reports a size.
pub const DEFAULT_EDGE_LENGTH: f32 = 260.0;
/// Default track stroke width.
pub const DEFAULT_ARC_WIDTH: f32 = 40.0;
/// Default angular gap at the bottom of the track.
pub const DEFAULT_OPEN_ANGLE: f32 = 120.0;
/// Default display rotation.
pub const DEFAULT_ROTATE_ANGLE: f32 = 90.0;
/// Default maximum integer progress.
pub const DEFAULT_MAX_VALUE: i32 = 100;
/// Default thumb radius.
pub const DEFAULT_THUMB_RADIUS: f32 = 15.0;
/// Default thumb stroke width.
pub const DEFAULT_THUMB_WIDTH: f32 = 2.0;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Gradient(#[from] GradientError),

    #[error("max value must be positive (got {0})")]
    NonPositiveMaxValue(i32),

    #[error("open angle must lie within (0, 360) degrees (got {0})")]
    OpenAngleOutOfRange(f32),

    #[error("rotate angle must lie within [0, 360) degrees (got {0})")]
    RotateAngleOutOfRange(f32),

    #[error("bounding rect is degenerate ({width} x {height})")]
    DegenerateBounds { width: f32, height: f32 },
}

/// How the thumb circle is painted by the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThumbMode {
    #[default]
    Stroke,
    Fill,
    FillAndStroke,
}

/// Everything about the widget that a host can configure.
///
/// Changing any of these requires going back through
/// [`ArcSeekBar::set_style`](crate::ArcSeekBar::set_style) so the track
/// geometry and gradient ramp are rebuilt.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcSeekBarStyle {
    /// Ordered track colors, distributed evenly along the track. At least one.
    pub arc_colors: Vec<RGB8>,
    /// Stroke width of the track.
    pub arc_width: f32,
    /// The angular gap at the bottom of the track, in degrees, within (0, 360).
    pub open_angle: f32,
    /// Display rotation of the whole widget, in degrees, within [0, 360).
    pub rotate_angle: f32,
    /// Maximum integer progress; must be positive.
    pub max_value: i32,
    /// Border stroke width; zero disables the border.
    pub border_width: f32,
    /// Border stroke color.
    pub border_color: RGBA8,
    /// Thumb circle color.
    pub thumb_color: RGBA8,
    /// Thumb circle radius.
    pub thumb_radius: f32,
    /// Thumb stroke width.
    pub thumb_width: f32,
    /// Thumb paint mode.
    pub thumb_mode: ThumbMode,
    /// Shadow radius behind the track; zero disables the shadow.
    pub shadow_radius: f32,
}

impl Default for ArcSeekBarStyle {
    fn default() -> Self {
        Self {
            arc_colors: vec![
                RGB8::new(0x00, 0xc8, 0x53),
                RGB8::new(0xff, 0xd5, 0x4f),
                RGB8::new(0xff, 0x52, 0x52),
            ],
            arc_width: DEFAULT_ARC_WIDTH,
            open_angle: DEFAULT_OPEN_ANGLE,
            rotate_angle: DEFAULT_ROTATE_ANGLE,
            max_value: DEFAULT_MAX_VALUE,
            border_width: 0.0,
            border_color: WHITE,
            thumb_color: WHITE,
            thumb_radius: DEFAULT_THUMB_RADIUS,
            thumb_width: DEFAULT_THUMB_WIDTH,
            thumb_mode: ThumbMode::Stroke,
            shadow_radius: 0.0,
        }
    }
}

impl ArcSeekBarStyle {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.arc_colors.is_empty() {
            return Err(GradientError::NoStops.into());
        }
        if self.max_value <= 0 {
            return Err(ConfigError::NonPositiveMaxValue(self.max_value));
        }
        if !(self.open_angle > 0.0 && self.open_angle < 360.0) {
            return Err(ConfigError::OpenAngleOutOfRange(self.open_angle));
        }
        if !(self.rotate_angle >= 0.0 && self.rotate_angle < 360.0) {
            return Err(ConfigError::RotateAngleOutOfRange(self.rotate_angle));
        }
        Ok(())
    }

    /// Inset from the bounding rect to the track's content square, keeping
    /// the stroke, border, and shadow inside the bounds.
    pub(crate) fn content_inset(&self) -> f32 {
        self.arc_width / 2.0 + self.border_width + self.shadow_radius * 2.0
    }
}
