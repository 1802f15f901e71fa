//! This module re-exports the types from the [`rgb`](https://crates.io/crates/rgb) crate.

pub use rgb::*;

/// The color black with full opacity
pub const BLACK: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
/// The color white with full opacity
pub const WHITE: RGBA8 = RGBA8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Returns `color` with a fully opaque alpha channel.
#[inline]
pub const fn opaque(color: RGB8) -> RGBA8 {
    RGBA8 {
        r: color.r,
        g: color.g,
        b: color.b,
        a: 255,
    }
}

/// Linearly interpolates between two 8-bit colors, per channel, rounding to
/// the nearest integer and clamping to `[0, 255]`.
pub fn lerp_rgb8(start: RGB8, end: RGB8, ratio: f32) -> RGB8 {
    fn channel(start: u8, end: u8, ratio: f32) -> u8 {
        let mixed = start as f32 + (end as f32 - start as f32) * ratio + 0.5;
        mixed.floor().clamp(0.0, 255.0) as u8
    }

    RGB8 {
        r: channel(start.r, end.r, ratio),
        g: channel(start.g, end.g, ratio),
        b: channel(start.b, end.b, ratio),
    }
}
