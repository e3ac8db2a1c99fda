//! Color value types and conversion math.
//!
//! All operations produce new values; colors are never mutated in place.
//! Channel math is done in `f32` and saturated into the 0-255 range so an
//! out-of-range interpolation factor extrapolates instead of wrapping.

mod palette;

use libm::{floorf, fmodf, roundf};

pub use palette::{
    AMBER, BLACK, BLOOD_RED, BLUE, BRIGHT_GREEN, CRIMSON, CYAN, DARK_RED, DEEP_BLUE,
    ELECTRIC_BLUE, EMERALD, GOLD, GREEN, HOT_PINK, ICE_BLUE, LIME_GREEN, MAGENTA, ORANGE, PALETTE,
    PURPLE, RED, VIOLET, WHITE, YELLOW,
};

/// Coolest color temperature the device accepts (6500K daylight).
pub const MIRED_COOL: u16 = 153;
/// Warmest color temperature the device accepts (2000K candlelight).
pub const MIRED_WARM: u16 = 500;

/// An RGB color with an optional blend opacity.
///
/// `alpha: None` means "replace whatever is staged for the zone outright";
/// `alpha: Some(a)` asks the device sink to blend this color over the staged
/// value at opacity `a` (0-1). Blending is the sink's job, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<f32>,
}

impl Color {
    /// Create a fully opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Attach a blend opacity (0 = invisible, 1 = fully covering).
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Scale all channels by a brightness factor, rounding to the nearest
    /// integer and saturating at the channel bounds.
    ///
    /// The opacity, if any, is carried over unchanged.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
            alpha: self.alpha,
        }
    }
}

/// Scale a single channel by a factor, rounding and saturating.
pub(crate) fn scale_channel(value: u8, factor: f32) -> u8 {
    clamp_channel(f32::from(value) * factor)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f32) -> u8 {
    roundf(value).clamp(0.0, 255.0) as u8
}

/// Linearly interpolate between two colors.
///
/// Each channel is `round(a + (b - a) * factor)`. The factor is not clamped;
/// values outside 0-1 extrapolate and the resulting channels saturate at the
/// 0-255 bounds. The result is always fully opaque.
pub fn interpolate(c1: Color, c2: Color, factor: f32) -> Color {
    let lerp = |a: u8, b: u8| clamp_channel(f32::from(a) + (f32::from(b) - f32::from(a)) * factor);
    Color {
        r: lerp(c1.r, c2.r),
        g: lerp(c1.g, c2.g),
        b: lerp(c1.b, c2.b),
        alpha: None,
    }
}

/// Convert an HSV triple (all components 0-1) to RGB.
///
/// Standard six-sector conversion. The hue wraps: any real value is taken
/// modulo 1 before the sector is computed, so `h` and `h + 1` are the same
/// color. Saturation and value are expected in 0-1.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let mut h = fmodf(h, 1.0);
    if h < 0.0 {
        h += 1.0;
    }

    let sector = floorf(h * 6.0);
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color {
        r: clamp_channel(r * 255.0),
        g: clamp_channel(g * 255.0),
        b: clamp_channel(b * 255.0),
        alpha: None,
    }
}
