//! HSV color space with unit-interval components.
//!
//! All suggestion algorithms operate in HSV internally: hue rotation is a
//! fraction-of-a-turn addition that leaves saturation and value untouched.
//! Hue, saturation and value are all expressed in `[0, 1]` -- the hue is a
//! turn fraction, not degrees. The analogous-color generator layers its own
//! degree arithmetic on top of this type; the two representations are never
//! mixed inside one computation.

use super::rgb::Rgb;

/// A color in HSV space.
///
/// # Components
///
/// - `h`: Hue as a fraction of a full turn (0.0 = red, 1/3 = green, 2/3 = blue)
/// - `s`: Saturation (0.0 = grey, 1.0 = fully saturated)
/// - `v`: Value (0.0 = black, 1.0 = full brightness)
///
/// Conversion back to [`Rgb`] truncates each channel toward zero, matching
/// the engine's integer-only color model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a turn fraction in `[0, 1)`
    pub h: f32,
    /// Saturation in `[0, 1]`
    pub s: f32,
    /// Value in `[0, 1]`
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color.
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Rotate the hue by `turns` (a fraction of a full revolution),
    /// wrapping into `[0, 1)`. Saturation and value are unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use color_engine::{Hsv, Rgb};
    ///
    /// // Red rotated half a turn is cyan
    /// let red = Hsv::from(Rgb::new(255, 0, 0));
    /// assert_eq!(Rgb::from(red.rotate(0.5)), Rgb::new(0, 255, 255));
    /// ```
    #[inline]
    pub fn rotate(self, turns: f32) -> Self {
        Self {
            h: (self.h + turns).rem_euclid(1.0),
            ..self
        }
    }
}

impl From<Rgb> for Hsv {
    /// Convert 8-bit RGB to HSV.
    ///
    /// Channels are normalized to `[0, 1]` before conversion. Achromatic
    /// colors (all channels equal) get hue and saturation 0.
    fn from(color: Rgb) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;
        if max == min {
            return Hsv::new(0.0, 0.0, v);
        }

        let delta = max - min;
        let s = delta / max;

        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsv::new((sector / 6.0).rem_euclid(1.0), s, v)
    }
}

impl From<Hsv> for Rgb {
    /// Convert HSV back to 8-bit RGB.
    ///
    /// Each channel is scaled by 255 and truncated (not rounded) toward
    /// zero.
    fn from(color: Hsv) -> Self {
        let Hsv { h, s, v } = color;

        let to_byte = |x: f32| (x * 255.0) as u8;

        if s == 0.0 {
            let grey = to_byte(v);
            return Rgb::new(grey, grey, grey);
        }

        let h = h.rem_euclid(1.0);
        let sector = (h * 6.0) as i32;
        let f = h * 6.0 - sector as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(to_byte(r), to_byte(g), to_byte(b))
    }
}
