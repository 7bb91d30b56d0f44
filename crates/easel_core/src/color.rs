//! Color types and utilities

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Clamp every component into `[0, 1]`. NaN becomes 0.
    pub fn clamped(self) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(0.0, 1.0)
            }
        }
        Self {
            r: unit(self.r),
            g: unit(self.g),
            b: unit(self.b),
            a: unit(self.a),
        }
    }

    /// Convert to u8 array [r, g, b, a]
    ///
    /// Components are clamped first, then rounded to the nearest step, so
    /// `from_rgba8(to_rgba8(c))` is within 1/255 of `c` per channel and
    /// converting an 8-bit color back is exact.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Largest per-channel difference to another color
    pub fn max_channel_delta(&self, other: &Color) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_round_trip_stays_within_one_step() {
        let samples = [0.0, 0.1, 0.25, 1.0 / 3.0, 0.5, 0.7, 0.999, 1.0];
        for &v in &samples {
            let c = Color::new(v, 1.0 - v, v * 0.5, v);
            let [r, g, b, a] = c.to_rgba8();
            let back = Color::from_rgba8(r, g, b, a);
            assert!(
                back.max_channel_delta(&c) <= 1.0 / 255.0 + f32::EPSILON,
                "{:?} -> {:?}",
                c,
                back
            );
        }
    }

    #[test]
    fn rgba8_values_survive_unchanged() {
        for v in 0..=255u8 {
            let c = Color::from_rgba8(v, 255 - v, v / 2, v);
            assert_eq!(c.to_rgba8(), [v, 255 - v, v / 2, v]);
        }
    }

    #[test]
    fn out_of_range_components_are_clamped() {
        assert_eq!(Color::new(1.5, -0.2, 0.5, 2.0).to_rgba8(), [255, 0, 128, 255]);
        assert_eq!(Color::new(f32::NAN, 0.0, 0.0, 1.0).clamped().r, 0.0);
    }
}
