use serde::{Deserialize, Serialize};

/// 8 bit per channel color. Alpha is implied and always opaque.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct RGBColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGBColor {
    pub const fn new(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const RED: RGBColor = RGBColor::new(255, 0, 0);
    pub const LIME: RGBColor = RGBColor::new(0, 255, 0);
    pub const LIGHT_GREEN: RGBColor = RGBColor::new(144, 238, 144);
    pub const LIGHT_SKY_BLUE: RGBColor = RGBColor::new(135, 206, 250);

    /// channels mapped from [0, 255] to [0, 1]
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// inverse of `to_unit`. each channel goes through `clamp01`.
    pub fn from_unit(rgb: [f32; 3]) -> RGBColor {
        RGBColor::new(clamp01(rgb[0]), clamp01(rgb[1]), clamp01(rgb[2]))
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// below 0 maps to 0, above 1 maps to 255, everything in between is scaled and truncated.
/// NaN maps to 0.
pub fn clamp01(value: f32) -> u8 {
    if value.is_nan() || value < 0.0 {
        0
    } else if value > 1.0 {
        255
    } else {
        (value * 255.0) as u8
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from(c: [u8; 3]) -> Self {
        RGBColor::new(c[0], c[1], c[2])
    }
}

impl From<RGBColor> for [u8; 3] {
    fn from(c: RGBColor) -> Self {
        [c.r, c.g, c.b]
    }
}
