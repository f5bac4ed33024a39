//! Colour value type.

use std::fmt;

use palette::Srgba;
use serde::{Deserialize, Serialize};

/// An RGBA colour with components in `0.0..=1.0`, as the design tool exports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Multiply the alpha channel by a fill opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to 8-bit RGBA, rounding and clamping each channel.
    pub fn to_rgba8(self) -> [u8; 4] {
        let srgba: Srgba<u8> = Srgba::new(self.r, self.g, self.b, self.a).into_format();
        [srgba.red, srgba.green, srgba.blue, srgba.alpha]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}
