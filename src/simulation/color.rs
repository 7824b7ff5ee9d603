//! RGBA colors handed to the renderer.

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Pure red.
    pub const RED: Self = Self::opaque(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::opaque(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the low-energy tint of this color.
    ///
    /// Red is forced to full intensity while green and blue fade with `fraction`
    /// (clamped to `[0, 1]`).
    pub fn starving(self, fraction: f32) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        Self {
            r: 255,
            g: (f32::from(self.g) * fraction) as u8,
            b: (f32::from(self.b) * fraction) as u8,
            a: self.a,
        }
    }
}
