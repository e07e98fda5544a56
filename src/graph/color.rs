//! Deterministic name-based color assignment
//!
//! Every package name maps to a fixed color so the same package renders
//! identically within and across runs. The color is derived from a SHA-256
//! digest of the name: the digest, read as a big-endian unsigned integer,
//! seeds the hue and saturation of an HSB triple at full brightness, which is
//! then converted to an RGB hex string.

use std::fmt;

use sha2::{Digest, Sha256};

/// An RGB color renderable as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Derive the color for a name. Pure function: identical names always yield
/// identical colors.
pub fn color_for(name: &str) -> RgbColor {
    let digest = Sha256::digest(name.as_bytes());

    // The digest read as a big-endian integer H: H & 0xFF is the final byte,
    // (H >> 8) & 0xFF the one before it.
    let hue_byte = digest[digest.len() - 1];
    let saturation_byte = digest[digest.len() - 2];

    let hue = f64::from(hue_byte) / 255.0 * 359.0;
    let saturation = (f64::from(saturation_byte) / 255.0 * 50.0 + 10.0) / 100.0;

    hsb_to_rgb(hue, saturation, 1.0)
}

/// Convert hue (degrees, [0, 360)), saturation and brightness ([0, 1]) to RGB.
fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> RgbColor {
    let chroma = brightness * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = brightness - chroma;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    RgbColor {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}
