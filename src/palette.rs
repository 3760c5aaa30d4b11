//! Palette catalog and seeded color selection.
//!
//! A scene picks exactly one palette from [`CATALOG`] at build time and
//! samples the flat color of every object from that palette. Catalog entries
//! are sRGB hex strings; parsing converts them to linear RGB because the
//! shaders work in linear space and the surface format is sRGB.

use anyhow::{anyhow, Result};
use rand::Rng;

/// A linear-RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// A gray of the given lightness in [0, 1], converted to linear.
    pub fn gray(lightness: f32) -> Self {
        let v = srgb_to_linear(lightness);
        Self { r: v, g: v, b: v }
    }

    /// Parse a `#rrggbb` sRGB hex string into a linear color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("expected leading '#' in color {:?}", hex))?;
        if digits.len() != 6 {
            return Err(anyhow!("expected 6 hex digits in color {:?}", hex));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            let byte = u8::from_str_radix(&digits[range], 16)?;
            Ok(srgb_to_linear(byte as f32 / 255.0))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Number of colors in every catalog palette.
pub const PALETTE_SIZE: usize = 5;

/// Built-in palette catalog (nice-color-palettes heritage).
pub const CATALOG: &[[&str; PALETTE_SIZE]] = &[
    ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"],
    ["#fe4365", "#fc9d9a", "#f9cdad", "#c8c8a9", "#83af9b"],
    ["#ecd078", "#d95b43", "#c02942", "#542437", "#53777a"],
    ["#556270", "#4ecdc4", "#c7f464", "#ff6b6b", "#c44d58"],
    ["#774f38", "#e08e79", "#f1d4af", "#ece5ce", "#c5e0dc"],
    ["#e8ddcb", "#cdb380", "#036564", "#033649", "#031634"],
    ["#490a3d", "#bd1550", "#e97f02", "#f8ca00", "#8a9b0f"],
    ["#594f4f", "#547980", "#45ada8", "#9de0ad", "#e5fcc2"],
    ["#00a0b0", "#6a4a3c", "#cc333f", "#eb6841", "#edc951"],
    ["#e94e77", "#d68189", "#c6a49a", "#c6e5d9", "#f4ead5"],
];

/// One parsed palette: an ordered, fixed-size list of colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    /// Parse one catalog entry.
    pub fn parse(entry: &[&str; PALETTE_SIZE]) -> Result<Self> {
        let mut colors = [Color::WHITE; PALETTE_SIZE];
        for (slot, hex) in colors.iter_mut().zip(entry.iter()) {
            *slot = Color::from_hex(hex)?;
        }
        Ok(Self { colors })
    }

    /// Select one palette uniformly at random from the catalog.
    ///
    /// The selection is fixed for the lifetime of the scene; callers pick
    /// once at build time and keep the result.
    pub fn pick<R: Rng>(rng: &mut R) -> Result<Self> {
        let entry = &CATALOG[rng.gen_range(0..CATALOG.len())];
        Self::parse(entry)
    }

    /// Sample one color uniformly from this palette.
    pub fn pick_color<R: Rng>(&self, rng: &mut R) -> Color {
        self.colors[rng.gen_range(0..self.colors.len())]
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }
}
