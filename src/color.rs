// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions between sRGB, integer HSL and `#RRGGBB` hex strings.
//!
//! RGB is always the source of truth. HSL is a rounded, integer view of a color used for scoring and for deriving
//! theme palettes, so converting back and forth is only accurate to about one unit per component.

/// A color in the HSL space with integer components.
///
/// Hue is in degrees in `[0, 360)`, saturation and lightness are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Hsl {
    /// Create a new HSL color. The hue wraps around into `[0, 360)` (negative values included) and the saturation
    /// and lightness are clamped into `[0, 100]`.
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self {
            hue: hue.rem_euclid(360) as u16,
            saturation: saturation.clamp(0, 100) as u8,
            lightness: lightness.clamp(0, 100) as u8,
        }
    }

    pub fn hue(self) -> i32 {
        self.hue as i32
    }

    pub fn saturation(self) -> i32 {
        self.saturation as i32
    }

    pub fn lightness(self) -> i32 {
        self.lightness as i32
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        hsl_to_rgb(self)
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self.to_rgb())
    }
}

/// Format an sRGB color as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Convert an sRGB color into integer HSL.
///
/// Achromatic colors (all channels equal) have both hue and saturation of 0.
pub fn rgb_to_hsl((r, g, b): (u8, u8, u8)) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let sum = max + min;
    let lightness = sum / 2.0;

    let (hue, saturation) = if diff == 0.0 {
        (0.0, 0.0)
    } else {
        let saturation = if lightness > 0.5 { diff / (2.0 - sum) } else { diff / sum };

        // whichever channel is the largest decides the sextant, red winning ties
        let sextant = if max == r {
            (g - b) / diff + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };

        (sextant / 6.0, saturation)
    };

    Hsl::new(
        (hue * 360.0).round() as i32,
        (saturation * 100.0).round() as i32,
        (lightness * 100.0).round() as i32,
    )
}

/// Convert integer HSL into sRGB.
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.hue as f64;
    let s = hsl.saturation as f64 / 100.0;
    let l = hsl.lightness as f64 / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let second = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let offset = l - chroma / 2.0;

    let (r, g, b) = match hsl.hue {
        0..=59 => (chroma, second, 0.0),
        60..=119 => (second, chroma, 0.0),
        120..=179 => (0.0, chroma, second),
        180..=239 => (0.0, second, chroma),
        240..=299 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    (to_channel(r + offset), to_channel(g + offset), to_channel(b + offset))
}

/// Convert possibly out-of-range HSL components straight into a hex string. See [`Hsl::new`] on how the components
/// are normalized.
pub fn hsl_to_hex(hue: i32, saturation: i32, lightness: i32) -> String {
    Hsl::new(hue, saturation, lightness).to_hex()
}

/// Euclidean distance between two colors in RGB space.
pub fn color_distance(lhs: (u8, u8, u8), rhs: (u8, u8, u8)) -> f64 {
    let dr = lhs.0 as f64 - rhs.0 as f64;
    let dg = lhs.1 as f64 - rhs.1 as f64;
    let db = lhs.2 as f64 - rhs.2 as f64;

    (dr * dr + dg * dg + db * db).sqrt()
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
