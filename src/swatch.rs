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

use crate::color::{self, Hsl};

/// A quantized color found in an image, along with how many sampled pixels fell into it and its visual impact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
    impact: f64,
}

impl Swatch {
    pub fn new((red, green, blue): (u8, u8, u8), population: u32) -> Swatch {
        Self {
            red,
            green,
            blue,
            population,
            impact: visual_impact((red, green, blue), population),
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn hsl(self) -> Hsl {
        color::rgb_to_hsl(self.rgb())
    }

    pub fn hex(self) -> String {
        color::rgb_to_hex(self.rgb())
    }

    pub fn population(self) -> u32 {
        self.population
    }

    pub fn impact(self) -> f64 {
        self.impact
    }
}

/// Weigh a color's frequency by how saturated it is and by how far its lightness is from the middle, so a vivid
/// color can outrank a more common dull one.
pub fn visual_impact(rgb: (u8, u8, u8), population: u32) -> f64 {
    let hsl = color::rgb_to_hsl(rgb);
    let saturation = hsl.saturation() as f64;
    let lightness = hsl.lightness() as f64;

    population as f64 * (1.0 + saturation / 100.0) * (1.0 + (lightness - 50.0).abs() / 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_gray_has_no_boost() {
        // 128 sits at 50% lightness after rounding
        assert_eq!(visual_impact((128, 128, 128), 10), 10.0);
    }

    #[test]
    fn saturation_and_lightness_boost_impact() {
        // s = 100, l = 50
        assert_eq!(visual_impact((255, 0, 0), 10), 20.0);
        // s = 0, l = 100
        assert_eq!(visual_impact((255, 255, 255), 10), 20.0);
        // s = 0, l = 0
        assert_eq!(visual_impact((0, 0, 0), 3), 6.0);
    }

    #[test]
    fn vivid_color_outranks_more_common_gray() {
        let gray = Swatch::new((120, 120, 120), 10);
        let red = Swatch::new((240, 0, 0), 6);

        assert!(red.impact() > gray.impact());
    }

    #[test]
    fn swatch_exposes_display_forms() {
        let swatch = Swatch::new((255, 0, 0), 1);

        assert_eq!(swatch.hex(), "#FF0000");
        assert_eq!(swatch.hsl(), Hsl::new(0, 100, 50));
        assert_eq!(swatch.population(), 1);
    }
}
