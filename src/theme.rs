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

use crate::color::Hsl;
use std::fmt;

pub const THEME_PALETTE_SIZE: usize = 5;

const MONOCHROMATIC_LIGHTNESS_OFFSETS: [i32; THEME_PALETTE_SIZE] = [-40, -20, 0, 20, 40];
const ANALOGOUS_HUE_OFFSETS: [i32; THEME_PALETTE_SIZE] = [-60, -30, 0, 30, 60];

const COMPLEMENT_ANGLE: i32 = 180;
const TRIADIC_ANGLE: i32 = 120;
const SPLIT_ANGLE: i32 = 30;

const TRIADIC_DESATURATION: i32 = 30;
const SPLIT_DESATURATION: i32 = 20;

/// The colors of a single theme, in display order.
pub type ThemePalette = [String; THEME_PALETTE_SIZE];

/// A color-theory rule used to derive a palette from a single base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Theme {
    /// The base hue at five lightness levels, darkest first.
    Monochromatic,
    /// Hues 30 and 60 degrees to either side of the base.
    Analogous,
    /// Three lightness levels of the base followed by two of its complement.
    Complementary,
    /// The three hues evenly spaced around the wheel, plus two desaturated variants.
    Triadic,
    /// The base, both neighbours of its complement, and two desaturated lightness variants of the base.
    SplitComplementary,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Monochromatic,
        Theme::Analogous,
        Theme::Complementary,
        Theme::Triadic,
        Theme::SplitComplementary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Monochromatic => "Monochromatic",
            Theme::Analogous => "Analogous",
            Theme::Complementary => "Complementary",
            Theme::Triadic => "Triadic",
            Theme::SplitComplementary => "Split Complementary",
        }
    }

    /// Derive this theme's palette from the given base color.
    pub fn generate(self, base: Hsl) -> ThemePalette {
        self.colors(base).map(Hsl::to_hex)
    }

    /// Derive this theme's palette from the given base color, leaving the colors in HSL.
    pub fn colors(self, base: Hsl) -> [Hsl; THEME_PALETTE_SIZE] {
        let (h, s, l) = (base.hue(), base.saturation(), base.lightness());

        match self {
            Theme::Monochromatic => MONOCHROMATIC_LIGHTNESS_OFFSETS.map(|offset| Hsl::new(h, s, l + offset)),
            Theme::Analogous => ANALOGOUS_HUE_OFFSETS.map(|offset| Hsl::new(h + offset, s, l)),
            Theme::Complementary => {
                let complement = h + COMPLEMENT_ANGLE;

                [
                    Hsl::new(h, s, l - 20),
                    Hsl::new(h, s, l),
                    Hsl::new(h, s, l + 20),
                    Hsl::new(complement, s, l - 10),
                    Hsl::new(complement, s, l),
                ]
            }
            Theme::Triadic => {
                let desaturated = s - TRIADIC_DESATURATION;

                [
                    Hsl::new(h, s, l),
                    Hsl::new(h + TRIADIC_ANGLE, s, l),
                    Hsl::new(h + 2 * TRIADIC_ANGLE, s, l),
                    Hsl::new(h, desaturated, l),
                    Hsl::new(h + TRIADIC_ANGLE, desaturated, l),
                ]
            }
            Theme::SplitComplementary => {
                let complement = h + COMPLEMENT_ANGLE;
                let desaturated = s - SPLIT_DESATURATION;

                [
                    Hsl::new(h, s, l),
                    Hsl::new(complement - SPLIT_ANGLE, s, l),
                    Hsl::new(complement + SPLIT_ANGLE, s, l),
                    Hsl::new(h, desaturated, l - 15),
                    Hsl::new(h, desaturated, l + 15),
                ]
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Every theme's palette derived from one base color, in [`Theme::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemePalettes {
    base: Hsl,
    palettes: [(Theme, ThemePalette); 5],
}

impl ThemePalettes {
    pub fn generate(base: Hsl) -> Self {
        Self {
            base,
            palettes: Theme::ALL.map(|theme| (theme, theme.generate(base))),
        }
    }

    /// The color every palette was derived from.
    pub fn base(&self) -> Hsl {
        self.base
    }

    pub fn get(&self, theme: Theme) -> &ThemePalette {
        // palettes are stored in declaration order
        &self.palettes[theme as usize].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Theme, &ThemePalette)> {
        self.palettes.iter().map(|(theme, palette)| (*theme, palette))
    }
}
