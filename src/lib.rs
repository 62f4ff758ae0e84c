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

//! A library to extract a dominant color palette from an image and derive color-theory themes from it.
//!
//! Extraction is a cheap histogram heuristic meant for interactive use rather than an optimal clustering:
//!
//! 1. the image is scaled down so its longer side is at most 300 pixels,
//! 2. up to about 10 000 evenly spaced, mostly opaque pixels are sampled,
//! 3. each sample is snapped onto a coarse RGB grid and counted,
//! 4. the 12 most frequent colors are deduplicated by RGB distance,
//! 5. the survivors are ranked by a visual impact score favouring saturated colors away from mid-gray, and the top 8
//!    make up the palette.
//!
//! The highest impact color is then used as the base of five theme palettes (see [`Theme`]).
//!
//! ```no_run
//! use hueset::{image::io::Reader as ImageReader, PaletteBuilder, Theme};
//!
//! let image = ImageReader::open("photo.jpg")?.decode()?.to_rgba8();
//! let palette = PaletteBuilder::from_image(image).generate()?;
//!
//! for swatch in palette.swatches() {
//!     println!("{} ({} px)", swatch.hex(), swatch.population());
//! }
//!
//! println!("{:?}", palette.theme(Theme::Complementary));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
mod config;
mod error;
mod filter;
mod quantizer;
mod sampler;
mod session;
mod swatch;
mod theme;

pub use crate::{
    color::Hsl,
    config::{
        ExtractionConfig, DEFAULT_ALPHA_THRESHOLD, DEFAULT_CANDIDATE_COUNT, DEFAULT_MAX_COLORS, DEFAULT_MAX_DIMENSION,
        DEFAULT_MAX_SAMPLES, DEFAULT_QUANTIZATION_FACTOR,
    },
    error::{PaletteError, Result},
    filter::{filter_similar_colors, DEFAULT_SIMILARITY_THRESHOLD},
    quantizer::{quantize, Histogram},
    sampler::{sample_stride, PixelSampler},
    session::{ExtractionRequest, ExtractionSession},
    swatch::{visual_impact, Swatch},
    theme::{Theme, ThemePalette, ThemePalettes, THEME_PALETTE_SIZE},
};
pub use image;

use image::RgbaImage;
use log::{debug, warn};

/// The dominant colors of an image together with the themes derived from the most impactful one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
    themes: ThemePalettes,
}

#[derive(Debug)]
enum Source {
    Image(RgbaImage),
    Raw { pixels: Vec<u8>, width: u32, height: u32 },
}

/// Configures and runs a palette extraction.
#[derive(Debug)]
pub struct PaletteBuilder {
    source: Source,
    config: ExtractionConfig,
}

impl Palette {
    pub fn from_image(image: RgbaImage) -> PaletteBuilder {
        PaletteBuilder::from_image(image)
    }

    /// The dominant colors ordered by visual impact, highest first. Never empty.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The highest impact color, which every theme is derived from.
    pub fn dominant_swatch(&self) -> Swatch {
        self.swatches[0]
    }

    pub fn dominant_color(&self) -> (u8, u8, u8) {
        self.dominant_swatch().rgb()
    }

    pub fn hex_colors(&self) -> Vec<String> {
        self.swatches.iter().map(|swatch| swatch.hex()).collect()
    }

    pub fn themes(&self) -> &ThemePalettes {
        &self.themes
    }

    pub fn theme(&self, theme: Theme) -> &ThemePalette {
        self.themes.get(theme)
    }

    fn generate(swatches: Vec<Swatch>) -> Result<Palette> {
        let base = swatches.first().ok_or(PaletteError::EmptyInput)?.hsl();

        Ok(Self {
            swatches,
            themes: ThemePalettes::generate(base),
        })
    }
}

impl PaletteBuilder {
    /// Start building a palette from a decoded image. The image is scaled down before sampling if it is larger than
    /// the configured maximum dimension.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            source: Source::Image(image),
            config: ExtractionConfig::default(),
        }
    }

    /// Start building a palette from a raw RGBA buffer that the caller has already scaled down. The buffer must hold
    /// exactly `width * height * 4` bytes.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            source: Source::Raw { pixels, width, height },
            config: ExtractionConfig::default(),
        }
    }

    pub fn config(self, config: ExtractionConfig) -> Self {
        Self { config, ..self }
    }

    pub fn quantization_factor(mut self, quantization_factor: u8) -> Self {
        self.config.quantization_factor = quantization_factor;
        self
    }

    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.config.max_samples = max_samples;
        self
    }

    pub fn alpha_threshold(mut self, alpha_threshold: u8) -> Self {
        self.config.alpha_threshold = alpha_threshold;
        self
    }

    pub fn candidate_count(mut self, candidate_count: usize) -> Self {
        self.config.candidate_count = candidate_count;
        self
    }

    pub fn similarity_threshold(mut self, similarity_threshold: f64) -> Self {
        self.config.similarity_threshold = similarity_threshold;
        self
    }

    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.config.max_colors = max_colors;
        self
    }

    pub fn max_dimension(mut self, max_dimension: u32) -> Self {
        self.config.max_dimension = max_dimension;
        self
    }

    pub fn generate(self) -> Result<Palette> {
        self.config.validate()?;

        match self.source {
            Source::Image(image) => {
                let image = scale_image_down(image, self.config.max_dimension);
                let (width, height) = image.dimensions();

                extract(image.as_raw(), width, height, &self.config)
            }
            Source::Raw { pixels, width, height } => extract(&pixels, width, height, &self.config),
        }
    }
}

/// Extract a palette from a `width` x `height` RGBA buffer.
///
/// Fails with [`PaletteError::InvalidInput`] if the buffer does not match the dimensions or the configuration is
/// invalid, and with [`PaletteError::EmptyInput`] if no sampled pixel is opaque enough.
pub fn extract(pixels: &[u8], width: u32, height: u32, config: &ExtractionConfig) -> Result<Palette> {
    config.validate()?;

    if width.max(height) > config.max_dimension {
        warn!(
            "extracting from a {}x{} buffer, larger than the expected {} pixels per side",
            width, height, config.max_dimension
        );
    }

    let sampler = PixelSampler::new(pixels, width, height, config.max_samples, config.alpha_threshold)?;
    let stride = sampler.stride();

    let mut histogram = Histogram::new(config.quantization_factor);
    histogram.extend(sampler.map(|pixel| (pixel.0[0], pixel.0[1], pixel.0[2])));

    if histogram.is_empty() {
        return Err(PaletteError::EmptyInput);
    }

    debug!(
        "sampled {} opaque pixels at stride {} into {} colors",
        histogram.total(),
        stride,
        histogram.len()
    );

    let candidates = histogram.most_frequent(config.candidate_count);
    let mut swatches = filter_similar_colors(&candidates, config.similarity_threshold);

    debug!("{} of {} candidate colors are distinct", swatches.len(), candidates.len());

    // stable, so equal impacts keep their frequency order
    swatches.sort_by(|lhs, rhs| rhs.impact().total_cmp(&lhs.impact()));
    swatches.truncate(config.max_colors);

    Palette::generate(swatches)
}

/// The dimensions an image should be scaled to so its longer side is at most `max_dimension`, keeping the aspect
/// ratio and at least one pixel per side. Images that already fit are left as they are.
pub fn downscaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width.max(height) <= max_dimension {
        return (width, height);
    }

    let scale = |side: u32, longer: u32| ((side as u64 * max_dimension as u64 / longer as u64) as u32).max(1);

    if width >= height {
        (max_dimension, scale(height, width))
    } else {
        (scale(width, height), max_dimension)
    }
}

fn scale_image_down(image: RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = downscaled_dimensions(width, height, max_dimension);

    if (new_width, new_height) == (width, height) {
        image
    } else {
        debug!("scaling {}x{} image down to {}x{}", width, height, new_width, new_height);
        image::imageops::resize(&image, new_width, new_height, image::imageops::FilterType::Nearest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_resized() {
        assert_eq!(downscaled_dimensions(300, 120, 300), (300, 120));
        assert_eq!(downscaled_dimensions(1, 1, 300), (1, 1));
    }

    #[test]
    fn longer_side_is_capped() {
        assert_eq!(downscaled_dimensions(1200, 600, 300), (300, 150));
        assert_eq!(downscaled_dimensions(600, 1200, 300), (150, 300));
        assert_eq!(downscaled_dimensions(1000, 1000, 300), (300, 300));
        assert_eq!(downscaled_dimensions(1000, 333, 300), (300, 99));
    }

    #[test]
    fn thin_images_keep_one_pixel() {
        assert_eq!(downscaled_dimensions(5000, 1, 300), (300, 1));
        assert_eq!(downscaled_dimensions(1, 5000, 300), (1, 300));
    }

    #[test]
    fn large_image_is_scaled_before_sampling() {
        let image = RgbaImage::from_pixel(900, 450, image::Rgba([0, 0, 255, 255]));
        let scaled = scale_image_down(image, 300);

        assert_eq!(scaled.dimensions(), (300, 150));
    }
}
