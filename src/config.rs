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

use crate::{filter::DEFAULT_SIMILARITY_THRESHOLD, PaletteError, Result};

pub const DEFAULT_QUANTIZATION_FACTOR: u8 = 24;
pub const DEFAULT_MAX_SAMPLES: usize = 10_000;
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;
pub const DEFAULT_CANDIDATE_COUNT: usize = 12;
pub const DEFAULT_MAX_COLORS: usize = 8;
pub const DEFAULT_MAX_DIMENSION: u32 = 300;

/// Tunable parameters of the extraction pipeline.
///
/// The defaults are tuned for interactive use on images already scaled down to at most 300 pixels per side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractionConfig {
    /// Grid size each channel is snapped to before counting.
    pub quantization_factor: u8,
    /// Upper bound on how many pixels are visited.
    pub max_samples: usize,
    /// Pixels with an alpha below this are ignored.
    pub alpha_threshold: u8,
    /// How many of the most frequent colors go into deduplication.
    pub candidate_count: usize,
    /// Minimum RGB distance between two colors of the final palette.
    pub similarity_threshold: f64,
    /// Maximum size of the final palette.
    pub max_colors: usize,
    /// Longer side images are scaled down to before sampling.
    pub max_dimension: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            quantization_factor: DEFAULT_QUANTIZATION_FACTOR,
            max_samples: DEFAULT_MAX_SAMPLES,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_colors: DEFAULT_MAX_COLORS,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("quantization_factor", self.quantization_factor as usize),
            ("max_samples", self.max_samples),
            ("candidate_count", self.candidate_count),
            ("max_colors", self.max_colors),
            ("max_dimension", self.max_dimension as usize),
        ];

        if let Some((name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(PaletteError::invalid_input(format!("{} must be at least 1", name)));
        }

        if self.similarity_threshold.is_nan() || self.similarity_threshold < 0.0 {
            return Err(PaletteError::invalid_input(format!(
                "similarity_threshold must be non-negative, got {}",
                self.similarity_threshold
            )));
        }

        Ok(())
    }
}
