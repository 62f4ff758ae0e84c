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

use crate::{PaletteError, Result};
use image::Rgba;

const CHANNELS: usize = 4;

/// Walks an RGBA buffer at a fixed pixel stride, yielding only the pixels that are mostly opaque.
///
/// The stride is picked so roughly `max_samples` pixels are visited no matter how large the buffer is. Pixels whose
/// alpha is below the threshold are visited but not yielded.
#[derive(Debug, Clone)]
pub struct PixelSampler<'a> {
    data: &'a [u8],
    stride: usize,
    alpha_threshold: u8,
    next: usize,
}

impl<'a> PixelSampler<'a> {
    /// Create a sampler over a `width` x `height` RGBA buffer. The buffer must hold exactly four bytes per pixel.
    pub fn new(data: &'a [u8], width: u32, height: u32, max_samples: usize, alpha_threshold: u8) -> Result<Self> {
        let pixel_count = checked_pixel_count(data, width, height)?;

        if max_samples == 0 {
            return Err(PaletteError::invalid_input("the sample limit must be at least 1"));
        }

        Ok(Self {
            data,
            stride: sample_stride(pixel_count, max_samples),
            alpha_threshold,
            next: 0,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl Iterator for PixelSampler<'_> {
    type Item = Rgba<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(chunk) = self.data.get(self.next..self.next + CHANNELS) {
            self.next += self.stride * CHANNELS;

            if chunk[3] >= self.alpha_threshold {
                return Some(Rgba([chunk[0], chunk[1], chunk[2], chunk[3]]));
            }
        }

        None
    }
}

/// The number of pixels to step over between samples so that at most about `max_samples` pixels are visited.
pub fn sample_stride(pixel_count: usize, max_samples: usize) -> usize {
    (pixel_count / max_samples.max(1)).max(1)
}

fn checked_pixel_count(data: &[u8], width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PaletteError::invalid_input(format!(
            "image dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PaletteError::invalid_input("image dimensions overflow"))?;

    match pixel_count.checked_mul(CHANNELS) {
        Some(expected) if expected == data.len() => Ok(pixel_count),
        Some(expected) => Err(PaletteError::invalid_input(format!(
            "expected {} bytes for a {}x{} RGBA buffer, got {}",
            expected,
            width,
            height,
            data.len()
        ))),
        None => Err(PaletteError::invalid_input("image dimensions overflow")),
    }
}
