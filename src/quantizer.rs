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

use crate::swatch::Swatch;
use std::collections::HashMap;

/// Snap every channel to the nearest multiple of `factor`, halves rounding up. Results past 255 are clamped.
///
/// A factor of 0 leaves the color untouched.
pub fn quantize((r, g, b): (u8, u8, u8), factor: u8) -> (u8, u8, u8) {
    if factor == 0 {
        return (r, g, b);
    }

    (
        quantize_channel(r, factor),
        quantize_channel(g, factor),
        quantize_channel(b, factor),
    )
}

fn quantize_channel(channel: u8, factor: u8) -> u8 {
    let (channel, factor) = (channel as u32, factor as u32);
    let snapped = (2 * channel + factor) / (2 * factor) * factor;

    snapped.min(u8::MAX as u32) as u8
}

/// A frequency count of quantized colors that remembers the order colors were first seen in.
#[derive(Debug, Clone)]
pub struct Histogram {
    factor: u8,
    // packed 0xRRGGBB -> index into counts
    index: HashMap<u32, usize>,
    counts: Vec<((u8, u8, u8), u32)>,
}

impl Histogram {
    pub fn new(factor: u8) -> Self {
        Self {
            factor,
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }

    /// Quantize the given color and count it.
    pub fn add(&mut self, rgb: (u8, u8, u8)) {
        let quantized = quantize(rgb, self.factor);

        match self.index.get(&pack(quantized)) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(pack(quantized), self.counts.len());
                self.counts.push((quantized, 1));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total number of colors counted.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// The `count` most frequent colors, most frequent first. Colors with equal frequency keep the order they were
    /// first seen in.
    pub fn most_frequent(&self, count: usize) -> Vec<Swatch> {
        let mut colors = self.counts.clone();
        colors.sort_by(|(_, lhs), (_, rhs)| rhs.cmp(lhs));

        colors
            .into_iter()
            .take(count)
            .map(|(rgb, population)| Swatch::new(rgb, population))
            .collect()
    }
}

impl Extend<(u8, u8, u8)> for Histogram {
    fn extend<T: IntoIterator<Item = (u8, u8, u8)>>(&mut self, iter: T) {
        for rgb in iter {
            self.add(rgb);
        }
    }
}

fn pack((r, g, b): (u8, u8, u8)) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_snap_to_nearest_multiple() {
        assert_eq!(quantize((0, 11, 12), 24), (0, 0, 24));
        assert_eq!(quantize((35, 36, 37), 24), (24, 48, 48));
        assert_eq!(quantize((100, 200, 240), 24), (96, 192, 240));
    }

    #[test]
    fn overflowing_channels_are_clamped() {
        assert_eq!(quantize((255, 252, 251), 24), (255, 255, 240));
        assert_eq!(quantize((253, 0, 0), 24), (255, 0, 0));
    }

    #[test]
    fn quantizing_twice_changes_nothing() {
        for value in 0..=255u8 {
            let once = quantize((value, value, value), 24);
            assert_eq!(quantize(once, 24), once);
        }
    }

    #[test]
    fn histogram_merges_nearby_colors() {
        let mut hist = Histogram::new(24);
        hist.extend([(254, 1, 2), (255, 0, 0), (0, 0, 255)]);

        assert_eq!(hist.len(), 2);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.most_frequent(12)[0], Swatch::new((255, 0, 0), 2));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut hist = Histogram::new(24);
        hist.extend([(0, 0, 240), (240, 0, 0), (240, 0, 0), (0, 0, 240), (0, 240, 0)]);

        let top: Vec<_> = hist.most_frequent(12).iter().map(|swatch| swatch.rgb()).collect();

        assert_eq!(top, vec![(0, 0, 240), (240, 0, 0), (0, 240, 0)]);
    }

    #[test]
    fn most_frequent_truncates() {
        let mut hist = Histogram::new(24);
        hist.extend((0..10u8).map(|i| (i * 24, 0, 0)));

        assert_eq!(hist.most_frequent(4).len(), 4);
        assert!(Histogram::new(24).most_frequent(4).is_empty());
    }
}
