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

use crate::{color::color_distance, swatch::Swatch};
use log::trace;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 30.0;

/// Drop colors that are too close to a color that was already kept.
///
/// The first swatch is always kept. Every following swatch, in the given order, is kept only if its RGB distance to
/// each kept swatch is at least `threshold`. This is a greedy pass: the result depends on the input order and is not
/// the largest possible set of distinct colors.
pub fn filter_similar_colors(swatches: &[Swatch], threshold: f64) -> Vec<Swatch> {
    let mut kept: Vec<Swatch> = Vec::with_capacity(swatches.len());

    for candidate in swatches.iter().copied() {
        let similar = kept
            .iter()
            .find(|existing| color_distance(existing.rgb(), candidate.rgb()) < threshold);

        match similar {
            Some(existing) => trace!("dropping {} as too close to {}", candidate.hex(), existing.hex()),
            None => kept.push(candidate),
        }
    }

    kept
}
