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

//! Tracks the single extraction a caller may have in flight.
//!
//! Decoding an image is the only slow, asynchronous step, and it happens outside this crate. A caller first asks the
//! session for an [`ExtractionRequest`], goes off to decode the image, and then hands the decoded pixels (or the
//! decoding error) back together with the request. While a request is outstanding any new one is rejected with
//! [`PaletteError::Busy`]. Resetting the session abandons the outstanding request, and completing an abandoned
//! request yields [`PaletteError::Superseded`] without running the pipeline.

use crate::{ExtractionConfig, Palette, PaletteBuilder, PaletteError, Result};
use image::RgbaImage;
use log::{debug, warn};

/// A token for an extraction that has been started on an [`ExtractionSession`].
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractionRequest {
    id: u64,
}

impl ExtractionRequest {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct ExtractionSession {
    config: ExtractionConfig,
    next_id: u64,
    in_flight: Option<u64>,
}

impl ExtractionSession {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            next_id: 0,
            in_flight: None,
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a new extraction, or fail with [`PaletteError::Busy`] if one is already in flight.
    pub fn begin(&mut self) -> Result<ExtractionRequest> {
        if let Some(id) = self.in_flight {
            warn!("rejecting new extraction while request {} is in flight", id);
            return Err(PaletteError::Busy);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight = Some(id);

        debug!("started extraction request {}", id);
        Ok(ExtractionRequest { id })
    }

    /// Finish an extraction with the outcome of acquiring its pixels.
    ///
    /// A failed acquisition is reported as [`PaletteError::ImageLoad`]. Either way the session is free for a new
    /// request afterwards, unless the given request had already been abandoned, in which case the current one is left
    /// untouched.
    pub fn complete<E>(&mut self, request: ExtractionRequest, acquired: std::result::Result<RgbaImage, E>) -> Result<Palette>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        if self.in_flight != Some(request.id) {
            warn!("discarding result of abandoned request {}", request.id);
            return Err(PaletteError::Superseded);
        }

        self.in_flight = None;

        let image = acquired.map_err(|e| PaletteError::image_load("could not acquire pixel data", e))?;
        PaletteBuilder::from_image(image).config(self.config).generate()
    }

    /// Abandon the given request. Does nothing if it is no longer the one in flight.
    pub fn cancel(&mut self, request: ExtractionRequest) {
        if self.in_flight == Some(request.id) {
            debug!("cancelled extraction request {}", request.id);
            self.in_flight = None;
        }
    }

    /// Abandon whatever request is in flight.
    pub fn reset(&mut self) {
        if let Some(id) = self.in_flight.take() {
            debug!("abandoned extraction request {}", id);
        }
    }
}
