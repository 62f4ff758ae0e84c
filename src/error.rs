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

use thiserror::Error;

/// Result type alias for palette extraction.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Errors returned while extracting a palette.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// The caller handed in a buffer, dimensions or configuration that violate the extraction contract.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Every sampled pixel was transparent, so there is no color to report.
    #[error("no opaque pixels were sampled from the image")]
    EmptyInput,

    /// The pixel data could not be acquired from its source.
    #[error("failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Another extraction is already in flight on the same session.
    #[error("an extraction is already in progress")]
    Busy,

    /// The request was abandoned before its pixels arrived.
    #[error("the extraction request was superseded")]
    Superseded,
}

impl PaletteError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    /// Create an image load error wrapping the error reported by the pixel source.
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether picking another image (or waiting for the current one) could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::EmptyInput | PaletteError::ImageLoad { .. } | PaletteError::Busy
        )
    }

    /// A message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::EmptyInput => "The image is fully transparent, there are no colors to extract.".to_string(),
            PaletteError::ImageLoad { .. } => "Error processing image. Please try again.".to_string(),
            PaletteError::Busy => "An image is already being analyzed.".to_string(),
            _ => "Error analyzing image. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_reported_as_transparent() {
        let err = PaletteError::EmptyInput;

        assert!(err.is_recoverable());
        assert!(err.user_message().contains("transparent"));
    }

    #[test]
    fn image_load_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PaletteError::image_load("reading upload", io);

        assert_eq!(err.to_string(), "failed to load image: reading upload");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_input_is_not_recoverable() {
        assert!(!PaletteError::invalid_input("width is zero").is_recoverable());
    }
}
