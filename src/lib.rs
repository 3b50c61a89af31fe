// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deterministic synthetic raster fixtures.
//!
//! This crate builds pixel buffers with exactly known content and writes them
//! to PNG, BMP and JPEG files. The fixtures feed least-significant-bit (LSB)
//! and bit-plane tests, so every buffer is reproducible bit for bit and the
//! lossless containers are reproducible byte for byte.
//!
//! # Patterns
//!
//! | Constructor | Channels | Content |
//! |---|---|---|
//! | [`gradient`] | 1 | row `y` = `y * 255 / height`, never 255 |
//! | [`flat_value`] | 1 | every sample equal |
//! | [`checkerboard`] | 1 | 255 where `x + y` is even, else 0 |
//! | [`solid_color`] | 1, 3, 4 | every pixel equal, alpha forced to 255 |
//!
//! # Containers
//!
//! | Format | Lossless | Channels |
//! |---|---|---|
//! | PNG | yes | 1, 3, 4 |
//! | BMP | yes | 1 (palette), 3, 4 |
//! | JPEG | no | 1, 3 |
//!
//! # Example
//!
//! ```no_run
//! use raster_fixtures::{flat_value, serialize, ContainerFormat};
//! use std::path::Path;
//!
//! let buffer = flat_value(32, 32, 128)?;
//! serialize(&buffer, Path::new("tiny_gray.png"), ContainerFormat::Png)?;
//! # Ok::<(), raster_fixtures::FixtureError>(())
//! ```

use std::fmt;

pub mod bmp;
pub mod buffer;
pub mod config;
pub mod error;
pub mod fixture;
pub mod jpeg;
pub mod pattern;
pub mod png_encoding;

pub use buffer::{Channels, PixelBuffer};
pub use config::GeneratorConfig;
pub use error::{FixtureError, Result};
pub use fixture::{
    serialize, serialize_with, standard_fixtures, FixtureSpec, Generator, Pattern, WrittenFixture,
};
pub use pattern::{checkerboard, flat_value, gradient, solid_color};

/// Container format a fixture is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// Lossless raster (PNG).
    Png,
    /// Uncompressed bitmap (BMP).
    Bmp,
    /// Lossy raster (JPEG).
    Jpeg,
}

impl ContainerFormat {
    /// Returns true if decoding recovers the exact samples that were encoded.
    #[must_use]
    pub fn is_lossless(self) -> bool {
        matches!(self, Self::Png | Self::Bmp)
    }

    /// File extension used for fixtures in this format, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
        }
    }

    /// Whether this container can store a buffer with `channels` channels.
    ///
    /// Baseline JPEG has no alpha plane, so RGBA buffers are refused rather
    /// than silently flattened.
    #[must_use]
    pub fn supports(self, channels: Channels) -> bool {
        match self {
            Self::Png | Self::Bmp => true,
            Self::Jpeg => !channels.has_alpha(),
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Bmp => "BMP",
            Self::Jpeg => "JPEG",
        };
        f.write_str(name)
    }
}

/// A container encoder turns a [`PixelBuffer`] into the bytes of one file.
pub trait ContainerEncoder {
    /// The container this encoder produces.
    fn format(&self) -> ContainerFormat;

    /// Encodes the whole buffer in memory.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnsupportedChannels`] if the container cannot
    /// hold the buffer's channel layout, or [`FixtureError::Encoding`] if the
    /// codec fails.
    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>>;
}

/// Returns the encoder for `format`. Codec settings are fixed per format.
#[must_use]
pub fn get_encoder(format: ContainerFormat) -> Box<dyn ContainerEncoder> {
    match format {
        ContainerFormat::Png => Box::new(png_encoding::PngEncoding),
        ContainerFormat::Bmp => Box::new(bmp::BmpEncoding),
        ContainerFormat::Jpeg => Box::new(jpeg::JpegEncoding),
    }
}

/// Fails with [`FixtureError::UnsupportedChannels`] if `format` cannot hold `buffer`.
pub(crate) fn check_channels(format: ContainerFormat, buffer: &PixelBuffer) -> Result<()> {
    if format.supports(buffer.channels()) {
        Ok(())
    } else {
        Err(FixtureError::UnsupportedChannels {
            format,
            channels: buffer.channels().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_capabilities() {
        assert!(ContainerFormat::Png.is_lossless());
        assert!(ContainerFormat::Bmp.is_lossless());
        assert!(!ContainerFormat::Jpeg.is_lossless());

        for channels in [Channels::Gray, Channels::Rgb, Channels::Rgba] {
            assert!(ContainerFormat::Png.supports(channels));
            assert!(ContainerFormat::Bmp.supports(channels));
        }
        assert!(ContainerFormat::Jpeg.supports(Channels::Gray));
        assert!(ContainerFormat::Jpeg.supports(Channels::Rgb));
        assert!(!ContainerFormat::Jpeg.supports(Channels::Rgba));
    }

    #[test]
    fn test_get_encoder_matches_format() {
        for format in [ContainerFormat::Png, ContainerFormat::Bmp, ContainerFormat::Jpeg] {
            assert_eq!(get_encoder(format).format(), format);
        }
    }
}
