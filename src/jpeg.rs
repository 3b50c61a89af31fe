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

//! JPEG container for the lossy fixture.
//!
//! Encoding goes through the `image` crate's baseline encoder. Decoded
//! samples only approximate the input. RGBA buffers are rejected, not
//! flattened.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{FixtureError, Result};
use crate::{ContainerEncoder, ContainerFormat};

/// Quality for every JPEG fixture, the common library default.
pub const JPEG_QUALITY: u8 = 75;

/// Encodes buffers as baseline JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegEncoding;

impl ContainerEncoder for JpegEncoding {
    fn format(&self) -> ContainerFormat {
        ContainerFormat::Jpeg
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        crate::check_channels(ContainerFormat::Jpeg, buffer)?;
        let color = match buffer.channels() {
            Channels::Gray => ExtendedColorType::L8,
            Channels::Rgb => ExtendedColorType::Rgb8,
            Channels::Rgba => ExtendedColorType::Rgba8,
        };

        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
            .write_image(buffer.as_bytes(), buffer.width(), buffer.height(), color)
            .map_err(|e| FixtureError::encoding(ContainerFormat::Jpeg, e))?;

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "JPEG {}x{} q={}: {} bytes",
            buffer.width(),
            buffer.height(),
            JPEG_QUALITY,
            out.len()
        );

        Ok(out)
    }
}
