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

//! Windows BMP container.
//!
//! Encoding goes through the `image` crate's uncompressed BMP writer. Rows are
//! stored bottom-up and padded to 4 bytes, so decoding recovers the samples
//! exactly.
//!
//! | Channels | Stored as |
//! |---|---|
//! | 1 | 8 bpp, 256-entry gray palette |
//! | 3 | 24 bpp BGR |
//! | 4 | 32 bpp BGRA |

use image::codecs::bmp::BmpEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{FixtureError, Result};
use crate::{ContainerEncoder, ContainerFormat};

/// Encodes buffers as uncompressed BMP.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpEncoding;

impl ContainerEncoder for BmpEncoding {
    fn format(&self) -> ContainerFormat {
        ContainerFormat::Bmp
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        crate::check_channels(ContainerFormat::Bmp, buffer)?;
        let color = match buffer.channels() {
            Channels::Gray => ExtendedColorType::L8,
            Channels::Rgb => ExtendedColorType::Rgb8,
            Channels::Rgba => ExtendedColorType::Rgba8,
        };

        let mut out = Vec::new();
        BmpEncoder::new(&mut out)
            .write_image(buffer.as_bytes(), buffer.width(), buffer.height(), color)
            .map_err(|e| FixtureError::encoding(ContainerFormat::Bmp, e))?;

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "BMP {}x{} {:?}: {} bytes",
            buffer.width(),
            buffer.height(),
            buffer.channels(),
            out.len()
        );

        Ok(out)
    }
}
