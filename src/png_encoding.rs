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

//! PNG container for the lossless fixtures.
//!
//! Output is `IHDR`, `IDAT` and `IEND` only: no timestamps, gamma or text
//! chunks, so encoding the same buffer twice yields identical files.

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{FixtureError, Result};
use crate::{ContainerEncoder, ContainerFormat};

/// Deflate effort for every PNG fixture.
pub const PNG_COMPRESSION: png::Compression = png::Compression::Default;

fn color_type(channels: Channels) -> png::ColorType {
    match channels {
        Channels::Gray => png::ColorType::Grayscale,
        Channels::Rgb => png::ColorType::Rgb,
        Channels::Rgba => png::ColorType::Rgba,
    }
}

/// Encodes buffers as 8-bit PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoding;

impl ContainerEncoder for PngEncoding {
    fn format(&self) -> ContainerFormat {
        ContainerFormat::Png
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        crate::check_channels(ContainerFormat::Png, buffer)?;
        let err = |e: png::EncodingError| FixtureError::encoding(ContainerFormat::Png, e);

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(color_type(buffer.channels()));
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(PNG_COMPRESSION);

        let mut writer = encoder.write_header().map_err(err)?;
        writer.write_image_data(buffer.as_bytes()).map_err(err)?;
        writer.finish().map_err(err)?;

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "PNG {}x{} {:?}: {} bytes",
            buffer.width(),
            buffer.height(),
            buffer.channels(),
            out.len()
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{checkerboard, solid_color};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_header_fields() {
        let buf = solid_color(5, 3, Channels::Rgba, &[1, 2, 3]).unwrap();
        let bytes = PngEncoding.encode(&buf).unwrap();

        assert_eq!(bytes[..8], PNG_SIGNATURE);
        assert_eq!(&bytes[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]), 5);
        assert_eq!(u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]), 3);
        assert_eq!(bytes[24], 8); // bit depth
        assert_eq!(bytes[25], 6); // color type RGBA
    }

    #[test]
    fn test_png_is_deterministic() {
        let buf = checkerboard(64, 64).unwrap();
        assert_eq!(PngEncoding.encode(&buf).unwrap(), PngEncoding.encode(&buf).unwrap());
    }

    #[test]
    fn test_png_has_no_ancillary_chunks() {
        let buf = checkerboard(16, 16).unwrap();
        let bytes = PngEncoding.encode(&buf).unwrap();

        let mut pos = 8;
        let mut kinds = Vec::new();
        while pos + 8 <= bytes.len() {
            let len = u32::from_be_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]) as usize;
            kinds.push(String::from_utf8_lossy(&bytes[pos + 4..pos + 8]).into_owned());
            pos += 12 + len;
        }
        assert_eq!(kinds.first().map(String::as_str), Some("IHDR"));
        assert_eq!(kinds.last().map(String::as_str), Some("IEND"));
        assert!(kinds.iter().all(|k| k == "IHDR" || k == "IDAT" || k == "IEND"));
    }
}
