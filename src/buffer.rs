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

//! Owned 8-bit pixel buffers.

use crate::error::{FixtureError, Result};

/// Channel layout of a [`PixelBuffer`]. Every channel is one `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Single luminance channel.
    Gray,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Number of bytes per pixel.
    #[must_use]
    pub fn count(self) -> u8 {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    #[must_use]
    pub fn has_alpha(self) -> bool {
        self == Self::Rgba
    }

    /// Number of color components a caller supplies for a solid fill.
    /// Alpha is not counted; it is always written as 255.
    #[must_use]
    pub fn color_components(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb | Self::Rgba => 3,
        }
    }
}

/// A `width x height` grid of interleaved 8-bit samples, row-major, row 0 on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

/// Byte length of a `width x height` image, rejecting zero and overflowing sizes.
fn byte_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(FixtureError::InvalidDimensions { width, height });
    }
    let too_large = || FixtureError::TooLarge {
        width,
        height,
        channels: channels.count(),
    };
    let w = usize::try_from(width).map_err(|_| too_large())?;
    let h = usize::try_from(height).map_err(|_| too_large())?;
    w.checked_mul(h)
        .and_then(|n| n.checked_mul(usize::from(channels.count())))
        .ok_or_else(too_large)
}

impl PixelBuffer {
    /// Allocates a buffer with every sample set to `fill`.
    ///
    /// # Errors
    ///
    /// Fails before allocating if either dimension is zero or the byte size overflows.
    pub fn filled(width: u32, height: u32, channels: Channels, fill: u8) -> Result<Self> {
        let len = byte_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![fill; len],
        })
    }

    /// Wraps existing interleaved samples.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are invalid or `data` has the wrong length.
    pub fn from_raw(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(FixtureError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Bytes in one row.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * usize::from(self.channels.count())
    }

    /// All samples, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Samples of row `y`, or `None` if out of range.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }

    /// Channel values of pixel `(x, y)`, or `None` if out of range.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width {
            return None;
        }
        let bpp = usize::from(self.channels.count());
        let start = x as usize * bpp;
        self.row(y).map(|row| &row[start..start + bpp])
    }
}
