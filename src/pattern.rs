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

//! Pattern constructors.
//!
//! All four are pure: the same arguments always produce the same samples.

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{FixtureError, Result};

/// Single-channel vertical ramp. Row `y` holds `y * 255 / height` (floored).
///
/// Since `y < height` the last row stays below 255; the top value is 254 for
/// any height above 255.
///
/// # Errors
///
/// Fails if either dimension is zero.
#[allow(clippy::cast_possible_truncation)] // y < height, so the quotient is < 255
pub fn gradient(width: u32, height: u32) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::filled(width, height, Channels::Gray, 0)?;
    let stride = buffer.stride();
    for (y, row) in buffer.as_bytes_mut().chunks_exact_mut(stride).enumerate() {
        let value = (y as u64 * 255 / u64::from(height)) as u8;
        row.fill(value);
    }

    #[cfg(feature = "debug-logging")]
    log::debug!("gradient {width}x{height}");

    Ok(buffer)
}

/// Single-channel buffer with every sample equal to `value`.
///
/// With `value = 128` (0b1000_0000) the least-significant bit is 0 everywhere.
///
/// # Errors
///
/// Fails if either dimension is zero.
pub fn flat_value(width: u32, height: u32, value: u8) -> Result<PixelBuffer> {
    #[cfg(feature = "debug-logging")]
    log::debug!("flat {width}x{height} value={value}");

    PixelBuffer::filled(width, height, Channels::Gray, value)
}

/// Single-channel checkerboard with one-pixel cells: 255 where `x + y` is
/// even, 0 where it is odd.
///
/// # Errors
///
/// Fails if either dimension is zero.
pub fn checkerboard(width: u32, height: u32) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::filled(width, height, Channels::Gray, 0)?;
    let stride = buffer.stride();
    for (y, row) in buffer.as_bytes_mut().chunks_exact_mut(stride).enumerate() {
        for (x, sample) in row.iter_mut().enumerate() {
            *sample = if (x + y) % 2 == 0 { 255 } else { 0 };
        }
    }

    #[cfg(feature = "debug-logging")]
    log::debug!("checkerboard {width}x{height}");

    Ok(buffer)
}

/// Fills every pixel with `color`. RGBA buffers take three components and get
/// alpha 255 appended.
///
/// # Errors
///
/// Fails if either dimension is zero, or with [`FixtureError::ColorLength`] if
/// `color` does not have `channels.color_components()` entries.
pub fn solid_color(width: u32, height: u32, channels: Channels, color: &[u8]) -> Result<PixelBuffer> {
    let expected = channels.color_components();
    if color.len() != expected {
        return Err(FixtureError::ColorLength {
            channels: channels.count(),
            expected,
            actual: color.len(),
        });
    }

    let mut pixel = [255u8; 4];
    pixel[..expected].copy_from_slice(color);
    let pixel = &pixel[..usize::from(channels.count())];

    let mut buffer = PixelBuffer::filled(width, height, channels, 0)?;
    for chunk in buffer.as_bytes_mut().chunks_exact_mut(pixel.len()) {
        chunk.copy_from_slice(pixel);
    }

    #[cfg(feature = "debug-logging")]
    log::debug!("solid {width}x{height} {channels:?} color={pixel:?}");

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_rows() {
        for (w, h) in [(1, 1), (7, 3), (16, 255), (5, 256), (512, 512), (3, 1000)] {
            let buf = gradient(w, h).unwrap();
            for y in 0..h {
                let expected = (u64::from(y) * 255 / u64::from(h)) as u8;
                assert!(
                    buf.row(y).unwrap().iter().all(|&v| v == expected),
                    "row {y} of {w}x{h}"
                );
            }
            assert!(!buf.as_bytes().contains(&255), "{w}x{h} reached 255");
        }
    }

    #[test]
    fn test_gradient_monotonic_and_bounded() {
        let buf = gradient(4, 512).unwrap();
        let firsts: Vec<u8> = (0..512).map(|y| buf.row(y).unwrap()[0]).collect();
        assert!(firsts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(firsts[0], 0);
        assert_eq!(*firsts.last().unwrap(), 254);
        // 511 * 255 / 512 = 254.50..., floored
        assert_eq!(firsts[256], 127);
    }

    #[test]
    fn test_flat_128_lsb_clear() {
        let buf = flat_value(100, 100, 128).unwrap();
        assert_eq!(buf.channels(), Channels::Gray);
        assert!(buf.as_bytes().iter().all(|&v| v == 128));
        assert!(buf.as_bytes().iter().all(|&v| v & 1 == 0));
    }

    #[test]
    fn test_checkerboard_parity() {
        let buf = checkerboard(9, 7).unwrap();
        for y in 0..7 {
            for x in 0..9 {
                let expected = if (x + y) % 2 == 0 { 255 } else { 0 };
                assert_eq!(buf.pixel(x, y), Some(&[expected][..]), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_solid_rgb() {
        let buf = solid_color(10, 10, Channels::Rgb, &[64, 128, 192]).unwrap();
        assert_eq!(buf.as_bytes().len(), 300);
        assert!(buf.as_bytes().chunks_exact(3).all(|p| p == [64, 128, 192]));
    }

    #[test]
    fn test_solid_rgba_appends_opaque_alpha() {
        let buf = solid_color(4, 4, Channels::Rgba, &[128, 128, 128]).unwrap();
        assert!(buf.as_bytes().chunks_exact(4).all(|p| p == [128, 128, 128, 255]));
    }

    #[test]
    fn test_solid_color_length_checked() {
        assert!(matches!(
            solid_color(4, 4, Channels::Rgba, &[1, 2, 3, 4]),
            Err(FixtureError::ColorLength {
                channels: 4,
                expected: 3,
                actual: 4
            })
        ));
        assert!(matches!(
            solid_color(4, 4, Channels::Rgb, &[1, 2]),
            Err(FixtureError::ColorLength { .. })
        ));
        assert!(solid_color(2, 2, Channels::Gray, &[9]).is_ok());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(gradient(10, 0), Err(FixtureError::InvalidDimensions { .. })));
        assert!(matches!(flat_value(0, 10, 128), Err(FixtureError::InvalidDimensions { .. })));
        assert!(matches!(checkerboard(0, 0), Err(FixtureError::InvalidDimensions { .. })));
        assert!(matches!(
            solid_color(0, 1, Channels::Rgb, &[0, 0, 0]),
            Err(FixtureError::InvalidDimensions { .. })
        ));
    }
}
