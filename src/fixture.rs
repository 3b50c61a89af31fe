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

//! Fixture table and the generation driver.
//!
//! A [`FixtureSpec`] names one file: its size, pattern and container. The
//! [`Generator`] builds each buffer, encodes it in memory, then writes it in
//! one call, so a failed encode never leaves a partial file behind.

use std::path::{Path, PathBuf};

use crate::buffer::{Channels, PixelBuffer};
use crate::config::GeneratorConfig;
use crate::error::{FixtureError, Result};
use crate::pattern::{checkerboard, flat_value, gradient, solid_color};
use crate::{get_encoder, ContainerEncoder, ContainerFormat};

/// Mid-gray level with a clear least-significant bit (0b1000_0000).
pub const MID_GRAY: u8 = 128;

/// Pixel content of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Single channel, every sample equal.
    Flat(u8),
    /// Single channel vertical ramp.
    Gradient,
    /// Single channel one-pixel checkerboard.
    Checkerboard,
    /// Every pixel set to `color`; alpha 255 is appended for RGBA. A gray
    /// fill takes only the first component.
    Solid { channels: Channels, color: [u8; 3] },
}

impl Pattern {
    /// Builds a `width x height` buffer with this pattern.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or a color that does not fit `channels`.
    pub fn render(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        match *self {
            Self::Flat(value) => flat_value(width, height, value),
            Self::Gradient => gradient(width, height),
            Self::Checkerboard => checkerboard(width, height),
            Self::Solid { channels, ref color } => {
                let components = channels.color_components().min(color.len());
                solid_color(width, height, channels, &color[..components])
            }
        }
    }
}

/// One fixture file: dimensions, content and container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSpec {
    /// File stem; the extension comes from `format`.
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub pattern: Pattern,
    pub format: ContainerFormat,
}

impl FixtureSpec {
    #[must_use]
    pub const fn new(
        name: &'static str,
        width: u32,
        height: u32,
        pattern: Pattern,
        format: ContainerFormat,
    ) -> Self {
        Self {
            name,
            width,
            height,
            pattern,
            format,
        }
    }

    /// `name.ext`, e.g. `medium_gray.bmp`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }

    /// Builds the pixel buffer for this fixture.
    ///
    /// # Errors
    ///
    /// See [`Pattern::render`].
    pub fn build(&self) -> Result<PixelBuffer> {
        self.pattern.render(self.width, self.height)
    }
}

/// The standard fixture set, in generation order.
///
/// | Name | Size | Pattern | Channels | Format |
/// |---|---|---|---|---|
/// | tiny_gray | 32x32 | flat 128 | 1 | png |
/// | small_gray | 100x100 | flat 128 | 1 | png |
/// | medium_gray | 512x512 | flat 128 | 1 | png, bmp, jpg |
/// | large_gray | 1024x768 | flat 128 | 1 | png |
/// | huge_gray | 2048x2048 | flat 128 | 1 | png |
/// | gradient_gray | 512x512 | gradient | 1 | png |
/// | checkerboard | 256x256 | checkerboard | 1 | png |
/// | medium_rgb | 512x512 | (128,128,128) | 3 | png |
/// | small_rgb | 100x100 | (64,128,192) | 3 | png |
/// | rgba_test | 256x256 | (128,128,128,255) | 4 | png |
#[must_use]
pub fn standard_fixtures() -> Vec<FixtureSpec> {
    use ContainerFormat::{Bmp, Jpeg, Png};

    let gray = Pattern::Flat(MID_GRAY);
    vec![
        FixtureSpec::new("tiny_gray", 32, 32, gray, Png),
        FixtureSpec::new("small_gray", 100, 100, gray, Png),
        FixtureSpec::new("medium_gray", 512, 512, gray, Png),
        FixtureSpec::new("medium_gray", 512, 512, gray, Bmp),
        FixtureSpec::new("medium_gray", 512, 512, gray, Jpeg),
        FixtureSpec::new("large_gray", 1024, 768, gray, Png),
        FixtureSpec::new("huge_gray", 2048, 2048, gray, Png),
        FixtureSpec::new("gradient_gray", 512, 512, Pattern::Gradient, Png),
        FixtureSpec::new("checkerboard", 256, 256, Pattern::Checkerboard, Png),
        FixtureSpec::new(
            "medium_rgb",
            512,
            512,
            Pattern::Solid {
                channels: Channels::Rgb,
                color: [128, 128, 128],
            },
            Png,
        ),
        FixtureSpec::new(
            "small_rgb",
            100,
            100,
            Pattern::Solid {
                channels: Channels::Rgb,
                color: [64, 128, 192],
            },
            Png,
        ),
        FixtureSpec::new(
            "rgba_test",
            256,
            256,
            Pattern::Solid {
                channels: Channels::Rgba,
                color: [128, 128, 128],
            },
            Png,
        ),
    ]
}

/// Writes `buffer` to `path` as `format`.
///
/// # Errors
///
/// [`FixtureError::UnsupportedChannels`] or [`FixtureError::Encoding`] if the
/// buffer cannot be encoded (nothing is written), [`FixtureError::Io`] if the
/// file cannot be created, e.g. because the parent directory is missing.
pub fn serialize(buffer: &PixelBuffer, path: &Path, format: ContainerFormat) -> Result<()> {
    let encoder = get_encoder(format);
    serialize_with(buffer, path, encoder.as_ref()).map(|_| ())
}

/// Writes `buffer` to `path` with an explicit encoder. Returns the file size.
///
/// # Errors
///
/// See [`serialize`].
pub fn serialize_with(
    buffer: &PixelBuffer,
    path: &Path,
    encoder: &dyn ContainerEncoder,
) -> Result<usize> {
    let bytes = encoder.encode(buffer)?;
    std::fs::write(path, &bytes).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "debug-logging")]
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(bytes.len())
}

/// A file produced by the [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFixture {
    pub path: PathBuf,
    /// File size in bytes.
    pub len: usize,
}

/// Builds and writes fixtures into the configured output directory.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds and writes one fixture.
    ///
    /// # Errors
    ///
    /// Any construction, encoding or I/O error for this fixture.
    pub fn generate(&self, spec: &FixtureSpec) -> Result<WrittenFixture> {
        let buffer = spec.build()?;
        let path = self.config.output_path(spec.file_name());
        let encoder = get_encoder(spec.format);
        let len = serialize_with(&buffer, &path, encoder.as_ref())?;
        Ok(WrittenFixture { path, len })
    }

    /// Creates the output directory and its parents if `create_output_dir` is set.
    ///
    /// # Errors
    ///
    /// [`FixtureError::Io`] if the directory cannot be created.
    pub fn prepare_output_dir(&self) -> Result<()> {
        if !self.config.create_output_dir {
            return Ok(());
        }
        std::fs::create_dir_all(&self.config.output_dir).map_err(|source| FixtureError::Io {
            path: self.config.output_dir.clone(),
            source,
        })
    }

    /// Writes every fixture in order, stopping at the first error.
    ///
    /// Calls [`Generator::prepare_output_dir`] first.
    ///
    /// # Errors
    ///
    /// The first error encountered; fixtures after it are not generated.
    pub fn generate_all(&self, specs: &[FixtureSpec]) -> Result<Vec<WrittenFixture>> {
        self.prepare_output_dir()?;

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "generating {} fixtures into {}",
            specs.len(),
            self.config.output_dir.display()
        );

        specs.iter().map(|spec| self.generate(spec)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_table() {
        let specs = standard_fixtures();
        assert_eq!(specs.len(), 12);

        let names: Vec<String> = specs.iter().map(FixtureSpec::file_name).collect();
        assert_eq!(
            names,
            [
                "tiny_gray.png",
                "small_gray.png",
                "medium_gray.png",
                "medium_gray.bmp",
                "medium_gray.jpg",
                "large_gray.png",
                "huge_gray.png",
                "gradient_gray.png",
                "checkerboard.png",
                "medium_rgb.png",
                "small_rgb.png",
                "rgba_test.png",
            ]
        );

        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "file names must be distinct");
    }

    #[test]
    fn test_standard_specs_build() {
        for spec in standard_fixtures() {
            let buffer = spec.build().unwrap();
            assert_eq!(buffer.width(), spec.width, "{}", spec.file_name());
            assert_eq!(buffer.height(), spec.height, "{}", spec.file_name());
            assert!(
                spec.format.supports(buffer.channels()),
                "{} has channels its container cannot store",
                spec.file_name()
            );
        }
    }

    #[test]
    fn test_rgba_spec_renders_opaque_gray() {
        let spec = standard_fixtures()
            .into_iter()
            .find(|s| s.name == "rgba_test")
            .unwrap();
        let buffer = spec.build().unwrap();
        assert_eq!(buffer.channels(), Channels::Rgba);
        assert_eq!(buffer.pixel(17, 200), Some(&[128, 128, 128, 255][..]));
    }

    #[test]
    fn test_gray_solid_uses_first_component() {
        let pattern = Pattern::Solid {
            channels: Channels::Gray,
            color: [42, 0, 0],
        };
        let buffer = pattern.render(3, 3).unwrap();
        assert!(buffer.as_bytes().iter().all(|&v| v == 42));
    }
}
