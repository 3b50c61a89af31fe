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

//! Error taxonomy for fixture generation.
//!
//! Every failure is deterministic: retrying the same call fails the same way,
//! so callers should abort instead of retrying.

use std::path::PathBuf;
use thiserror::Error;

use crate::ContainerFormat;

/// Errors produced while building or writing a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Width or height is zero.
    #[error("invalid dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The sample count does not fit in memory addressing.
    #[error("image {width}x{height} with {channels} channels is too large")]
    TooLarge {
        width: u32,
        height: u32,
        channels: u8,
    },

    /// Raw pixel data does not match `width * height * channels`.
    #[error("pixel data is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// A solid color has the wrong number of components for its channel layout.
    #[error("{channels}-channel solid color needs {expected} components, got {actual}")]
    ColorLength {
        channels: u8,
        expected: usize,
        actual: usize,
    },

    /// The container cannot store this channel layout.
    #[error("{format} cannot store {channels}-channel images")]
    UnsupportedChannels { format: ContainerFormat, channels: u8 },

    /// The codec rejected the image.
    #[error("{format} encoding failed: {message}")]
    Encoding {
        format: ContainerFormat,
        message: String,
    },

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixtureError {
    pub(crate) fn encoding(format: ContainerFormat, err: impl std::fmt::Display) -> Self {
        Self::Encoding {
            format,
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;
