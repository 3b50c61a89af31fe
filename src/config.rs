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

//! Generator configuration.
//!
//! Only fixture placement is configurable. Pixel content and codec settings
//! are fixed constants, so the same table always yields the same files.

use std::path::{Path, PathBuf};

/// Default output directory, relative to the crate root.
pub const DEFAULT_OUTPUT_DIR: &str = "tests/fixtures";

/// Settings shared by every fixture in one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory fixture files are written into.
    pub output_dir: PathBuf,
    /// Create `output_dir` (and parents) before a full run.
    pub create_output_dir: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            create_output_dir: true,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_create_output_dir(mut self, create: bool) -> Self {
        self.create_output_dir = create;
        self
    }

    /// Full path of `file_name` inside the output directory.
    #[must_use]
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
