//! Test Fixture Generator
//!
//! Generates the deterministic raster images used as inputs for LSB and
//! bit-plane tests. Pixel content is identical on every platform (no
//! randomness, no timestamps), and the PNG and BMP files are byte-identical
//! between runs.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixture
//! ```
//!
//! # Generated Files
//!
//! - `tests/fixtures/{tiny,small,medium,large,huge}_gray.png`
//!   - flat 128, whose least-significant bit is 0 in every sample
//!   - sizes 32x32, 100x100, 512x512, 1024x768, 2048x2048
//!
//! - `tests/fixtures/medium_gray.bmp`, `tests/fixtures/medium_gray.jpg`
//!   - the 512x512 flat image in the bitmap and lossy containers
//!
//! - `tests/fixtures/gradient_gray.png` (512x512 vertical ramp, 0..=254)
//! - `tests/fixtures/checkerboard.png` (256x256, 255 where x + y is even)
//!
//! - `tests/fixtures/medium_rgb.png`, `small_rgb.png`, `rgba_test.png`
//!   - solid (128,128,128), (64,128,192) and (128,128,128,255)

use std::path::PathBuf;
use std::process::ExitCode;

use raster_fixtures::config::DEFAULT_OUTPUT_DIR;
use raster_fixtures::{standard_fixtures, Generator, GeneratorConfig};

fn main() -> ExitCode {
    // Next to the crate regardless of the working directory
    let output_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT_DIR);
    let config = GeneratorConfig::new(output_dir);

    println!("Generating test fixtures...");

    let generator = Generator::new(config);
    if let Err(e) = generator.prepare_output_dir() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    for spec in standard_fixtures() {
        match generator.generate(&spec) {
            Ok(fixture) => {
                println!("Created {} ({} bytes)", fixture.path.display(), fixture.len);
            }
            Err(e) => {
                eprintln!("Failed to generate {}: {e}", spec.file_name());
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Done");
    ExitCode::SUCCESS
}
