//! scanfill-test - Regression test framework for scanfill
//!
//! This crate provides a golden-file regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use scanfill_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("seedfill");
//! rp.compare_values(25.0, filled as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use scanfill_core::BitImage;

/// Build a test image from ASCII rows (`#`/`1` ON, `.`/`0` OFF).
///
/// # Panics
///
/// Panics if the rows do not describe a valid image; fixtures are
/// compile-time constants, so a bad one is a bug in the test.
pub fn fixture(rows: &[&str]) -> BitImage {
    match parse_fixture("inline", rows) {
        Ok(pix) => pix,
        Err(e) => panic!("{}", e),
    }
}

/// Build a test image from ASCII rows, reporting parse failures.
pub fn parse_fixture(name: &str, rows: &[&str]) -> TestResult<BitImage> {
    BitImage::from_ascii(rows).map_err(|e| TestError::FixtureParse {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // scanfill-test is at crates/scanfill-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", workspace_root(), name)
}

/// Load an ASCII test image from the test data directory
pub fn load_test_image(name: &str) -> TestResult<BitImage> {
    let path = test_data_path(name);
    let file = std::fs::File::open(&path)?;
    BitImage::read_ascii(file).map_err(|e| TestError::FixtureParse {
        name: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
