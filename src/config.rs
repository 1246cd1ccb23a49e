//! Configuration management for exif-peek.
//!
//! This module provides the CLI configuration for the inspection tool:
//! - Command-line arguments via clap
//! - Environment variables with `EXIF_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Example
//!
//! ```ignore
//! use exif_peek::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! println!("Inspecting {}", config.file.display());
//! ```
//!
//! # Environment Variables
//!
//! - `EXIF_MAX_BYTES` - Bytes to read from the head of the file
//!   (default: 131072)

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default number of bytes read from the head of the input file.
///
/// EXIF data lives in the first APP1 segment, so the leading 128KB is
/// enough for virtually every camera file.
pub const DEFAULT_MAX_BYTES: usize = 128 * 1024;

// =============================================================================
// CLI Arguments
// =============================================================================

/// exif-peek - Inspect the EXIF metadata of a JPEG file.
///
/// Reads the leading bytes of a JPEG file, locates the APP1 EXIF
/// segment and prints the decoded tags.
#[derive(Parser, Debug, Clone)]
#[command(name = "exif-peek")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the JPEG file to inspect.
    pub file: PathBuf,

    /// Print the decoded tags as pretty JSON instead of aligned text.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Maximum number of bytes to read from the head of the file.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES, env = "EXIF_MAX_BYTES")]
    pub max_bytes: usize,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        // A buffer shorter than SOI + APP1 marker + signature can
        // never hold an EXIF segment.
        if self.max_bytes < 16 {
            return Err("max_bytes must be at least 16".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
