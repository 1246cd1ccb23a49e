//! exif-peek - Inspect the EXIF metadata of a JPEG file.
//!
//! This binary reads the head of a JPEG file and prints its decoded
//! EXIF tags.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exif_peek::{get_exif, Config, ExifData, ExifValue};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let data = match read_head(&config.file, config.max_bytes) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read {}: {}", config.file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    debug!(bytes = data.len(), "read file head");

    match get_exif(&data) {
        Ok(Some(exif)) => {
            if config.json {
                print_json(&exif)
            } else {
                print_text(&exif);
                ExitCode::SUCCESS
            }
        }
        Ok(None) => {
            println!("no EXIF segment found");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to parse {}: {}", config.file.display(), e);
            ExitCode::FAILURE
        }
    }
}

/// Read up to `max_bytes` from the head of the file.
fn read_head(path: &Path, max_bytes: usize) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut data = Vec::with_capacity(max_bytes.min(1024 * 1024));
    file.take(max_bytes as u64).read_to_end(&mut data)?;
    Ok(data)
}

/// Print tags as aligned `name: value` lines, sorted by name.
fn print_text(exif: &ExifData) {
    let mut tags: Vec<(&str, &ExifValue)> = exif.iter().collect();
    tags.sort_by_key(|(name, _)| *name);

    let width = tags.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in tags {
        println!("{name:width$}  {value}");
    }
}

/// Print tags as pretty JSON.
fn print_json(exif: &ExifData) -> ExitCode {
    match serde_json::to_string_pretty(exif) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exif_peek=debug"
    } else {
        "exif_peek=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
