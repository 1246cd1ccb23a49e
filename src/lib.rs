//! # exif-peek
//!
//! An EXIF metadata extractor for JPEG files.
//!
//! This library locates the APP1 EXIF segment inside a JPEG byte
//! buffer, parses the embedded TIFF structure in either byte order and
//! decodes the primary, Exif and GPS directories into named values.
//! It works on a plain `&[u8]`, so callers decide how much of a file
//! to read; the leading 128KB is enough for camera output.
//!
//! ## Features
//!
//! - **Slice-based parsing**: no I/O, no allocation beyond the decoded
//!   values themselves
//! - **Both byte orders**: II (little-endian) and MM (big-endian) TIFF
//!   payloads
//! - **Named tags**: primary, Exif and GPS directories decoded against
//!   the standard tag tables
//! - **Semantic values**: enum-coded tags (Flash, MeteringMode, ...)
//!   reported as label strings, rationals with their computed ratio
//! - **Fail-safe on malformed input**: every read is bounds-checked
//!   and surfaces as an error instead of a panic
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`io`] - bounds-checked byte buffer access
//! - [`mod@format`] - file sniffing, JPEG segment walking, TIFF parsing
//! - [`exif`] - extraction orchestration and value post-processing
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust
//! use exif_peek::get_exif;
//!
//! let data = std::fs::read("photo.jpg").unwrap_or_default();
//! match get_exif(&data) {
//!     Ok(Some(exif)) => {
//!         if let Some(value) = exif.get("DateTime") {
//!             println!("taken at {value}");
//!         }
//!     }
//!     Ok(None) => println!("no EXIF segment"),
//!     Err(e) => eprintln!("unreadable: {e}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod exif;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use config::Config;
pub use error::ExifError;
pub use exif::{
    component_label, enum_label, get_exif, read_exif_data, ExifData, EXIF_SIGNATURE,
};
pub use format::tiff::{
    decode_value, read_directory, ByteOrder, ExifValue, FieldType, IfdEntry, Rational, SRational,
    TagTable, TiffHeader, EXIF_TAGS, GPS_TAGS, IFD_ENTRY_SIZE, TIFF_HEADER_SIZE, TIFF_TAGS,
};
pub use format::{detect_file_kind, find_exif, is_valid_file_type, FileKind};
pub use io::ByteView;
