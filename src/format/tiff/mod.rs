//! TIFF structure parsing for embedded EXIF data.
//!
//! EXIF metadata is a classic TIFF structure nested inside the JPEG
//! APP1 payload (or at offset 0 of a bare TIFF stream).
//!
//! # Key Concepts
//!
//! - **Byte order**: declared in the header (II = little-endian,
//!   MM = big-endian) and honored by every multi-byte read.
//!
//! - **IFD (Image File Directory)**: a counted list of fixed-size
//!   tag/value entries; the primary IFD can point at Exif and GPS
//!   sub-directories.
//!
//! - **Inline vs offset values**: small values live inside the entry's
//!   own 4-byte field, larger ones behind an offset relative to the
//!   TIFF start.

mod directory;
mod parser;
mod tags;
mod values;

pub use directory::{read_directory, IfdEntry, IFD_ENTRY_SIZE};
pub use parser::{ByteOrder, TiffHeader, TIFF_HEADER_SIZE};
pub use tags::{FieldType, TagTable, EXIF_TAGS, GPS_TAGS, TIFF_TAGS};
pub use values::{decode_value, ExifValue, Rational, SRational};
