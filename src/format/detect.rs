//! File type sniffing for EXIF extraction.
//!
//! This module classifies a buffer by its leading signature bytes.
//! Two families are recognized:
//!
//! - **JPEG**: starts with the SOI marker (0xFF 0xD8); EXIF data lives
//!   inside an APP1 marker segment.
//! - **Bare TIFF**: starts with a byte order mark (II or MM); the TIFF
//!   directory structure starts at offset 0 with no JPEG container.
//!
//! Anything else is rejected. Short buffers classify as unrecognized,
//! never as a panic.

use crate::format::jpeg::SOI;

// =============================================================================
// FileKind
// =============================================================================

/// Recognized input signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// JPEG file (SOI marker at start)
    Jpeg,

    /// Bare TIFF stream, little-endian ("II" byte order mark)
    TiffLittleEndian,

    /// Bare TIFF stream, big-endian ("MM" byte order mark)
    TiffBigEndian,
}

impl FileKind {
    /// Get a human-readable name for the signature.
    pub const fn name(&self) -> &'static str {
        match self {
            FileKind::Jpeg => "JPEG",
            FileKind::TiffLittleEndian => "TIFF (little-endian)",
            FileKind::TiffBigEndian => "TIFF (big-endian)",
        }
    }
}

// =============================================================================
// Signature Detection
// =============================================================================

/// Classify a buffer by its signature bytes.
///
/// Returns `None` for unrecognized signatures and for buffers shorter
/// than two bytes.
///
/// The JPEG check requires both SOI bytes to match; a buffer whose
/// second byte happens to be 0xD8 does not classify as JPEG.
pub fn detect_file_kind(data: &[u8]) -> Option<FileKind> {
    if data.len() < 2 {
        return None;
    }

    if data[0..2] == SOI {
        return Some(FileKind::Jpeg);
    }

    // Bare TIFF: the byte order mark doubles as the signature.
    // Both bytes of each mark are identical, so endianness of this
    // read does not matter.
    match u16::from_be_bytes([data[0], data[1]]) {
        0x4949 => Some(FileKind::TiffLittleEndian),
        0x4D4D => Some(FileKind::TiffBigEndian),
        _ => None,
    }
}

/// Check whether a buffer carries a signature this crate can decode.
#[inline]
pub fn is_valid_file_type(data: &[u8]) -> bool {
    detect_file_kind(data).is_some()
}

// =============================================================================
// Tests
// =============================================================================
