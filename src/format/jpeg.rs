//! JPEG marker segment scanning.
//!
//! A JPEG file is a sequence of marker segments, each introduced by a
//! 0xFF prefix byte followed by a marker type byte. Most segments carry
//! a big-endian 16-bit length (which includes the length field itself)
//! immediately after the marker type.
//!
//! EXIF data lives in the APP1 segment (marker 0xFFE1), whose payload
//! starts with the ASCII signature `Exif\0\0` followed by an embedded
//! TIFF structure. This module locates that segment; decoding it is the
//! job of [`crate::exif`].

use tracing::debug;

use crate::error::ExifError;
use crate::io::{read_u16_be, ByteView};

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// Marker type byte for APP1 (EXIF) segments
pub const APP1: u8 = 0xE1;

/// Bytes between the APP1 marker prefix and its payload
/// (2 marker bytes + 2 length bytes).
pub const APP1_HEADER_LEN: usize = 4;

// =============================================================================
// Segment Scanner
// =============================================================================

/// Locate the APP1 (EXIF) segment in a JPEG buffer.
///
/// Walks the marker segments from offset 2 until an APP1 marker is
/// found or the buffer is exhausted.
///
/// # Returns
/// * `Ok(Some(offset))` - offset of the APP1 marker's 0xFF prefix. The
///   payload (the `Exif\0\0` signature) starts [`APP1_HEADER_LEN`]
///   bytes later.
/// * `Ok(None)` - well-formed JPEG with no APP1 segment.
/// * `Err(ExifError::NotAJpeg)` - buffer does not start with SOI.
/// * `Err(ExifError::MalformedMarker)` - a segment boundary does not
///   carry the 0xFF prefix; the structure is corrupt.
/// * `Err(ExifError::OutOfBounds)` - a marker or length field is
///   truncated.
pub fn find_exif(data: &[u8]) -> Result<Option<usize>, ExifError> {
    let view = ByteView::new(data);

    if data.len() < 2 || data[0..2] != SOI {
        return Err(ExifError::NotAJpeg);
    }

    let mut offset = 2;
    while offset < view.len() {
        let prefix = view.u8_at(offset)?;
        if prefix != 0xFF {
            return Err(ExifError::MalformedMarker {
                offset,
                byte: prefix,
            });
        }

        let marker = view.u8_at(offset + 1)?;
        if marker == APP1 {
            debug!(offset, "found APP1 marker");
            return Ok(Some(offset));
        }

        // Skip this segment: 2 marker bytes plus the payload length
        // (the length field counts itself).
        let length = read_u16_be(view.bytes_at(offset + 2, 2)?) as usize;
        offset += 2 + length;
    }

    Ok(None)
}

// =============================================================================
// Tests
// =============================================================================
