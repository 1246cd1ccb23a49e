//! TIFF header parsing and byte order handling.
//!
//! EXIF embeds a classic TIFF structure inside the JPEG APP1 payload.
//! The TIFF header is 8 bytes:
//!
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Magic number (42 = 0x002A)
//! Bytes 4-7: Offset to the first IFD, relative to the TIFF start
//! ```
//!
//! The byte order declared here governs every multi-byte read for the
//! rest of the decode. All offsets stored in the structure are relative
//! to the TIFF start, not the enclosing buffer.

use crate::error::ExifError;
use crate::io::{
    read_i32_be, read_i32_le, read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteView,
};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// TIFF magic number
const TIFF_MAGIC: u16 = 0x002A;

/// Size of the TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of the embedded TIFF structure.
///
/// Determined once from the header and threaded through every
/// subsequent multi-byte read of the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Read an i32 from a byte slice using this byte order.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        match self {
            ByteOrder::LittleEndian => read_i32_le(bytes),
            ByteOrder::BigEndian => read_i32_be(bytes),
        }
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Validated TIFF header of an embedded EXIF structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the structure
    pub byte_order: ByteOrder,

    /// Offset to the first IFD, relative to the TIFF start
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parse and validate a TIFF header at `tiff_start` inside `view`.
    ///
    /// `tiff_start` is the offset of the byte order mark, i.e. the
    /// first byte after the `Exif\0\0` signature when the structure is
    /// embedded in a JPEG, or 0 for a bare TIFF stream.
    ///
    /// # Errors
    /// - `InvalidTiffHeader` if the byte order mark is not II or MM,
    ///   the magic number is not 42, or the first IFD offset points
    ///   inside the header itself (< 8).
    /// - `OutOfBounds` if the buffer is too short for the 8 header
    ///   bytes.
    pub fn parse(view: &ByteView<'_>, tiff_start: usize) -> Result<Self, ExifError> {
        // The two mark bytes are identical, so this read is
        // order-independent.
        let bom = read_u16_be(view.bytes_at(tiff_start, 2)?);
        let byte_order = match bom {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(ExifError::InvalidTiffHeader("bad byte order mark")),
        };

        let magic = byte_order.read_u16(view.bytes_at(tiff_start + 2, 2)?);
        if magic != TIFF_MAGIC {
            return Err(ExifError::InvalidTiffHeader("bad magic number"));
        }

        let first_ifd_offset = byte_order.read_u32(view.bytes_at(tiff_start + 4, 4)?);
        if first_ifd_offset < TIFF_HEADER_SIZE as u32 {
            return Err(ExifError::InvalidTiffHeader(
                "first IFD offset points inside the header",
            ));
        }

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
