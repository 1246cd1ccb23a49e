use crate::error::ExifError;

// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// EXIF buffers mix byte orders: the JPEG marker layer is always
// big-endian, while the embedded TIFF structure declares its own order
// in the header. These helpers are used by the marker scanner and by
// `ByteOrder` in the TIFF parser.

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a little-endian i32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_i32_le(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian i32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_i32_be(bytes: &[u8]) -> i32 {
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

// =============================================================================
// ByteView
// =============================================================================

/// Bounds-checked random-access view over a caller-owned byte buffer.
///
/// Every read in the decoder goes through this view, so a truncated
/// buffer surfaces as [`ExifError::OutOfBounds`] instead of a panic.
/// The view only borrows; it never copies or retains the buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Wrap a byte buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total length of the underlying buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read a single byte at `offset`.
    #[inline]
    pub fn u8_at(&self, offset: usize) -> Result<u8, ExifError> {
        self.data
            .get(offset)
            .copied()
            .ok_or(ExifError::OutOfBounds {
                offset,
                requested: 1,
                size: self.data.len(),
            })
    }

    /// Borrow exactly `len` bytes starting at `offset`.
    ///
    /// This is the only place bounds are enforced; multi-byte reads
    /// compose this with the `ByteOrder` slice readers.
    #[inline]
    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8], ExifError> {
        let end = offset.checked_add(len).ok_or(ExifError::OutOfBounds {
            offset,
            requested: len,
            size: self.data.len(),
        })?;
        self.data.get(offset..end).ok_or(ExifError::OutOfBounds {
            offset,
            requested: len,
            size: self.data.len(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
