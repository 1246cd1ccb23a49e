use thiserror::Error;

/// Errors that can occur while extracting EXIF metadata.
///
/// Structural validation failures (`NotAJpeg`, `NotExif`,
/// `InvalidTiffHeader`, `MalformedMarker`) short-circuit the decode.
/// `OutOfBounds` signals a truncated or corrupt buffer and is fatal
/// wherever it occurs.
///
/// Absence of a segment or sub-directory is not an error: `find_exif`
/// and `get_exif` return `Ok(None)` for a JPEG without EXIF data.
/// Unsupported value type codes also never surface here; they decode to
/// [`ExifValue::Unsupported`](crate::ExifValue::Unsupported).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExifError {
    /// Buffer does not start with the JPEG SOI marker (0xFF 0xD8)
    #[error("not a JPEG: expected SOI marker 0xFFD8 at start of buffer")]
    NotAJpeg,

    /// Marker segment scan hit a byte that cannot be a marker prefix
    #[error("malformed marker segment: expected 0xFF prefix at offset {offset}, got 0x{byte:02X}")]
    MalformedMarker { offset: usize, byte: u8 },

    /// APP1 payload does not carry the "Exif\0\0" signature
    #[error("not EXIF: missing \"Exif\\0\\0\" signature in APP1 payload")]
    NotExif,

    /// Embedded TIFF header failed validation
    #[error("invalid TIFF header: {0}")]
    InvalidTiffHeader(&'static str),

    /// A read addressed bytes past the end of the supplied buffer
    #[error("read out of bounds: requested {requested} bytes at offset {offset}, buffer is {size} bytes")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        size: usize,
    },
}
