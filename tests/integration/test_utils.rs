//! Shared helpers for building synthetic JPEG/EXIF buffers.
//!
//! The payload builders emit byte-exact EXIF blobs (`Exif\0\0`
//! signature plus TIFF structure); the wrappers embed them in a
//! minimal JPEG marker stream.

/// Little-endian EXIF payload with a primary IFD, an Exif sub-IFD and
/// a GPS sub-IFD.
///
/// Decodes to:
/// - `Orientation` = 1, `DateTime` = "2020:01:01 00:00:00"
/// - `ExposureTime` = 1/250, `Flash` = 9, `ExifVersion` = "0220",
///   `ISOSpeedRatings` = 400
/// - `GPSVersionID` = [2, 2, 0, 0], `GPSLatitudeRef` = "N"
pub fn exif_payload_le() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"Exif\0\0"); // Signature; TIFF starts at 6

    // TIFF header (offset 0 relative to TIFF start)
    buf.extend_from_slice(&[0x49, 0x49]); // II
    buf.extend_from_slice(&[0x2A, 0x00]); // Magic 42
    buf.extend_from_slice(&[0x08, 0x00, 0x00, 0x00]); // IFD0 at 8

    // IFD0 at TIFF offset 8: 4 entries
    buf.extend_from_slice(&[0x04, 0x00]);
    // Orientation (0x0112), Short, count 1, value 1 inline
    buf.extend_from_slice(&[0x12, 0x01, 0x03, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    // DateTime (0x0132), Ascii, count 20, data at TIFF offset 62
    buf.extend_from_slice(&[0x32, 0x01, 0x02, 0x00]);
    buf.extend_from_slice(&[0x14, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x3E, 0x00, 0x00, 0x00]);
    // ExifIFDPointer (0x8769), Long, count 1, value 82
    buf.extend_from_slice(&[0x69, 0x87, 0x04, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x52, 0x00, 0x00, 0x00]);
    // GPSInfoIFDPointer (0x8825), Long, count 1, value 144
    buf.extend_from_slice(&[0x25, 0x88, 0x04, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x90, 0x00, 0x00, 0x00]);
    // Next-IFD offset
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    debug_assert_eq!(buf.len(), 6 + 62);

    // DateTime string at TIFF offset 62
    buf.extend_from_slice(b"2020:01:01 00:00:00\0");
    debug_assert_eq!(buf.len(), 6 + 82);

    // Exif sub-IFD at TIFF offset 82: 4 entries
    buf.extend_from_slice(&[0x04, 0x00]);
    // ExposureTime (0x829A), Rational, count 1, data at TIFF offset 136
    buf.extend_from_slice(&[0x9A, 0x82, 0x05, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x88, 0x00, 0x00, 0x00]);
    // Flash (0x9209), Short, count 1, value 9 inline
    buf.extend_from_slice(&[0x09, 0x92, 0x03, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x09, 0x00, 0x00, 0x00]);
    // ExifVersion (0x9000), Undefined, count 4, "0220" inline
    buf.extend_from_slice(&[0x00, 0x90, 0x07, 0x00]);
    buf.extend_from_slice(&[0x04, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x30, 0x32, 0x32, 0x30]);
    // ISOSpeedRatings (0x8827), Short, count 1, value 400 inline
    buf.extend_from_slice(&[0x27, 0x88, 0x03, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x90, 0x01, 0x00, 0x00]);
    // Next-IFD offset
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    debug_assert_eq!(buf.len(), 6 + 136);

    // ExposureTime rational at TIFF offset 136: 1/250
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0xFA, 0x00, 0x00, 0x00]);
    debug_assert_eq!(buf.len(), 6 + 144);

    // GPS sub-IFD at TIFF offset 144: 2 entries
    buf.extend_from_slice(&[0x02, 0x00]);
    // GPSVersionID (0x0000), Byte, count 4, [2, 2, 0, 0] inline
    buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]);
    buf.extend_from_slice(&[0x04, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x02, 0x02, 0x00, 0x00]);
    // GPSLatitudeRef (0x0001), Ascii, count 2, "N\0" inline
    buf.extend_from_slice(&[0x01, 0x00, 0x02, 0x00]);
    buf.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x4E, 0x00, 0x00, 0x00]);
    // Next-IFD offset
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    debug_assert_eq!(buf.len(), 6 + 174);

    buf
}

/// Big-endian EXIF payload with Orientation = 6 and a DateTime string.
pub fn exif_payload_be() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"Exif\0\0");

    buf.extend_from_slice(&[0x4D, 0x4D]); // MM
    buf.extend_from_slice(&[0x00, 0x2A]); // Magic 42
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]); // IFD0 at 8

    // IFD0 at TIFF offset 8: 2 entries
    buf.extend_from_slice(&[0x00, 0x02]);
    // Orientation (0x0112), Short, count 1, value 6 inline
    buf.extend_from_slice(&[0x01, 0x12, 0x00, 0x03]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    buf.extend_from_slice(&[0x00, 0x06, 0x00, 0x00]);
    // DateTime (0x0132), Ascii, count 20, data at TIFF offset 38
    buf.extend_from_slice(&[0x01, 0x32, 0x00, 0x02]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x14]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x26]);
    // Next-IFD offset
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    debug_assert_eq!(buf.len(), 6 + 38);

    // DateTime string at TIFF offset 38
    buf.extend_from_slice(b"2019:12:31 23:59:59\0");

    buf
}

/// Little-endian payload whose primary IFD mixes a Float-typed entry
/// (type 11, unsupported) with an ordinary Short entry.
pub fn exif_payload_with_float_tag() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"Exif\0\0");

    buf.extend_from_slice(&[0x49, 0x49]);
    buf.extend_from_slice(&[0x2A, 0x00]);
    buf.extend_from_slice(&[0x08, 0x00, 0x00, 0x00]);

    // IFD0: 2 entries
    buf.extend_from_slice(&[0x02, 0x00]);
    // Orientation with type 11 (Float)
    buf.extend_from_slice(&[0x12, 0x01, 0x0B, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x00, 0x00, 0x80, 0x3F]);
    // ImageWidth (0x0100), Short, count 1, value 640 inline
    buf.extend_from_slice(&[0x00, 0x01, 0x03, 0x00]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x80, 0x02, 0x00, 0x00]);
    // Next-IFD offset
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    buf
}

/// Wrap an EXIF payload in SOI + APP1 marker + big-endian length.
pub fn wrap_in_app1(payload: &[u8]) -> Vec<u8> {
    let mut buf = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let length = (payload.len() + 2) as u16;
    buf.extend_from_slice(&length.to_be_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Wrap an EXIF payload in a JPEG where an APP0 segment precedes APP1.
pub fn wrap_in_app0_then_app1(payload: &[u8]) -> Vec<u8> {
    let mut buf = vec![0xFF, 0xD8];
    // APP0 carrying a JFIF-ish stub
    buf.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x07]);
    buf.extend_from_slice(b"JFIF\0");
    // APP1
    buf.extend_from_slice(&[0xFF, 0xE1]);
    let length = (payload.len() + 2) as u16;
    buf.extend_from_slice(&length.to_be_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Minimal JPEG with an APP0 segment and no EXIF data.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![
        0xFF, 0xD8, // SOI
        0xFF, 0xE0, 0x00, 0x07, // APP0, length 7
        0x4A, 0x46, 0x49, 0x46, 0x00, // "JFIF\0"
    ]
}
