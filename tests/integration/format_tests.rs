//! Container-format integration tests.
//!
//! Tests verify:
//! - The sniffer accepts JPEG and bare TIFF signatures and nothing else
//! - APP1 discovery walks over preceding marker segments
//! - Corrupt marker chains are reported, not skipped

use exif_peek::{detect_file_kind, find_exif, is_valid_file_type, ExifError, FileKind};

use super::test_utils::{
    exif_payload_le, jpeg_without_exif, wrap_in_app0_then_app1, wrap_in_app1,
};

// =============================================================================
// Sniffer Tests
// =============================================================================

#[test]
fn test_detect_jpeg() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    assert_eq!(detect_file_kind(&jpeg), Some(FileKind::Jpeg));
    assert!(is_valid_file_type(&jpeg));
}

#[test]
fn test_detect_bare_tiff_both_orders() {
    let le = [0x49, 0x49, 0x2A, 0x00];
    let be = [0x4D, 0x4D, 0x00, 0x2A];

    assert_eq!(detect_file_kind(&le), Some(FileKind::TiffLittleEndian));
    assert_eq!(detect_file_kind(&be), Some(FileKind::TiffBigEndian));
    assert!(is_valid_file_type(&le));
    assert!(is_valid_file_type(&be));
}

#[test]
fn test_detect_rejects_other_formats() {
    assert_eq!(detect_file_kind(b"\x89PNG\r\n\x1a\n"), None);
    assert_eq!(detect_file_kind(b"GIF89a"), None);
    assert_eq!(detect_file_kind(b""), None);
    assert!(!is_valid_file_type(b"plain text"));
}

#[test]
fn test_detect_requires_both_signature_bytes() {
    // Second byte alone must not pass as JPEG.
    assert_eq!(detect_file_kind(&[0x00, 0xD8, 0x00, 0x00]), None);
    assert_eq!(detect_file_kind(&[0xFF, 0x00, 0x00, 0x00]), None);
}

// =============================================================================
// APP1 Discovery Tests
// =============================================================================

#[test]
fn test_find_exif_immediate_app1() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    assert_eq!(find_exif(&jpeg).unwrap(), Some(2));
}

#[test]
fn test_find_exif_skips_app0() {
    let jpeg = wrap_in_app0_then_app1(&exif_payload_le());
    // SOI (2) + APP0 marker (2) + APP0 length (7) = 11
    assert_eq!(find_exif(&jpeg).unwrap(), Some(11));
}

#[test]
fn test_find_exif_no_app1() {
    assert_eq!(find_exif(&jpeg_without_exif()).unwrap(), None);
}

#[test]
fn test_find_exif_not_a_jpeg() {
    assert_eq!(find_exif(b"not a jpeg at all"), Err(ExifError::NotAJpeg));
}

#[test]
fn test_find_exif_corrupt_marker_chain() {
    let data = [
        0xFF, 0xD8, // SOI
        0x00, 0xE1, // Marker without the 0xFF prefix
        0x00, 0x04,
    ];
    assert_eq!(
        find_exif(&data),
        Err(ExifError::MalformedMarker {
            offset: 2,
            byte: 0x00
        })
    );
}
