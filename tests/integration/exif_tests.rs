//! End-to-end EXIF extraction tests.
//!
//! Tests verify:
//! - Full extraction from little-endian and big-endian payloads
//! - Sub-IFD merging and value post-processing
//! - Unsupported field types survive without aborting the parse
//! - Truncated payloads fail with a bounds error
//! - Decoded records serialize to plain JSON

use exif_peek::{get_exif, read_exif_data, ExifError, ExifValue, Rational};

use super::test_utils::{
    exif_payload_be, exif_payload_le, exif_payload_with_float_tag, jpeg_without_exif,
    wrap_in_app0_then_app1, wrap_in_app1,
};

// =============================================================================
// Little-Endian Extraction
// =============================================================================

#[test]
fn test_extract_primary_tags() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    assert_eq!(exif.get("Orientation"), Some(&ExifValue::Short(1)));
    assert_eq!(
        exif.get("DateTime"),
        Some(&ExifValue::Text("2020:01:01 00:00:00".to_string()))
    );
}

#[test]
fn test_extract_exif_sub_ifd() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    assert_eq!(
        exif.get("ExposureTime"),
        Some(&ExifValue::Rational(Rational::new(1, 250)))
    );
    assert_eq!(
        exif.get("Flash"),
        Some(&ExifValue::Text(
            "Flash fired, compulsory flash mode".to_string()
        ))
    );
    assert_eq!(
        exif.get("ExifVersion"),
        Some(&ExifValue::Text("0220".to_string()))
    );
    // No label table, stays numeric.
    assert_eq!(exif.get("ISOSpeedRatings"), Some(&ExifValue::Short(400)));
}

#[test]
fn test_extract_gps_sub_ifd() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    assert_eq!(
        exif.get("GPSVersionID"),
        Some(&ExifValue::Text("2.2.0.0".to_string()))
    );
    assert_eq!(
        exif.get("GPSLatitudeRef"),
        Some(&ExifValue::Text("N".to_string()))
    );
}

#[test]
fn test_rational_ratio() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    let Some(ExifValue::Rational(exposure)) = exif.get("ExposureTime") else {
        panic!("ExposureTime missing or not rational");
    };
    assert_eq!(exposure.numerator, 1);
    assert_eq!(exposure.denominator, 250);
    assert!((exposure.ratio - 0.004).abs() < 1e-9);
}

#[test]
fn test_extract_behind_app0() {
    let jpeg = wrap_in_app0_then_app1(&exif_payload_le());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    assert_eq!(
        exif.get("DateTime"),
        Some(&ExifValue::Text("2020:01:01 00:00:00".to_string()))
    );
}

// =============================================================================
// Big-Endian Extraction
// =============================================================================

#[test]
fn test_extract_big_endian() {
    let jpeg = wrap_in_app1(&exif_payload_be());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    assert_eq!(exif.get("Orientation"), Some(&ExifValue::Short(6)));
    assert_eq!(
        exif.get("DateTime"),
        Some(&ExifValue::Text("2019:12:31 23:59:59".to_string()))
    );
}

// =============================================================================
// Tolerance and Errors
// =============================================================================

#[test]
fn test_unsupported_field_type_does_not_abort() {
    let jpeg = wrap_in_app1(&exif_payload_with_float_tag());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    assert_eq!(exif.get("Orientation"), Some(&ExifValue::Unsupported(11)));
    assert_eq!(exif.get("ImageWidth"), Some(&ExifValue::Short(640)));
}

#[test]
fn test_no_exif_segment() {
    assert_eq!(get_exif(&jpeg_without_exif()).unwrap(), None);
}

#[test]
fn test_not_a_jpeg() {
    assert_eq!(get_exif(b"definitely text"), Err(ExifError::NotAJpeg));
}

#[test]
fn test_truncated_payload() {
    let mut jpeg = wrap_in_app1(&exif_payload_le());
    // Cut the buffer inside the GPS directory.
    jpeg.truncate(jpeg.len() - 20);

    assert!(matches!(
        get_exif(&jpeg),
        Err(ExifError::OutOfBounds { .. })
    ));
}

#[test]
fn test_read_exif_data_bad_signature() {
    let mut payload = exif_payload_le();
    payload[0] = b'X';

    assert_eq!(read_exif_data(&payload, 0), Err(ExifError::NotExif));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_json_output() {
    let jpeg = wrap_in_app1(&exif_payload_le());
    let exif = get_exif(&jpeg).unwrap().unwrap();

    let json = serde_json::to_value(&exif).unwrap();
    assert_eq!(json["DateTime"], "2020:01:01 00:00:00");
    assert_eq!(json["Orientation"], 1);
    assert_eq!(json["GPSVersionID"], "2.2.0.0");
}
