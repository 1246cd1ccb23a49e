//! EXIF extraction orchestration.
//!
//! Ties the container and TIFF layers together: validates the
//! `Exif\0\0` signature, reads the primary IFD, follows the Exif and
//! GPS sub-directory pointers, applies tag-specific post-processing
//! (enum labels, version strings) and merges everything into one
//! [`ExifData`] record.
//!
//! Entry points:
//!
//! - [`get_exif`]: full pipeline from a JPEG buffer.
//! - [`read_exif_data`]: decode an EXIF payload at a known offset.

mod labels;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::ExifError;
use crate::format::jpeg::{find_exif, APP1_HEADER_LEN};
use crate::format::tiff::{
    read_directory, ExifValue, TiffHeader, EXIF_TAGS, GPS_TAGS, TIFF_TAGS,
};
use crate::io::ByteView;

pub use labels::{component_label, enum_label};

/// ASCII signature opening an EXIF APP1 payload.
pub const EXIF_SIGNATURE: [u8; 6] = *b"Exif\0\0";

// =============================================================================
// ExifData
// =============================================================================

/// Decoded EXIF metadata: a tag-name → value record.
///
/// Produced once per successful parse; tag names come from the static
/// tag tables, so lookups are by plain string. Iteration order is
/// unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct ExifData {
    tags: HashMap<&'static str, ExifValue>,
}

impl ExifData {
    /// Look up a decoded value by tag name.
    pub fn get(&self, name: &str) -> Option<&ExifValue> {
        self.tags.get(name)
    }

    /// Iterate over all decoded tags.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ExifValue)> {
        self.tags.iter().map(|(name, value)| (*name, value))
    }

    /// Number of decoded tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tags were decoded.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

// =============================================================================
// Extraction
// =============================================================================

/// Extract EXIF metadata from a JPEG buffer.
///
/// Composes [`find_exif`] with [`read_exif_data`].
///
/// # Returns
/// * `Ok(Some(data))` - EXIF segment found and decoded.
/// * `Ok(None)` - well-formed JPEG without an APP1 segment.
/// * `Err(_)` - the buffer is not a JPEG, the marker chain or the
///   embedded structure is corrupt, or a read ran past the end.
pub fn get_exif(data: &[u8]) -> Result<Option<ExifData>, ExifError> {
    match find_exif(data)? {
        Some(offset) => read_exif_data(data, offset + APP1_HEADER_LEN).map(Some),
        None => Ok(None),
    }
}

/// Decode an EXIF payload whose `Exif\0\0` signature starts at `start`.
///
/// Reads the primary IFD, then the Exif and GPS sub-directories when
/// the primary IFD points at them. Sub-directory tags are
/// post-processed and merged over the primary tags.
pub fn read_exif_data(data: &[u8], start: usize) -> Result<ExifData, ExifError> {
    let view = ByteView::new(data);

    if view.bytes_at(start, 6)? != EXIF_SIGNATURE {
        return Err(ExifError::NotExif);
    }

    let tiff_start = start + 6;
    let header = TiffHeader::parse(&view, tiff_start)?;
    let order = header.byte_order;

    let primary_dir = tiff_start + header.first_ifd_offset as usize;
    let mut tags = read_directory(&view, tiff_start, primary_dir, &TIFF_TAGS, order)?;

    if let Some(pointer) = tags.get("ExifIFDPointer").and_then(ExifValue::as_u32) {
        debug!(pointer, "following Exif sub-IFD");
        let sub_dir = tiff_start + pointer as usize;
        let mut exif_tags = read_directory(&view, tiff_start, sub_dir, &EXIF_TAGS, order)?;
        post_process_exif(&mut exif_tags);
        tags.extend(exif_tags);
    }

    if let Some(pointer) = tags.get("GPSInfoIFDPointer").and_then(ExifValue::as_u32) {
        debug!(pointer, "following GPS sub-IFD");
        let sub_dir = tiff_start + pointer as usize;
        let mut gps_tags = read_directory(&view, tiff_start, sub_dir, &GPS_TAGS, order)?;
        post_process_gps(&mut gps_tags);
        tags.extend(gps_tags);
    }

    Ok(ExifData { tags })
}

// =============================================================================
// Post-processing
// =============================================================================

/// Rewrite Exif sub-IFD values that have a semantic string form.
fn post_process_exif(tags: &mut HashMap<&'static str, ExifValue>) {
    for (name, value) in tags.iter_mut() {
        match *name {
            "ExifVersion" | "FlashpixVersion" => {
                if let Some(bytes) = value.as_bytes() {
                    *value = ExifValue::Text(bytes.iter().map(|&b| b as char).collect());
                }
            }
            "ComponentsConfiguration" => {
                if let Some(bytes) = value.as_bytes() {
                    let text: String = bytes.iter().map(|&b| component_label(b)).collect();
                    *value = ExifValue::Text(text);
                }
            }
            _ => {
                if let Some(code) = value.as_u32() {
                    if let Some(label) = enum_label(name, code) {
                        *value = ExifValue::Text(label.to_string());
                    }
                }
            }
        }
    }
}

/// Rewrite GPS sub-IFD values with a fixed string form.
fn post_process_gps(tags: &mut HashMap<&'static str, ExifValue>) {
    if let Some(value) = tags.get_mut("GPSVersionID") {
        if let Some(bytes) = value.as_bytes() {
            let text = bytes
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(".");
            *value = ExifValue::Text(text);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
