//! IFD (Image File Directory) reading.
//!
//! An IFD is a 16-bit entry count followed by that many 12-byte
//! entries:
//!
//! ```text
//! Bytes 0-1:  Tag id
//! Bytes 2-3:  Field type code
//! Bytes 4-7:  Value count
//! Bytes 8-11: Value, or offset to it (relative to the TIFF start)
//! ```
//!
//! The reader decodes every entry; entries whose tag id is absent from
//! the supplied [`TagTable`] are discarded after decoding, so one
//! vendor-specific tag never hides the rest of the directory.

use std::collections::HashMap;

use crate::error::ExifError;
use crate::io::ByteView;

use super::parser::ByteOrder;
use super::tags::{FieldType, TagTable};
use super::values::{decode_value, ExifValue};

/// Size of one IFD entry in bytes.
pub const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// IfdEntry
// =============================================================================

/// One parsed 12-byte directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfdEntry {
    /// Numeric tag id
    pub tag_id: u16,

    /// Field type, `None` when the code is outside the supported set
    pub field_type: Option<FieldType>,

    /// Raw field type code as stored
    pub field_type_raw: u16,

    /// Number of values of the field type
    pub count: u32,

    /// The raw 4-byte value field read in document order; either the
    /// inline value or an offset relative to the TIFF start
    pub value_offset: u32,

    /// Absolute offset of this entry in the buffer; the value field
    /// sits 8 bytes in
    pub entry_offset: usize,
}

impl IfdEntry {
    /// Parse the entry at `offset`.
    pub fn parse(
        view: &ByteView<'_>,
        offset: usize,
        order: ByteOrder,
    ) -> Result<Self, ExifError> {
        let bytes = view.bytes_at(offset, IFD_ENTRY_SIZE)?;

        let tag_id = order.read_u16(&bytes[0..2]);
        let field_type_raw = order.read_u16(&bytes[2..4]);
        let count = order.read_u32(&bytes[4..8]);
        let value_offset = order.read_u32(&bytes[8..12]);

        Ok(Self {
            tag_id,
            field_type: FieldType::from_u16(field_type_raw),
            field_type_raw,
            count,
            value_offset,
            entry_offset: offset,
        })
    }
}

// =============================================================================
// Directory Reader
// =============================================================================

/// Decode one IFD into a tag-name → value map.
///
/// # Arguments
/// * `view` - the whole input buffer
/// * `tiff_start` - offset base for all value pointers
/// * `dir_start` - absolute offset of the directory's entry count
/// * `table` - tag table for this directory kind
/// * `order` - byte order from the TIFF header
///
/// # Errors
/// `OutOfBounds` while reading any entry or its value is fatal to the
/// whole directory. Unknown tag ids and unsupported type codes are not
/// errors.
pub fn read_directory(
    view: &ByteView<'_>,
    tiff_start: usize,
    dir_start: usize,
    table: &TagTable,
    order: ByteOrder,
) -> Result<HashMap<&'static str, ExifValue>, ExifError> {
    let entry_count = order.read_u16(view.bytes_at(dir_start, 2)?) as usize;

    let mut tags = HashMap::with_capacity(entry_count);
    for i in 0..entry_count {
        let entry_offset = dir_start + 2 + i * IFD_ENTRY_SIZE;
        let entry = IfdEntry::parse(view, entry_offset, order)?;

        // Decode unconditionally so corruption surfaces even on tags
        // the table does not know.
        let value = decode_value(view, &entry, tiff_start, order)?;
        if let Some(name) = table.lookup(entry.tag_id) {
            tags.insert(name, value);
        }
    }

    Ok(tags)
}

// =============================================================================
// Tests
// =============================================================================
