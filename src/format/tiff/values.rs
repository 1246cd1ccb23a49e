//! IFD entry value decoding.
//!
//! Each 12-byte directory entry carries a type code, a value count and
//! a 4-byte field that either holds the value itself (when the encoded
//! size fits) or an offset to it. Offsets are always relative to the
//! TIFF start, never to the enclosing buffer or to the entry.
//!
//! Inline rules per type:
//!
//! | Type          | Inline when   |
//! |---------------|---------------|
//! | Byte/Undefined| count <= 4    |
//! | Ascii         | count <= 4    |
//! | Short         | count <= 2    |
//! | Long/SLong    | scalar only   |
//! | Rationals     | never (8 bytes each) |

use std::fmt;

use serde::Serialize;

use crate::error::ExifError;
use crate::io::ByteView;

use super::directory::IfdEntry;
use super::parser::ByteOrder;
use super::tags::FieldType;

// =============================================================================
// Rational Values
// =============================================================================

/// Unsigned rational: numerator, denominator and their quotient.
///
/// All three components stay retrievable; the quotient is computed once
/// at decode time. A zero denominator yields an infinite quotient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
    pub ratio: f64,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
            ratio: numerator as f64 / denominator as f64,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed rational counterpart of [`Rational`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
    pub ratio: f64,
}

impl SRational {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
            ratio: numerator as f64 / denominator as f64,
        }
    }
}

impl fmt::Display for SRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// =============================================================================
// ExifValue
// =============================================================================

/// A decoded directory entry value.
///
/// Closed tagged union over the value shapes the eight supported TIFF
/// type codes can produce, plus `Text` for post-processed label
/// strings and `Unsupported` for type codes outside the supported set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExifValue {
    Byte(u8),
    Bytes(Vec<u8>),
    Text(String),
    Short(u16),
    Shorts(Vec<u16>),
    Long(u32),
    Longs(Vec<u32>),
    SignedLong(i32),
    SignedLongs(Vec<i32>),
    Rational(Rational),
    Rationals(Vec<Rational>),
    SignedRational(SRational),
    SignedRationals(Vec<SRational>),
    /// Entry used a type code outside {1,2,3,4,5,7,9,10}; the raw code
    /// is preserved, the value is not guessed at.
    Unsupported(u16),
}

impl ExifValue {
    /// Numeric scalar as u32, if this value is one.
    ///
    /// Used for sub-IFD pointers and enum-coded tags.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            ExifValue::Byte(v) => Some(v as u32),
            ExifValue::Short(v) => Some(v as u32),
            ExifValue::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the text content, if this value is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExifValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the raw byte content, if this value is a byte sequence.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ExifValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for ExifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "]")
        }

        match self {
            ExifValue::Byte(v) => write!(f, "{}", v),
            ExifValue::Bytes(v) => join(f, v),
            ExifValue::Text(s) => write!(f, "{}", s),
            ExifValue::Short(v) => write!(f, "{}", v),
            ExifValue::Shorts(v) => join(f, v),
            ExifValue::Long(v) => write!(f, "{}", v),
            ExifValue::Longs(v) => join(f, v),
            ExifValue::SignedLong(v) => write!(f, "{}", v),
            ExifValue::SignedLongs(v) => join(f, v),
            ExifValue::Rational(r) => write!(f, "{}", r),
            ExifValue::Rationals(v) => join(f, v),
            ExifValue::SignedRational(r) => write!(f, "{}", r),
            ExifValue::SignedRationals(v) => join(f, v),
            ExifValue::Unsupported(code) => write!(f, "<unsupported type {}>", code),
        }
    }
}

// =============================================================================
// Value Decoder
// =============================================================================

/// Decode one directory entry's value.
///
/// `tiff_start` is the offset base every non-inline value pointer is
/// resolved against. Reads past the buffer end fail with `OutOfBounds`;
/// an unrecognized type code yields `ExifValue::Unsupported` instead of
/// an error so that one exotic entry does not sink the directory.
pub fn decode_value(
    view: &ByteView<'_>,
    entry: &IfdEntry,
    tiff_start: usize,
    order: ByteOrder,
) -> Result<ExifValue, ExifError> {
    let field_type = match entry.field_type {
        Some(ft) => ft,
        None => return Ok(ExifValue::Unsupported(entry.field_type_raw)),
    };

    let count = entry.count as usize;
    // Where the entry's own 4-byte value field sits.
    let inline_offset = entry.entry_offset + 8;
    // Where the value lives when the field is a pointer.
    let pointed_offset = tiff_start + entry.value_offset as usize;

    let value = match field_type {
        FieldType::Byte | FieldType::Undefined => {
            let data = if count <= 4 {
                inline_offset
            } else {
                pointed_offset
            };
            if count == 1 {
                ExifValue::Byte(view.u8_at(data)?)
            } else {
                ExifValue::Bytes(view.bytes_at(data, count)?.to_vec())
            }
        }

        FieldType::Ascii => {
            let data = if count <= 4 {
                inline_offset
            } else {
                pointed_offset
            };
            // The declared count includes the trailing NUL.
            let len = count.saturating_sub(1);
            let bytes = view.bytes_at(data, len)?;
            ExifValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }

        FieldType::Short => {
            if count == 1 {
                ExifValue::Short(order.read_u16(view.bytes_at(inline_offset, 2)?))
            } else {
                let data = if count <= 2 {
                    inline_offset
                } else {
                    pointed_offset
                };
                let bytes = view.bytes_at(data, count * 2)?;
                let values = (0..count).map(|i| order.read_u16(&bytes[i * 2..])).collect();
                ExifValue::Shorts(values)
            }
        }

        FieldType::Long => {
            if count == 1 {
                ExifValue::Long(order.read_u32(view.bytes_at(inline_offset, 4)?))
            } else {
                let bytes = view.bytes_at(pointed_offset, count * 4)?;
                let values = (0..count).map(|i| order.read_u32(&bytes[i * 4..])).collect();
                ExifValue::Longs(values)
            }
        }

        FieldType::SLong => {
            if count == 1 {
                ExifValue::SignedLong(order.read_i32(view.bytes_at(inline_offset, 4)?))
            } else {
                let bytes = view.bytes_at(pointed_offset, count * 4)?;
                let values = (0..count).map(|i| order.read_i32(&bytes[i * 4..])).collect();
                ExifValue::SignedLongs(values)
            }
        }

        FieldType::Rational => {
            let bytes = view.bytes_at(pointed_offset, count * 8)?;
            let mut values: Vec<Rational> = (0..count)
                .map(|i| {
                    let numerator = order.read_u32(&bytes[i * 8..]);
                    let denominator = order.read_u32(&bytes[i * 8 + 4..]);
                    Rational::new(numerator, denominator)
                })
                .collect();
            if count == 1 {
                ExifValue::Rational(values.remove(0))
            } else {
                ExifValue::Rationals(values)
            }
        }

        FieldType::SRational => {
            let bytes = view.bytes_at(pointed_offset, count * 8)?;
            let mut values: Vec<SRational> = (0..count)
                .map(|i| {
                    let numerator = order.read_i32(&bytes[i * 8..]);
                    let denominator = order.read_i32(&bytes[i * 8 + 4..]);
                    SRational::new(numerator, denominator)
                })
                .collect();
            if count == 1 {
                ExifValue::SignedRational(values.remove(0))
            } else {
                ExifValue::SignedRationals(values)
            }
        }
    };

    Ok(value)
}

// =============================================================================
// Tests
// =============================================================================
