//! TIFF field types and tag name tables.
//!
//! This module defines the vocabulary for IFD decoding:
//!
//! - [`FieldType`]: the value type codes a directory entry can carry,
//!   restricted to the eight codes the decoder supports.
//! - [`TagTable`]: an id→name lookup for one directory kind. Three
//!   tables are provided: primary TIFF tags, Exif sub-IFD tags, and
//!   GPS sub-IFD tags. Entries whose tag id is absent from the active
//!   table are decoded but dropped from the result; an unknown tag is
//!   never an error.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types supported by the value decoder.
///
/// TIFF defines more types (SBYTE, SSHORT, FLOAT, DOUBLE); entries
/// using them decode to an explicit unsupported marker rather than
/// aborting the directory read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// 8-bit ASCII character, NUL-terminated as a sequence (1 byte)
    Ascii = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Unsigned rational: numerator and denominator u32 pair (8 bytes)
    Rational = 5,

    /// Undefined byte data, decoded like Byte (1 byte)
    Undefined = 7,

    /// Signed 32-bit integer (4 bytes)
    SLong = 9,

    /// Signed rational: numerator and denominator i32 pair (8 bytes)
    SRational = 10,
}

impl FieldType {
    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte => 1,
            FieldType::Ascii => 1,
            FieldType::Short => 2,
            FieldType::Long => 4,
            FieldType::Rational => 8,
            FieldType::Undefined => 1,
            FieldType::SLong => 4,
            FieldType::SRational => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for type codes outside the supported set.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            2 => Some(FieldType::Ascii),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            7 => Some(FieldType::Undefined),
            9 => Some(FieldType::SLong),
            10 => Some(FieldType::SRational),
            _ => None,
        }
    }
}

// =============================================================================
// Tag Tables
// =============================================================================

/// Id→name mapping for one directory kind.
///
/// Supplied to [`read_directory`](super::directory::read_directory) by
/// the orchestrator; the reader itself has no tag knowledge of its own.
#[derive(Clone, Copy)]
pub struct TagTable {
    lookup: fn(u16) -> Option<&'static str>,
}

impl TagTable {
    /// Resolve a numeric tag id to its semantic name.
    #[inline]
    pub fn lookup(&self, tag_id: u16) -> Option<&'static str> {
        (self.lookup)(tag_id)
    }
}

/// Tags of the primary (0th) IFD, including the Exif and GPS sub-IFD
/// pointers.
pub const TIFF_TAGS: TagTable = TagTable {
    lookup: tiff_tag_name,
};

/// Tags of the Exif sub-IFD.
pub const EXIF_TAGS: TagTable = TagTable {
    lookup: exif_tag_name,
};

/// Tags of the GPS sub-IFD.
pub const GPS_TAGS: TagTable = TagTable {
    lookup: gps_tag_name,
};

fn tiff_tag_name(tag_id: u16) -> Option<&'static str> {
    match tag_id {
        0x0100 => Some("ImageWidth"),
        0x0101 => Some("ImageHeight"),
        0x0102 => Some("BitsPerSample"),
        0x0103 => Some("Compression"),
        0x0106 => Some("PhotometricInterpretation"),
        0x010E => Some("ImageDescription"),
        0x010F => Some("Make"),
        0x0110 => Some("Model"),
        0x0111 => Some("StripOffsets"),
        0x0112 => Some("Orientation"),
        0x0115 => Some("SamplesPerPixel"),
        0x0116 => Some("RowsPerStrip"),
        0x0117 => Some("StripByteCounts"),
        0x011A => Some("XResolution"),
        0x011B => Some("YResolution"),
        0x011C => Some("PlanarConfiguration"),
        0x0128 => Some("ResolutionUnit"),
        0x012D => Some("TransferFunction"),
        0x0131 => Some("Software"),
        0x0132 => Some("DateTime"),
        0x013B => Some("Artist"),
        0x013E => Some("WhitePoint"),
        0x013F => Some("PrimaryChromaticities"),
        0x0201 => Some("JPEGInterchangeFormat"),
        0x0202 => Some("JPEGInterchangeFormatLength"),
        0x0211 => Some("YCbCrCoefficients"),
        0x0212 => Some("YCbCrSubSampling"),
        0x0213 => Some("YCbCrPositioning"),
        0x0214 => Some("ReferenceBlackWhite"),
        0x8298 => Some("Copyright"),
        0x8769 => Some("ExifIFDPointer"),
        0x8825 => Some("GPSInfoIFDPointer"),
        0xA005 => Some("InteroperabilityIFDPointer"),
        _ => None,
    }
}

fn exif_tag_name(tag_id: u16) -> Option<&'static str> {
    match tag_id {
        0x829A => Some("ExposureTime"),
        0x829D => Some("FNumber"),
        0x8822 => Some("ExposureProgram"),
        0x8824 => Some("SpectralSensitivity"),
        0x8827 => Some("ISOSpeedRatings"),
        0x8828 => Some("OECF"),
        0x9000 => Some("ExifVersion"),
        0x9003 => Some("DateTimeOriginal"),
        0x9004 => Some("DateTimeDigitized"),
        0x9101 => Some("ComponentsConfiguration"),
        0x9102 => Some("CompressedBitsPerPixel"),
        0x9201 => Some("ShutterSpeedValue"),
        0x9202 => Some("ApertureValue"),
        0x9203 => Some("BrightnessValue"),
        0x9204 => Some("ExposureBias"),
        0x9205 => Some("MaxApertureValue"),
        0x9206 => Some("SubjectDistance"),
        0x9207 => Some("MeteringMode"),
        0x9208 => Some("LightSource"),
        0x9209 => Some("Flash"),
        0x920A => Some("FocalLength"),
        0x9214 => Some("SubjectArea"),
        0x927C => Some("MakerNote"),
        0x9286 => Some("UserComment"),
        0x9290 => Some("SubsecTime"),
        0x9291 => Some("SubsecTimeOriginal"),
        0x9292 => Some("SubsecTimeDigitized"),
        0xA000 => Some("FlashpixVersion"),
        0xA001 => Some("ColorSpace"),
        0xA002 => Some("PixelXDimension"),
        0xA003 => Some("PixelYDimension"),
        0xA004 => Some("RelatedSoundFile"),
        0xA005 => Some("InteroperabilityIFDPointer"),
        0xA20B => Some("FlashEnergy"),
        0xA20C => Some("SpatialFrequencyResponse"),
        0xA20E => Some("FocalPlaneXResolution"),
        0xA20F => Some("FocalPlaneYResolution"),
        0xA210 => Some("FocalPlaneResolutionUnit"),
        0xA214 => Some("SubjectLocation"),
        0xA215 => Some("ExposureIndex"),
        0xA217 => Some("SensingMethod"),
        0xA300 => Some("FileSource"),
        0xA301 => Some("SceneType"),
        0xA302 => Some("CFAPattern"),
        0xA401 => Some("CustomRendered"),
        0xA402 => Some("ExposureMode"),
        0xA403 => Some("WhiteBalance"),
        0xA404 => Some("DigitalZoomRation"),
        0xA405 => Some("FocalLengthIn35mmFilm"),
        0xA406 => Some("SceneCaptureType"),
        0xA407 => Some("GainControl"),
        0xA408 => Some("Contrast"),
        0xA409 => Some("Saturation"),
        0xA40A => Some("Sharpness"),
        0xA40B => Some("DeviceSettingDescription"),
        0xA40C => Some("SubjectDistanceRange"),
        0xA420 => Some("ImageUniqueID"),
        _ => None,
    }
}

fn gps_tag_name(tag_id: u16) -> Option<&'static str> {
    match tag_id {
        0x0000 => Some("GPSVersionID"),
        0x0001 => Some("GPSLatitudeRef"),
        0x0002 => Some("GPSLatitude"),
        0x0003 => Some("GPSLongitudeRef"),
        0x0004 => Some("GPSLongitude"),
        0x0005 => Some("GPSAltitudeRef"),
        0x0006 => Some("GPSAltitude"),
        0x0007 => Some("GPSTimeStamp"),
        0x0008 => Some("GPSSatellites"),
        0x0009 => Some("GPSStatus"),
        0x000A => Some("GPSMeasureMode"),
        0x000B => Some("GPSDOP"),
        0x000C => Some("GPSSpeedRef"),
        0x000D => Some("GPSSpeed"),
        0x000E => Some("GPSTrackRef"),
        0x000F => Some("GPSTrack"),
        0x0010 => Some("GPSImgDirectionRef"),
        0x0011 => Some("GPSImgDirection"),
        0x0012 => Some("GPSMapDatum"),
        0x0013 => Some("GPSDestLatitudeRef"),
        0x0014 => Some("GPSDestLatitude"),
        0x0015 => Some("GPSDestLongitudeRef"),
        0x0016 => Some("GPSDestLongitude"),
        0x0017 => Some("GPSDestBearingRef"),
        0x0018 => Some("GPSDestBearing"),
        0x0019 => Some("GPSDestDistanceRef"),
        0x001A => Some("GPSDestDistance"),
        0x001B => Some("GPSProcessingMethod"),
        0x001C => Some("GPSAreaInformation"),
        0x001D => Some("GPSDateStamp"),
        0x001E => Some("GPSDifferential"),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
