//! Container format handling: signature sniffing, JPEG marker segment
//! scanning, and the embedded TIFF structure parser.

pub mod detect;
pub mod jpeg;
pub mod tiff;

pub use detect::{detect_file_kind, is_valid_file_type, FileKind};
pub use jpeg::{find_exif, APP1, APP1_HEADER_LEN, SOI};
