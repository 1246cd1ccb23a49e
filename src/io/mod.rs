mod view;

pub use view::{
    read_i32_be, read_i32_le, read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteView,
};
