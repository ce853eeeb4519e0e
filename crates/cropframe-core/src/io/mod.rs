pub mod image_io;
pub mod source;
