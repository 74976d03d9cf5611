//! I/O layer: decoding raster files into RGBA buffers (`reader`) and the
//! lossless `writers` for PNG and TIFF outputs.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
