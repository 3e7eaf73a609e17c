//! I/O layer for decoding source images and writing icon files.
//! Provides the `source` reader and `writers` for PNG output.
pub mod source;
pub use source::{SourceError, SourceImage};

pub mod writers;
