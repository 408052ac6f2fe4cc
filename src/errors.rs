//! The ways writing a fractal out can fail.  Rendering itself cannot
//! fail; only the trip to the filesystem can.

use image::ImageError;
use std::io;

/// Errors raised while persisting a rendered fractal.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// The output file could not be created or written.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),

    /// The encoder rejected the pixel buffer.
    #[fail(display = "could not encode image: {}", _0)]
    Encode(#[cause] ImageError),

    /// The output path names a format we don't know how to encode.
    #[fail(display = "unsupported output format: {}", _0)]
    UnsupportedFormat(String),
}

impl From<io::Error> for FractalError {
    fn from(err: io::Error) -> Self {
        FractalError::Io(err)
    }
}

impl From<ImageError> for FractalError {
    fn from(err: ImageError) -> Self {
        FractalError::Encode(err)
    }
}
