//! Persisting a rendered fractal.  The renderer knows nothing about
//! files; it hands over a grid of RGBA pixels, row 0 first, and this
//! module picks an encoder from the file name and writes it out.

use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype};
use image::{ColorType, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use errors::FractalError;

/// The raster formats we can write.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// Portable Network Graphics.
    Png,
    /// Netpbm's PAM, the one member of the PNM family that carries alpha.
    Pam,
}

impl OutputFormat {
    /// Guess the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<OutputFormat, FractalError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_ref().map(|e| e.as_str()) {
            Some("png") => Ok(OutputFormat::Png),
            Some("pam") | Some("pnm") => Ok(OutputFormat::Pam),
            _ => Err(FractalError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Encode `image` into the file at `path`, in whatever format the
/// file name asks for.
pub fn write_image<P: AsRef<Path>>(path: P, image: &RgbaImage) -> Result<(), FractalError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let (width, height) = image.dimensions();
    let pixels: &[u8] = image;
    let output = BufWriter::new(File::create(path)?);

    match format {
        OutputFormat::Png => {
            PNGEncoder::new(output).encode(pixels, width, height, ColorType::RGBA(8))?;
        }
        OutputFormat::Pam => {
            let mut encoder = PNMEncoder::new(output).with_subtype(PNMSubtype::ArbitraryMap);
            encoder.encode(pixels, width, height, ColorType::RGBA(8))?;
        }
    }
    info!("wrote {}x{} {:?} image to {}", width, height, format, path.display());
    Ok(())
}
