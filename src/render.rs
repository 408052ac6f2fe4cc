// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rasterizer: walks every pixel of the output grid, finds the
//! point of the complex plane it stands for, and asks Newton's method
//! which basin that point belongs to.

use image::RgbaImage;
use itertools::iproduct;
use num::Complex;
use std::time::Instant;

use newton::get_color;
use planes::{Pixel, PlaneMapper};

/// Width of the rendered image, in pixels.
pub const WIDTH: usize = 640;

/// Height of the rendered image, in pixels.
pub const HEIGHT: usize = 480;

/// Holds the mapping between the fixed-size pixel grid and the region
/// of the complex plane being rendered.  Once built it doesn't change,
/// so rendering twice gets you the same image twice.
pub struct NewtonRenderer {
    plane: PlaneMapper,
}

impl NewtonRenderer {
    /// Requires the bottom-left and top-right corners of the complex
    /// plane where the calculation will take place.  The corners are
    /// not checked for order.
    pub fn new(bottomleft: Complex<f64>, topright: Complex<f64>) -> Self {
        NewtonRenderer {
            plane: PlaneMapper::new(WIDTH, HEIGHT, bottomleft, topright),
        }
    }

    /// The mapping this renderer samples through.
    pub fn planes(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Colors every pixel of the grid.  Column `i` and row `j` of the
    /// image are painted with the basin of `pixel_to_point(Pixel(i, j))`,
    /// so row 0 is the row through the bottom-left corner.
    pub fn render(&self) -> RgbaImage {
        let (width, height) = (self.plane.integral_plane.0, self.plane.integral_plane.1);
        debug!(
            "rendering {}x{} over {} .. {}",
            width, height, self.plane.complex_plane.0, self.plane.complex_plane.1
        );

        let start = Instant::now();
        let mut image = RgbaImage::new(width as u32, height as u32);
        for (column, row) in iproduct!(0..width, 0..height) {
            let point = self.plane.pixel_to_point(&Pixel(column, row));
            image.put_pixel(column as u32, row as u32, get_color(point));
        }
        info!("rendered {} pixels in {:?}", self.plane.len(), start.elapsed());
        image
    }
}

/// The engine's entry point: render the fractal over the rectangle
/// between `bottomleft` and `topright` into a 640x480 RGBA buffer.
pub fn generate_fractal(bottomleft: Complex<f64>, topright: Complex<f64>) -> RgbaImage {
    NewtonRenderer::new(bottomleft, topright).render()
}
