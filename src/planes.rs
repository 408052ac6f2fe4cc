//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of pixels with an origin at 0,0 and a rectangle on
//! the complex plane defined by a bottom-left and a top-right corner.
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the bottom-left corner and top-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a pixel in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane, and maps pixels of the one onto points
/// of the other.
///
/// The corners are taken as given.  Nothing checks that the top-right
/// corner is actually above and to the right of the bottom-left one; a
/// reversed pair just walks the complex plane backwards.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The width and height of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// bottom-left and top-right
    pub complex_plane: ComplexPlane,
    // How far one pixel moves along the real and imaginary axes.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Takes the size of the integral plane, and two points describing
    /// the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        bottomleft: Complex<f64>,
        topright: Complex<f64>,
    ) -> PlaneMapper {
        let steps = (
            (topright.re - bottomleft.re) / (width as f64),
            (topright.im - bottomleft.im) / (height as f64),
        );

        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(bottomleft, topright),
            steps,
        }
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The distance, along the real and imaginary axes respectively,
    /// between neighboring pixels.
    pub fn steps(&self) -> (f64, f64) {
        self.steps
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// it samples on the complex plane.  Pixel 0,0 is exactly the
    /// bottom-left corner; the top-right corner itself is one step
    /// past the last pixel.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let origin = self.complex_plane.0;
        Complex::new(
            origin.re + self.steps.0 * (pixel.0 as f64),
            origin.im + self.steps.1 * (pixel.1 as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_corners_are_accepted() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert_eq!(pm.steps(), (0.5, -0.5));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.0, 1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn degenerate_corners_map_every_pixel_to_one_point() {
        let corner = Complex::new(0.25, 0.25);
        let pm = PlaneMapper::new(4, 4, corner, corner);
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), corner);
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(2.0, 2.0));
    }

    #[test]
    fn columns_and_rows_step_independently() {
        let pm = PlaneMapper::new(640, 480, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert_eq!(pm.steps(), (2.0 / 640.0, 2.0 / 480.0));
        assert_eq!(pm.pixel_to_point(&Pixel(320, 0)), Complex::new(0.0, -1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 240)), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn plane_reports_its_size() {
        let pm = PlaneMapper::new(640, 480, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert_eq!(pm.len(), 640 * 480);
        assert!(!pm.is_empty());
        assert!(PlaneMapper::new(0, 480, Complex::new(0.0, 0.0), Complex::new(1.0, 1.0)).is_empty());
    }
}
