//! Newton's method for x^8 - 1, and the coloring of the eight basins
//! it produces.

use image::Rgba;
use num::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

/// How close an iterate has to get to a root before we call it
/// converged.
pub const EPSILON: f64 = 0.00001;

/// The number of times the Newton step is applied to a point before
/// we give up on it.
pub const MAX_ITERATIONS: usize = 100;

/// The eighth roots of unity.  The order matters: when testing an
/// iterate, roots are checked from first to last and the first hit
/// wins.
pub const ROOTS: [Complex<f64>; 8] = [
    Complex { re: 1.0, im: 0.0 },
    Complex { re: -1.0, im: 0.0 },
    Complex { re: 0.0, im: 1.0 },
    Complex { re: 0.0, im: -1.0 },
    Complex { re: FRAC_1_SQRT_2, im: FRAC_1_SQRT_2 },
    Complex { re: -FRAC_1_SQRT_2, im: -FRAC_1_SQRT_2 },
    Complex { re: FRAC_1_SQRT_2, im: -FRAC_1_SQRT_2 },
    Complex { re: -FRAC_1_SQRT_2, im: FRAC_1_SQRT_2 },
];

/// One color per root, in the same order as `ROOTS`.
pub const PALETTE: [Rgba<u8>; 8] = [
    Rgba([0, 0, 0, 255]),
    Rgba([85, 65, 95, 255]),
    Rgba([100, 105, 100, 255]),
    Rgba([215, 115, 85, 255]),
    Rgba([80, 140, 215, 255]),
    Rgba([100, 185, 100, 255]),
    Rgba([230, 200, 110, 255]),
    Rgba([220, 245, 255, 255]),
];

/// The color of a point that never settled on a root.
pub const NON_CONVERGENT: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A single Newton step, x - f(x)/f'(x), for f(x) = x^8 - 1.  Zero
/// isn't special-cased; it produces NaNs, and NaNs never converge.
#[inline]
pub fn newton_step(x: Complex<f64>) -> Complex<f64> {
    let x7 = (1..7).fold(x, |acc, _| acc * x);
    let x8 = x7 * x;
    x - (x8 - 1.0) / (x7 * 8.0)
}

/// Index into `ROOTS` of the first root within `EPSILON` of `z`.
fn nearest_root(z: Complex<f64>) -> Option<usize> {
    ROOTS.iter().position(|root| (z - root).norm() < EPSILON)
}

/// Runs Newton's method from `p` and returns the index of the root it
/// converges to, or nothing if it hasn't converged by the time we've
/// spent `MAX_ITERATIONS` steps on it.
pub fn classify(p: Complex<f64>) -> Option<usize> {
    let mut z = newton_step(p);
    for _ in 1..MAX_ITERATIONS {
        if let Some(index) = nearest_root(z) {
            return Some(index);
        }
        z = newton_step(z);
    }
    None
}

/// The palette color for the basin `p` falls into.
pub fn get_color(p: Complex<f64>) -> Rgba<u8> {
    match classify(p) {
        Some(index) => PALETTE[index],
        None => NON_CONVERGENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_are_fixed_points() {
        for root in ROOTS.iter() {
            let next = newton_step(*root);
            assert!((next - root).norm() < 1e-12, "{} moved to {}", root, next);
        }
    }

    #[test]
    fn roots_are_roots_of_unity() {
        for root in ROOTS.iter() {
            let eighth = (1..8).fold(*root, |acc, _| acc * root);
            assert!((eighth - 1.0).norm() < 1e-12);
        }
    }

    #[test]
    fn points_next_to_a_root_classify_to_it() {
        for (index, root) in ROOTS.iter().enumerate() {
            let nudged = root + Complex::new(1e-9, -1e-9);
            assert_eq!(classify(nudged), Some(index));
            assert_eq!(get_color(nudged), PALETTE[index]);
        }
    }

    #[test]
    fn distant_points_on_the_axes_find_their_roots() {
        assert_eq!(classify(Complex::new(2.0, 0.0)), Some(0));
        assert_eq!(classify(Complex::new(-2.0, 0.0)), Some(1));
        assert_eq!(classify(Complex::new(0.0, 2.0)), Some(2));
        assert_eq!(classify(Complex::new(0.0, -2.0)), Some(3));
    }

    #[test]
    fn convergence_on_the_last_check_counts() {
        // These land within EPSILON of 1 on exactly the 99th checked
        // iterate, one short of the previous check.
        assert_eq!(classify(Complex::new(339057.51582887355, 0.0)), Some(0));
        assert_eq!(classify(Complex::new(350000.0, 0.0)), Some(0));
    }

    #[test]
    fn convergence_one_check_too_late_does_not() {
        // Needs a 100th check, and the 100th iterate is never tested.
        assert_eq!(classify(Complex::new(400000.0, 0.0)), None);
        assert_eq!(classify(Complex::new(-400000.0, 0.0)), None);
        assert_eq!(get_color(Complex::new(400000.0, 0.0)), NON_CONVERGENT);
    }

    #[test]
    fn zero_never_converges() {
        assert!(newton_step(Complex::new(0.0, 0.0)).re.is_nan());
        assert_eq!(classify(Complex::new(0.0, 0.0)), None);
        assert_eq!(get_color(Complex::new(0.0, 0.0)), NON_CONVERGENT);
    }

    #[test]
    fn non_finite_points_never_converge() {
        assert_eq!(classify(Complex::new(::std::f64::NAN, 0.0)), None);
        assert_eq!(classify(Complex::new(::std::f64::INFINITY, 1.0)), None);
    }

    #[test]
    fn every_color_is_opaque() {
        assert!(PALETTE.iter().all(|c| c.0[3] == 255));
        assert_eq!(NON_CONVERGENT.0[3], 255);
    }
}
