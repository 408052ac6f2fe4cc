#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! Newton's method finds a root of a polynomial by starting somewhere
//! on the complex plane and repeatedly sliding down the tangent of the
//! function until it lands on a zero.  For x^8 - 1 there are eight
//! such zeros, the eighth roots of unity, and every starting point
//! either settles on one of them or wanders off.  The set of starting
//! points that settle on the same root is that root's "basin," and the
//! borders between the basins are where things get interesting: tiny
//! changes in the starting point send the iteration to a completely
//! different root.
//!
//! This crate takes a fixed 640x480 grid of pixels, maps it onto a
//! rectangle of the complex plane, runs Newton's method from every
//! pixel, and paints each pixel with the color of the root it lands
//! on.  Points that haven't settled after a hundred steps are painted
//! black.

#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
#[cfg(test)]
extern crate tempfile;

pub mod errors;
pub mod newton;
pub mod output;
pub mod planes;
pub mod render;

pub use errors::FractalError;
pub use newton::{classify, get_color, newton_step};
pub use output::{write_image, OutputFormat};
pub use render::{generate_fractal, NewtonRenderer, HEIGHT, WIDTH};
