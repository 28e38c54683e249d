#![doc = include_str!("../README.md")]

pub mod filters;
pub mod raster;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the pixel grid and the two transforms.
pub use crate::filters::{box_blur, sobel_edges};
pub use crate::raster::{Pixel, Raster};

/// Small prelude for quick experiments.
///
/// ```
/// use raster_filters::prelude::*;
///
/// let mut img = Raster::new(3, 3);
/// img.set_pixel(1, 1, 255, 255, 255);
///
/// let edges = sobel_edges(&box_blur(img, 1));
/// assert_eq!((edges.w, edges.h), (3, 3));
/// ```
pub mod prelude {
    pub use crate::filters::{box_blur, sobel_edges};
    pub use crate::raster::{Pixel, Raster};
}
