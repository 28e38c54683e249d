//! RGB pixel grids and their I/O helpers.
//!
//! - [`rgb`]: the owned [`Raster`] grid and its [`Pixel`] element.
//! - [`io`]: image file loading/saving and JSON output for tooling. The
//!   transforms in [`crate::filters`] never touch this module; the core is
//!   pure in-memory processing.

pub mod io;
pub mod rgb;

pub use rgb::{Pixel, Raster};
