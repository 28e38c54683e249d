//! Spatial transforms over [`crate::raster::Raster`] grids.
//!
//! Two engines, each producing a brand-new grid of the input's dimensions:
//!
//! - [`blur`]: iterative box blurring — per-channel truncated integer
//!   averaging over a border-clamped 1–3 × 1–3 window.
//! - [`sobel`]: Sobel edge detection — per-channel 3×3 gradients with
//!   replicate-clamped sampling, squared-gradient energy, and a logarithmic
//!   grayscale mapping.
//!
//! Design goals
//! - Exact integer semantics: truncating division and truncating float→int
//!   conversion, since border results depend on truncation toward zero.
//! - Engines read only through the grid's accessors; per-pixel outputs have
//!   no dependency on sibling outputs, so each pass parallelizes by row.

pub mod blur;
pub mod sobel;

pub use blur::box_blur;
pub use sobel::sobel_edges;
