//! Owned RGB raster in row-major layout (stride == width).
//!
//! Storage is a flat `Vec<Pixel>`; the logical index convention is (x, y)
//! with x ∈ [0, w) and y ∈ [0, h). Every coordinate holds a defined pixel
//! from construction onward, and dimensions never change for a given
//! instance. Out-of-bounds access panics via slice indexing.
use serde::Serialize;
use std::fmt;

/// One RGB pixel. The three channels are independent 0–255 intensities;
/// no operation in this crate mixes one channel's value into another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Dense width × height grid of [`Pixel`]s.
///
/// Equality is structural: same dimensions and every pixel equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Pixel>,
}

impl Raster {
    /// Construct an all-black grid of size `w × h`.
    ///
    /// Dimensions are `usize`, so negative sizes are unrepresentable.
    /// Zero-area grids are permitted; every transform treats them as empty.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![Pixel::default(); w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel at (x, y). Panics when (x, y) is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[self.idx(x, y)]
    }

    /// Set the pixel at (x, y), silently rejecting out-of-range channels.
    ///
    /// If any of `r`, `g`, `b` falls outside [0, 255] the call is a complete
    /// no-op: none of the three channels change and no error is raised. The
    /// caller can only detect rejection by reading the pixel back.
    pub fn set_pixel(&mut self, x: usize, y: usize, r: i32, g: i32, b: i32) {
        let in_range = |v: i32| (0..=255).contains(&v);
        if !(in_range(r) && in_range(g) && in_range(b)) {
            return;
        }
        let i = self.idx(x, y);
        self.data[i] = Pixel {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        };
    }

    #[inline]
    /// Borrow row `y` as a contiguous slice.
    pub fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Mutably borrow row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

impl fmt::Display for Raster {
    /// One `r:g:b` line per pixel, row-major (y outer, x inner).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.h {
            for px in self.row(y) {
                writeln!(f, "{}:{}:{}", px.r, px.g, px.b)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_black() {
        let g = Raster::new(3, 2);
        assert_eq!((g.w, g.h), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(g.get(x, y), Pixel { r: 0, g: 0, b: 0 });
            }
        }
    }

    #[test]
    fn set_pixel_rejects_out_of_range_triples_whole() {
        let mut g = Raster::new(2, 2);
        g.set_pixel(0, 0, 10, 20, 30);

        // One bad channel rejects the whole triple; the others stay put.
        g.set_pixel(0, 0, 99, 300, 99);
        g.set_pixel(0, 0, -1, 99, 99);
        assert_eq!(g.get(0, 0), Pixel { r: 10, g: 20, b: 30 });

        g.set_pixel(0, 0, 0, 255, 128);
        assert_eq!(g.get(0, 0), Pixel { r: 0, g: 255, b: 128 });
    }

    #[test]
    fn equality_is_structural() {
        let mut a = Raster::new(2, 2);
        let mut b = Raster::new(2, 2);
        assert_eq!(a, b);

        a.set_pixel(1, 0, 5, 5, 5);
        assert_ne!(a, b);
        b.set_pixel(1, 0, 5, 5, 5);
        assert_eq!(a, b);

        assert_ne!(Raster::new(2, 3), Raster::new(3, 2));
    }

    #[test]
    fn display_dumps_row_major() {
        let mut g = Raster::new(2, 2);
        g.set_pixel(0, 0, 1, 2, 3);
        g.set_pixel(1, 0, 4, 5, 6);
        g.set_pixel(0, 1, 7, 8, 9);
        assert_eq!(g.to_string(), "1:2:3\n4:5:6\n7:8:9\n0:0:0\n");
    }
}
