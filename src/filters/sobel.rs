//! Sobel edge detection with logarithmic grayscale mapping.
//!
//! - Convolves the fixed 3×3 kernel pair per channel with border clamping:
//!   out-of-bounds taps read the nearest in-bounds pixel (replicate), so the
//!   full kernel is always applied.
//! - Combines channel gradients into one scalar energy per pixel:
//!   `Σ (gx_c² + gy_c²)` over r, g, b. For 8-bit channels the energy stays
//!   below ~25 million, well inside `i64`.
//! - Maps energy to intensity via `trunc(30·ln(1+energy) − 256)` clamped to
//!   [0, 255]; the output grid is grayscale (all three channels equal).
//!
//! Complexity: O(W·H); rows are processed in parallel.
use crate::raster::{Pixel, Raster};
use log::debug;
use rayon::prelude::*;

/// Kernels indexed `[dx][dy]` to match the grid's (x, y) convention.
type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[1, 0, -1], [2, 0, -2], [1, 0, -1]];
const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Compute the Sobel edge map of `src` as a new grayscale grid.
///
/// Pure: reads only `src`, returns a fresh grid of identical dimensions.
pub fn sobel_edges(src: &Raster) -> Raster {
    let w = src.w;
    let h = src.h;
    let mut out = Raster::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    out.data.par_chunks_mut(w).enumerate().for_each(|(y, out_row)| {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        for (x, dst) in out_row.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut gx = [0i32; 3];
            let mut gy = [0i32; 3];
            for (dy, row) in rows.iter().enumerate() {
                for (dx, &xi) in x_idx.iter().enumerate() {
                    let kx = SOBEL_KERNEL_X[dx][dy];
                    let ky = SOBEL_KERNEL_Y[dx][dy];
                    let px = row[xi];
                    for (c, &v) in [px.r, px.g, px.b].iter().enumerate() {
                        gx[c] += kx * v as i32;
                        gy[c] += ky * v as i32;
                    }
                }
            }

            let mut energy = 0i64;
            for c in 0..3 {
                energy += (gx[c] as i64).pow(2) + (gy[c] as i64).pow(2);
            }

            let v = mag2gray(energy);
            *dst = Pixel { r: v, g: v, b: v };
        }
    });
    debug!("sobel_edges ({}x{})", w, h);
    out
}

/// Map squared-gradient energy to a grayscale intensity.
///
/// `trunc(30·ln(1+energy) − 256)` clamped into [0, 255]. The `as i64` cast
/// truncates toward zero, which small energies rely on.
fn mag2gray(energy: i64) -> u8 {
    let mapped = (30.0 * (energy as f64 + 1.0).ln() - 256.0) as i64;
    mapped.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mag2gray_range_endpoints() {
        // ln(1) = 0 maps to -256, clamped to 0.
        assert_eq!(mag2gray(0), 0);
        // Documented max energy: 30*ln(24969601) - 256 = 254.995.
        assert_eq!(mag2gray(24_969_600), 254);
        assert_eq!(mag2gray(i64::MAX), 255);
    }

    #[test]
    fn mag2gray_truncates_toward_zero() {
        // 30*ln(5597) - 256 = 2.899..; trunc gives 2, rounding would give 3.
        assert_eq!(mag2gray(5596), 2);
        // 30*ln(5001) - 256 = -0.478; trunc gives 0.
        assert_eq!(mag2gray(5000), 0);
    }

    #[test]
    fn flat_image_has_no_edges() {
        let mut g = Raster::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                g.set_pixel(x, y, 180, 90, 45);
            }
        }
        let edges = sobel_edges(&g);
        assert_eq!(edges, Raster::new(4, 3));
    }

    #[test]
    fn output_is_grayscale() {
        let mut g = Raster::new(3, 3);
        g.set_pixel(0, 0, 255, 0, 0);
        g.set_pixel(2, 2, 0, 0, 255);
        let edges = sobel_edges(&g);
        for px in &edges.data {
            assert_eq!(px.r, px.g);
            assert_eq!(px.g, px.b);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let mut g = Raster::new(2, 2);
        g.set_pixel(0, 0, 200, 100, 50);
        let before = g.clone();
        let _ = sobel_edges(&g);
        assert_eq!(g, before);
    }
}
